//! The document driver: pulls events from the XML reader and routes them
//! through the handler tree.
//!
//! The driver owns the delegation path, the list of element names open
//! between the current `DescriptorRecord` start tag and the cursor. For
//! each event it re-walks the handler tree from the root along that path.
//! A segment no handler claims severs delegation for start tags and
//! attribute capture, but character data still passes through to the
//! deepest registered handler on the path, so inline markup inside a
//! free-text field does not split its surrounding text.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::config::{ParserConfig, ValidationPolicy};
use crate::error::{MeshError, Result};
use crate::handler::{Assemble, Attributes, ElementHandler, RecordHandler};
use crate::model::MeshRecord;
use crate::schema;

/// Receiver for records as they are completed.
///
/// The parser calls `handle` exactly once per well-formed record, in
/// document order, and hands over exclusive ownership. A sink error is
/// always fatal for the stream, regardless of validation policy.
pub trait RecordSink {
    /// Take ownership of one completed record.
    ///
    /// # Errors
    /// Any error aborts the parse and propagates to the caller.
    fn handle(&mut self, record: MeshRecord) -> Result<()>;
}

impl<F> RecordSink for F
where
    F: FnMut(MeshRecord) -> Result<()>,
{
    fn handle(&mut self, record: MeshRecord) -> Result<()> {
        self(record)
    }
}

/// Streaming parser for a MeSH descriptor distribution.
///
/// Holds one handler tree that is reused across records and across
/// `parse` calls; memory stays proportional to a single record, never to
/// the document.
#[derive(Debug, Default)]
pub struct MeshParser {
    config: ParserConfig,
    root: RecordHandler,
}

impl MeshParser {
    /// Create a parser with the default (strict) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit configuration.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            root: RecordHandler::new(),
        }
    }

    /// Parse a complete document from a buffered byte stream, delivering
    /// each completed record to `sink` in document order.
    ///
    /// # Errors
    /// Structural problems, unresolved schema references, IO failures and
    /// sink failures are always fatal. Record-level validation failures
    /// are fatal under [`ValidationPolicy::Strict`] and logged and
    /// skipped under [`ValidationPolicy::SkipMalformed`].
    pub fn parse<R: BufRead>(&mut self, input: R, sink: &mut dyn RecordSink) -> Result<()> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;

        self.root.reset();
        let mut buf = Vec::new();
        // Open element names inside the current record, outermost first.
        let mut path: Vec<String> = Vec::new();
        // When skipping a malformed record, the number of its still-open
        // elements; the record is done when this reaches zero.
        let mut skip_depth: Option<usize> = None;
        let mut records = 0usize;

        loop {
            let event = reader.read_event_into(&mut buf)?;
            match event {
                Event::DocType(text) => {
                    let declaration = text.unescape().map_err(quick_xml::Error::from)?;
                    if schema::resolve_external_subset(declaration.trim())?.is_some() {
                        debug!("resolved external DTD reference against bundled copy");
                    }
                }
                Event::Start(start) => {
                    if let Some(depth) = skip_depth.as_mut() {
                        *depth += 1;
                    } else if path.is_empty() {
                        let name = element_name(&start);
                        if name == schema::DESCRIPTOR_RECORD {
                            let attrs = collect_attributes(&start)?;
                            self.root.on_start(&name, &attrs);
                            path.push(name);
                        }
                    } else {
                        let name = element_name(&start);
                        let attrs = collect_attributes(&start)?;
                        path.push(name);
                        if let Some(handler) = resolve(&mut self.root, &path[1..]) {
                            let own = &path[path.len() - 1];
                            handler.on_start(own, &attrs);
                        }
                    }
                }
                Event::Text(text) => {
                    if skip_depth.is_none() && !path.is_empty() {
                        if let Some(handler) = resolve_deepest(&mut self.root, &path[1..]) {
                            let text = text.unescape().map_err(quick_xml::Error::from)?;
                            handler.on_text(text.as_ref());
                        }
                    }
                }
                Event::CData(data) => {
                    if skip_depth.is_none() && !path.is_empty() {
                        if let Some(handler) = resolve_deepest(&mut self.root, &path[1..]) {
                            handler.on_text(&String::from_utf8_lossy(&data));
                        }
                    }
                }
                Event::End(end) => {
                    if let Some(depth) = skip_depth.as_mut() {
                        *depth -= 1;
                        if *depth == 0 {
                            skip_depth = None;
                            self.root.reset();
                        }
                        buf.clear();
                        continue;
                    }
                    if path.is_empty() {
                        buf.clear();
                        continue;
                    }
                    let name = String::from_utf8_lossy(end.local_name().as_ref()).into_owned();
                    match path.pop() {
                        Some(open) if open == name => {}
                        open => {
                            return Err(MeshError::Structural(format!(
                                "close of '{name}' does not match open element {open:?}"
                            )));
                        }
                    }

                    if path.is_empty() {
                        match self.root.assemble() {
                            Ok(record) => {
                                records += 1;
                                debug!(descriptor = %record.descriptor(), "record completed");
                                sink.handle(record)?;
                            }
                            Err(error) => self.recover(error, &mut path, &mut skip_depth)?,
                        }
                        self.root.reset();
                    } else if let Some(parent) = resolve(&mut self.root, &path[1..]) {
                        if parent.delegate_mut(&name).is_some() {
                            if let Err(error) = parent.on_child_closed(&name) {
                                let error = self.with_record_hint(error);
                                self.recover(error, &mut path, &mut skip_depth)?;
                            }
                        }
                    }
                }
                Event::Eof => {
                    if !path.is_empty() || skip_depth.is_some() {
                        return Err(MeshError::Structural(
                            "document ended inside a record".to_string(),
                        ));
                    }
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        debug!(records, "document complete");
        Ok(())
    }

    /// Parse a complete document held in memory.
    ///
    /// # Errors
    /// Same conditions as [`MeshParser::parse`].
    pub fn parse_str(&mut self, xml: &str, sink: &mut dyn RecordSink) -> Result<()> {
        self.parse(xml.as_bytes(), sink)
    }

    /// Attach the in-progress descriptor name/UI to a record-scoped error
    /// that does not carry one yet.
    fn with_record_hint(&self, error: MeshError) -> MeshError {
        match error {
            MeshError::MalformedRecord {
                record: None,
                reason,
            } => MeshError::MalformedRecord {
                record: self.root.descriptor_hint(),
                reason,
            },
            other => other,
        }
    }

    /// Apply the validation policy to a failure inside a record. Under
    /// skip-and-continue the rest of the record is consumed without
    /// delivering events; `path.len()` open elements remain to unwind.
    fn recover(
        &mut self,
        error: MeshError,
        path: &mut Vec<String>,
        skip_depth: &mut Option<usize>,
    ) -> Result<()> {
        if self.config.policy == ValidationPolicy::Strict || !error.is_record_scoped() {
            return Err(error);
        }
        warn!(%error, "skipping malformed record");
        if !path.is_empty() {
            *skip_depth = Some(path.len());
            path.clear();
        }
        Ok(())
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn collect_attributes(start: &BytesStart<'_>) -> Result<Attributes> {
    let mut pairs = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .into_owned();
        pairs.push((key, value));
    }
    Ok(Attributes::new(pairs))
}

/// Walk the handler tree along the open-element path, starting below the
/// record element. `None` when some segment is unclaimed.
fn resolve<'a>(
    root: &'a mut RecordHandler,
    path: &[String],
) -> Option<&'a mut dyn ElementHandler> {
    let mut current: &mut dyn ElementHandler = root;
    for name in path {
        current = current.delegate_mut(name)?;
    }
    Some(current)
}

/// Length of the longest path prefix every handler on the walk claims.
fn claimed_depth(root: &mut RecordHandler, path: &[String]) -> usize {
    let mut current: &mut dyn ElementHandler = root;
    for (index, name) in path.iter().enumerate() {
        match current.delegate_mut(name) {
            Some(child) => current = child,
            None => return index,
        }
    }
    path.len()
}

/// The deepest registered handler on the open-element path. Character
/// data under an unregistered element belongs to the nearest enclosing
/// handler, the way a text accumulator sees through markup it does not
/// model.
fn resolve_deepest<'a>(
    root: &'a mut RecordHandler,
    path: &[String],
) -> Option<&'a mut dyn ElementHandler> {
    let depth = claimed_depth(&mut *root, path);
    resolve(root, &path[..depth])
}
