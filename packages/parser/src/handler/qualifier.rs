//! Handlers for record-level composites: allowable qualifiers, entry
//! combinations and the originators triple.

use crate::error::{MeshError, Result};
use crate::model::{AllowableQualifier, EntryCombination, NameUi, RecordOriginators};
use crate::schema;

use super::{Assemble, ElementHandler, NameUiHandler, TextElementHandler};

/// Builder for `AllowableQualifier (QualifierReferredTo, Abbreviation)`.
#[derive(Debug)]
pub struct AllowableQualifierHandler {
    name_ui: NameUiHandler,
    abbreviation: TextElementHandler,
}

impl AllowableQualifierHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name_ui: NameUiHandler::qualifier(),
            abbreviation: TextElementHandler::new(),
        }
    }
}

impl Default for AllowableQualifierHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for AllowableQualifierHandler {
    fn reset(&mut self) {
        self.name_ui.reset();
        self.abbreviation.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::QUALIFIER_REFERRED_TO => Some(&mut self.name_ui),
            schema::ABBREVIATION => Some(&mut self.abbreviation),
            _ => None,
        }
    }
}

impl Assemble for AllowableQualifierHandler {
    type Output = AllowableQualifier;

    fn assemble(&self) -> Result<AllowableQualifier> {
        Ok(AllowableQualifier::new(
            self.name_ui.assemble()?,
            self.abbreviation.value(),
        ))
    }
}

/// Builder for the `ECIN`/`ECOUT` halves of an entry combination: one
/// descriptor reference plus one qualifier reference.
#[derive(Debug)]
struct DescriptorQualifierHandler {
    descriptor: NameUiHandler,
    qualifier: NameUiHandler,
}

impl DescriptorQualifierHandler {
    fn new() -> Self {
        Self {
            descriptor: NameUiHandler::descriptor(),
            qualifier: NameUiHandler::qualifier(),
        }
    }
}

impl ElementHandler for DescriptorQualifierHandler {
    fn reset(&mut self) {
        self.descriptor.reset();
        self.qualifier.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::DESCRIPTOR_REFERRED_TO => Some(&mut self.descriptor),
            schema::QUALIFIER_REFERRED_TO => Some(&mut self.qualifier),
            _ => None,
        }
    }
}

/// Builder for `EntryCombination (ECIN, ECOUT)`.
///
/// Both descriptors are required; the output qualifier is the one
/// genuinely optional reference in the shape.
#[derive(Debug)]
pub struct EntryCombinationHandler {
    ecin: DescriptorQualifierHandler,
    ecout: DescriptorQualifierHandler,
}

impl EntryCombinationHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ecin: DescriptorQualifierHandler::new(),
            ecout: DescriptorQualifierHandler::new(),
        }
    }
}

impl Default for EntryCombinationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for EntryCombinationHandler {
    fn reset(&mut self) {
        self.ecin.reset();
        self.ecout.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::ECIN => Some(&mut self.ecin),
            schema::ECOUT => Some(&mut self.ecout),
            _ => None,
        }
    }
}

impl Assemble for EntryCombinationHandler {
    type Output = EntryCombination;

    fn assemble(&self) -> Result<EntryCombination> {
        let in_descriptor = required(self.ecin.descriptor.assemble_opt(), "ECIN descriptor")?;
        let in_qualifier = required(self.ecin.qualifier.assemble_opt(), "ECIN qualifier")?;
        let out_descriptor = required(self.ecout.descriptor.assemble_opt(), "ECOUT descriptor")?;
        Ok(EntryCombination::new(
            in_descriptor,
            in_qualifier,
            out_descriptor,
            self.ecout.qualifier.assemble_opt(),
        ))
    }
}

fn required(pair: Option<NameUi>, what: &str) -> Result<NameUi> {
    pair.ok_or_else(|| MeshError::MalformedRecord {
        record: None,
        reason: format!("entry combination is missing its {what}"),
    })
}

/// Builder for `RecordOriginatorsList`: originator plus optional
/// maintainer and authorizer.
#[derive(Debug, Default)]
pub struct OriginatorsHandler {
    originator: TextElementHandler,
    maintainer: TextElementHandler,
    authorizer: TextElementHandler,
}

impl OriginatorsHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElementHandler for OriginatorsHandler {
    fn reset(&mut self) {
        self.originator.reset();
        self.maintainer.reset();
        self.authorizer.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::RECORD_ORIGINATOR => Some(&mut self.originator),
            schema::RECORD_MAINTAINER => Some(&mut self.maintainer),
            schema::RECORD_AUTHORIZER => Some(&mut self.authorizer),
            _ => None,
        }
    }
}

impl Assemble for OriginatorsHandler {
    type Output = Option<RecordOriginators>;

    /// `None` when the whole originators element never appeared.
    fn assemble(&self) -> Result<Option<RecordOriginators>> {
        let originator = self.originator.value();
        let maintainer = self.maintainer.value_opt();
        let authorizer = self.authorizer.value_opt();
        if originator.is_empty() && maintainer.is_none() && authorizer.is_none() {
            return Ok(None);
        }
        Ok(Some(RecordOriginators::new(
            originator, maintainer, authorizer,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed_text(handler: &mut dyn ElementHandler, path: &[&str], text: &str) {
        let mut current = handler;
        for name in path {
            current = current.delegate_mut(name).expect("registered");
        }
        current.on_text(text);
    }

    #[test]
    fn test_allowable_qualifier_assembly() {
        let mut handler = AllowableQualifierHandler::new();
        feed_text(
            &mut handler,
            &[schema::QUALIFIER_REFERRED_TO, schema::QUALIFIER_UI],
            "Q000008",
        );
        feed_text(
            &mut handler,
            &[
                schema::QUALIFIER_REFERRED_TO,
                schema::QUALIFIER_NAME,
                schema::STRING,
            ],
            "administration & dosage",
        );
        feed_text(&mut handler, &[schema::ABBREVIATION], "AD");

        let qualifier = handler.assemble().unwrap();
        assert_eq!(qualifier.name_ui().ui(), "Q000008");
        assert_eq!(qualifier.abbreviation(), "AD");
    }

    #[test]
    fn test_entry_combination_requires_descriptors() {
        let handler = EntryCombinationHandler::new();
        let err = handler.assemble().unwrap_err();
        assert!(matches!(err, MeshError::MalformedRecord { .. }));
    }

    #[test]
    fn test_entry_combination_out_qualifier_optional() {
        let mut handler = EntryCombinationHandler::new();
        feed_text(
            &mut handler,
            &[
                schema::ECIN,
                schema::DESCRIPTOR_REFERRED_TO,
                schema::DESCRIPTOR_UI,
            ],
            "D000022",
        );
        feed_text(
            &mut handler,
            &[
                schema::ECIN,
                schema::QUALIFIER_REFERRED_TO,
                schema::QUALIFIER_UI,
            ],
            "Q000000981",
        );
        feed_text(
            &mut handler,
            &[
                schema::ECOUT,
                schema::DESCRIPTOR_REFERRED_TO,
                schema::DESCRIPTOR_UI,
            ],
            "D000284",
        );

        let combination = handler.assemble().unwrap();
        assert_eq!(combination.in_descriptor().ui(), "D000022");
        assert_eq!(combination.out_qualifier(), None);
    }

    #[test]
    fn test_originators_absent_when_empty() {
        let handler = OriginatorsHandler::new();
        assert_eq!(handler.assemble().unwrap(), None);
    }

    #[test]
    fn test_originators_assembly() {
        let mut handler = OriginatorsHandler::new();
        feed_text(&mut handler, &[schema::RECORD_ORIGINATOR], "abc");
        feed_text(&mut handler, &[schema::RECORD_MAINTAINER], "def");
        let originators = handler.assemble().unwrap().expect("present");
        assert_eq!(originators.originator(), "abc");
        assert_eq!(originators.maintainer(), Some("def"));
        assert_eq!(originators.authorizer(), None);
    }
}
