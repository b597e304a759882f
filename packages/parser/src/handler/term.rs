//! Handler for term elements.

use crate::error::{MeshError, Result};
use crate::model::{LexicalTag, NameUi, Term};
use crate::schema;

use super::{
    Assemble, Attributes, DateHandler, ElementHandler, ListHandler, TextElementHandler,
};

/// Builder for `Term` elements: the term string, its UI, optional
/// variants, thesaurus memberships and the five metadata attributes
/// captured from the start tag.
#[derive(Debug)]
pub struct TermHandler {
    ui: TextElementHandler,
    string: TextElementHandler,
    date_created: DateHandler,
    abbreviation: TextElementHandler,
    sort_version: TextElementHandler,
    entry_version: TextElementHandler,
    thesaurus_ids: ListHandler<TextElementHandler>,
    concept_preferred: bool,
    permuted: bool,
    lexical_tag: LexicalTag,
    print_flag: bool,
    record_preferred: bool,
}

impl TermHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ui: TextElementHandler::new(),
            string: TextElementHandler::new(),
            date_created: DateHandler::new(),
            abbreviation: TextElementHandler::new(),
            sort_version: TextElementHandler::new(),
            entry_version: TextElementHandler::new(),
            thesaurus_ids: ListHandler::new(schema::THESAURUS_ID, TextElementHandler::new()),
            concept_preferred: false,
            permuted: false,
            lexical_tag: LexicalTag::None,
            print_flag: false,
            record_preferred: false,
        }
    }
}

impl Default for TermHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for TermHandler {
    fn reset(&mut self) {
        self.ui.reset();
        self.string.reset();
        self.date_created.reset();
        self.abbreviation.reset();
        self.sort_version.reset();
        self.entry_version.reset();
        self.thesaurus_ids.reset();
        self.concept_preferred = false;
        self.permuted = false;
        self.lexical_tag = LexicalTag::None;
        self.print_flag = false;
        self.record_preferred = false;
    }

    fn on_start(&mut self, name: &str, attrs: &Attributes) {
        if name != schema::TERM {
            return;
        }
        self.concept_preferred = attrs.flag(schema::CONCEPT_PREFERRED_TERM_YN_ATT);
        self.permuted = attrs.flag(schema::IS_PERMUTED_TERM_YN_ATT);
        self.lexical_tag = LexicalTag::from_attribute(attrs.get(schema::LEXICAL_TAG_ATT));
        self.print_flag = attrs.flag(schema::PRINT_FLAG_YN_ATT);
        self.record_preferred = attrs.flag(schema::RECORD_PREFERRED_TERM_YN_ATT);
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::TERM_UI => Some(&mut self.ui),
            schema::STRING => Some(&mut self.string),
            schema::DATE_CREATED => Some(&mut self.date_created),
            schema::ABBREVIATION => Some(&mut self.abbreviation),
            schema::SORT_VERSION => Some(&mut self.sort_version),
            schema::ENTRY_VERSION => Some(&mut self.entry_version),
            schema::THESAURUS_ID_LIST => Some(&mut self.thesaurus_ids),
            _ => None,
        }
    }
}

impl Assemble for TermHandler {
    type Output = Term;

    fn assemble(&self) -> Result<Term> {
        let name_ui = NameUi::from_parts(self.string.value(), self.ui.value()).ok_or_else(|| {
            MeshError::MalformedRecord {
                record: None,
                reason: "term without string or identifier".to_string(),
            }
        })?;
        Ok(Term::new(
            name_ui,
            self.date_created.assemble()?,
            self.abbreviation.value_opt(),
            self.sort_version.value_opt(),
            self.entry_version.value_opt(),
            self.thesaurus_ids.items(),
            self.concept_preferred,
            self.permuted,
            self.lexical_tag,
            self.print_flag,
            self.record_preferred,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn start_attrs(pairs: &[(&str, &str)]) -> Attributes {
        Attributes::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn feed_text(handler: &mut TermHandler, path: &[&str], text: &str) {
        let mut current: &mut dyn ElementHandler = handler;
        for name in path {
            current = current.delegate_mut(name).expect("registered");
        }
        current.on_text(text);
    }

    #[test]
    fn test_assembles_term_with_attributes() {
        let mut handler = TermHandler::new();
        handler.on_start(
            schema::TERM,
            &start_attrs(&[
                (schema::CONCEPT_PREFERRED_TERM_YN_ATT, "Y"),
                (schema::IS_PERMUTED_TERM_YN_ATT, "N"),
                (schema::LEXICAL_TAG_ATT, "NON"),
                (schema::PRINT_FLAG_YN_ATT, "Y"),
                (schema::RECORD_PREFERRED_TERM_YN_ATT, "Y"),
            ]),
        );
        feed_text(&mut handler, &[schema::TERM_UI], "T000002");
        feed_text(&mut handler, &[schema::STRING], "Calcimycin");

        let term = handler.assemble().unwrap();
        assert_eq!(term.name_ui().name(), "Calcimycin");
        assert_eq!(term.name_ui().ui(), "T000002");
        assert!(term.is_concept_preferred());
        assert!(!term.is_permuted());
        assert!(term.print_flag());
        assert!(term.is_record_preferred());
        assert_eq!(term.lexical_tag(), LexicalTag::None);
        assert_eq!(term.date_created(), None);
        assert_eq!(term.abbreviation(), None);
    }

    #[test]
    fn test_thesaurus_ids_preserve_order() {
        let mut handler = TermHandler::new();
        feed_text(&mut handler, &[schema::TERM_UI], "T000001");
        feed_text(&mut handler, &[schema::STRING], "A-23187");
        for id in ["FDA SRS (2014)", "NLM (1975)"] {
            feed_text(
                &mut handler,
                &[schema::THESAURUS_ID_LIST, schema::THESAURUS_ID],
                id,
            );
            handler
                .delegate_mut(schema::THESAURUS_ID_LIST)
                .expect("registered")
                .on_child_closed(schema::THESAURUS_ID)
                .expect("assembles");
        }

        let term = handler.assemble().unwrap();
        assert_eq!(term.thesaurus_ids(), ["FDA SRS (2014)", "NLM (1975)"]);
    }

    #[test]
    fn test_term_without_content_is_malformed() {
        let handler = TermHandler::new();
        assert!(matches!(
            handler.assemble().unwrap_err(),
            MeshError::MalformedRecord { .. }
        ));
    }

    #[test]
    fn test_reset_clears_flags() {
        let mut handler = TermHandler::new();
        handler.on_start(
            schema::TERM,
            &start_attrs(&[(schema::PRINT_FLAG_YN_ATT, "Y")]),
        );
        feed_text(&mut handler, &[schema::TERM_UI], "T1");
        handler.reset();
        feed_text(&mut handler, &[schema::TERM_UI], "T2");
        feed_text(&mut handler, &[schema::STRING], "x");
        assert!(!handler.assemble().unwrap().print_flag());
    }
}
