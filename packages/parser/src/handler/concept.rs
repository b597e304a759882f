//! Handlers for concepts and their semantic types.

use crate::error::{MeshError, Result};
use crate::model::{Concept, NameUi};
use crate::schema;

use super::{
    Assemble, Attributes, ConceptRelationHandler, ElementHandler, ListHandler,
    StringElementHandler, TermHandler, TextElementHandler,
};

/// Builder for `SemanticType (SemanticTypeUI, SemanticTypeName)`.
#[derive(Debug, Default)]
pub struct SemanticTypeHandler {
    ui: TextElementHandler,
    name: TextElementHandler,
}

impl SemanticTypeHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElementHandler for SemanticTypeHandler {
    fn reset(&mut self) {
        self.ui.reset();
        self.name.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::SEMANTIC_TYPE_UI => Some(&mut self.ui),
            schema::SEMANTIC_TYPE_NAME => Some(&mut self.name),
            _ => None,
        }
    }
}

impl Assemble for SemanticTypeHandler {
    type Output = NameUi;

    fn assemble(&self) -> Result<NameUi> {
        NameUi::from_parts(self.name.value(), self.ui.value()).ok_or_else(|| {
            MeshError::MalformedRecord {
                record: None,
                reason: "semantic type without name or identifier".to_string(),
            }
        })
    }
}

/// Builder for `Concept` elements with their nested semantic types,
/// registry numbers, relations and terms.
#[derive(Debug)]
pub struct ConceptHandler {
    preferred: bool,
    ui: TextElementHandler,
    name: StringElementHandler,
    umls_ui: TextElementHandler,
    casn1_name: TextElementHandler,
    registry_number: TextElementHandler,
    scope_note: TextElementHandler,
    semantic_types: ListHandler<SemanticTypeHandler>,
    related_registry_numbers: ListHandler<TextElementHandler>,
    relations: ListHandler<ConceptRelationHandler>,
    terms: ListHandler<TermHandler>,
}

impl ConceptHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            preferred: false,
            ui: TextElementHandler::new(),
            name: StringElementHandler::new(),
            umls_ui: TextElementHandler::new(),
            casn1_name: TextElementHandler::new(),
            registry_number: TextElementHandler::new(),
            scope_note: TextElementHandler::new(),
            semantic_types: ListHandler::new(schema::SEMANTIC_TYPE, SemanticTypeHandler::new()),
            related_registry_numbers: ListHandler::new(
                schema::RELATED_REGISTRY_NUMBER,
                TextElementHandler::new(),
            ),
            relations: ListHandler::new(schema::CONCEPT_RELATION, ConceptRelationHandler::new()),
            terms: ListHandler::new(schema::TERM, TermHandler::new()),
        }
    }
}

impl Default for ConceptHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for ConceptHandler {
    fn reset(&mut self) {
        self.preferred = false;
        self.ui.reset();
        self.name.reset();
        self.umls_ui.reset();
        self.casn1_name.reset();
        self.registry_number.reset();
        self.scope_note.reset();
        self.semantic_types.reset();
        self.related_registry_numbers.reset();
        self.relations.reset();
        self.terms.reset();
    }

    fn on_start(&mut self, name: &str, attrs: &Attributes) {
        if name == schema::CONCEPT {
            self.preferred = attrs.flag(schema::PREFERRED_CONCEPT_YN_ATT);
        }
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::CONCEPT_UI => Some(&mut self.ui),
            schema::CONCEPT_NAME => Some(&mut self.name),
            schema::CONCEPT_UMLS_UI => Some(&mut self.umls_ui),
            schema::CASN1_NAME => Some(&mut self.casn1_name),
            schema::REGISTRY_NUMBER => Some(&mut self.registry_number),
            schema::SCOPE_NOTE => Some(&mut self.scope_note),
            schema::SEMANTIC_TYPE_LIST => Some(&mut self.semantic_types),
            schema::RELATED_REGISTRY_NUMBER_LIST => Some(&mut self.related_registry_numbers),
            schema::CONCEPT_RELATION_LIST => Some(&mut self.relations),
            schema::TERM_LIST => Some(&mut self.terms),
            _ => None,
        }
    }
}

impl Assemble for ConceptHandler {
    type Output = Concept;

    fn assemble(&self) -> Result<Concept> {
        let name_ui = NameUi::from_parts(self.name.value(), self.ui.value()).ok_or_else(|| {
            MeshError::MalformedRecord {
                record: None,
                reason: "concept without name or identifier".to_string(),
            }
        })?;
        Ok(Concept::new(
            self.preferred,
            name_ui,
            self.umls_ui.value_opt(),
            self.casn1_name.value_opt(),
            self.registry_number.value_opt(),
            self.scope_note.value_opt(),
            self.semantic_types.items(),
            self.related_registry_numbers.items(),
            self.relations.items(),
            self.terms.items(),
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

    fn feed_text(handler: &mut dyn ElementHandler, path: &[&str], text: &str) {
        let mut current = handler;
        for name in path {
            current = current.delegate_mut(name).expect("registered");
        }
        current.on_text(text);
    }

    fn close_item(handler: &mut dyn ElementHandler, list: &str, item: &str) {
        handler
            .delegate_mut(list)
            .expect("registered")
            .on_child_closed(item)
            .expect("assembles");
    }

    #[test]
    fn test_assembles_preferred_concept() {
        let mut handler = ConceptHandler::new();
        handler.on_start(
            schema::CONCEPT,
            &start_attrs(&[(schema::PREFERRED_CONCEPT_YN_ATT, "Y")]),
        );
        feed_text(&mut handler, &[schema::CONCEPT_UI], "M0000001");
        feed_text(
            &mut handler,
            &[schema::CONCEPT_NAME, schema::STRING],
            "Calcimycin",
        );
        feed_text(&mut handler, &[schema::CONCEPT_UMLS_UI], "C0000699");
        feed_text(
            &mut handler,
            &[schema::SCOPE_NOTE],
            "An ionophorous, polyether antibiotic.",
        );

        let concept = handler.assemble().unwrap();
        assert!(concept.is_preferred());
        assert_eq!(concept.name_ui().ui(), "M0000001");
        assert_eq!(concept.umls_ui(), Some("C0000699"));
        assert_eq!(concept.casn1_name(), None);
        assert!(concept.terms().is_empty());
    }

    #[test]
    fn test_semantic_types_preserve_order() {
        let mut handler = ConceptHandler::new();
        feed_text(&mut handler, &[schema::CONCEPT_UI], "M0000001");
        feed_text(&mut handler, &[schema::CONCEPT_NAME, schema::STRING], "x");
        for (ui, name) in [("T109", "Organic Chemical"), ("T195", "Antibiotic")] {
            feed_text(
                &mut handler,
                &[
                    schema::SEMANTIC_TYPE_LIST,
                    schema::SEMANTIC_TYPE,
                    schema::SEMANTIC_TYPE_UI,
                ],
                ui,
            );
            feed_text(
                &mut handler,
                &[
                    schema::SEMANTIC_TYPE_LIST,
                    schema::SEMANTIC_TYPE,
                    schema::SEMANTIC_TYPE_NAME,
                ],
                name,
            );
            close_item(&mut handler, schema::SEMANTIC_TYPE_LIST, schema::SEMANTIC_TYPE);
        }

        let concept = handler.assemble().unwrap();
        let uis: Vec<&str> = concept.semantic_types().iter().map(NameUi::ui).collect();
        assert_eq!(uis, ["T109", "T195"]);
    }

    #[test]
    fn test_concept_without_content_is_malformed() {
        let handler = ConceptHandler::new();
        assert!(matches!(
            handler.assemble().unwrap_err(),
            MeshError::MalformedRecord { .. }
        ));
    }

    #[test]
    fn test_reset_clears_preferred_flag_and_lists() {
        let mut handler = ConceptHandler::new();
        handler.on_start(
            schema::CONCEPT,
            &start_attrs(&[(schema::PREFERRED_CONCEPT_YN_ATT, "Y")]),
        );
        feed_text(
            &mut handler,
            &[schema::RELATED_REGISTRY_NUMBER_LIST, schema::RELATED_REGISTRY_NUMBER],
            "52665-69-7",
        );
        close_item(
            &mut handler,
            schema::RELATED_REGISTRY_NUMBER_LIST,
            schema::RELATED_REGISTRY_NUMBER,
        );
        handler.reset();
        feed_text(&mut handler, &[schema::CONCEPT_UI], "M2");
        feed_text(&mut handler, &[schema::CONCEPT_NAME, schema::STRING], "y");
        let concept = handler.assemble().unwrap();
        assert!(!concept.is_preferred());
        assert!(concept.related_registry_numbers().is_empty());
    }
}
