//! Handler for concept-to-concept relations.

use crate::error::Result;
use crate::model::{ConceptRelation, RelationName};
use crate::schema;

use super::{Assemble, Attributes, ElementHandler, TextElementHandler};

/// Builder for `ConceptRelation (Concept1UI, Concept2UI,
/// RelationAttribute?)` with its `RelationName` attribute.
#[derive(Debug)]
pub struct ConceptRelationHandler {
    relation: RelationName,
    concept1_ui: TextElementHandler,
    concept2_ui: TextElementHandler,
    attribute: TextElementHandler,
}

impl ConceptRelationHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            relation: RelationName::Related,
            concept1_ui: TextElementHandler::new(),
            concept2_ui: TextElementHandler::new(),
            attribute: TextElementHandler::new(),
        }
    }
}

impl Default for ConceptRelationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for ConceptRelationHandler {
    fn reset(&mut self) {
        self.relation = RelationName::Related;
        self.concept1_ui.reset();
        self.concept2_ui.reset();
        self.attribute.reset();
    }

    fn on_start(&mut self, name: &str, attrs: &Attributes) {
        if name == schema::CONCEPT_RELATION {
            self.relation = RelationName::from_attribute(attrs.get(schema::RELATION_NAME_ATT));
        }
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::CONCEPT_1_UI => Some(&mut self.concept1_ui),
            schema::CONCEPT_2_UI => Some(&mut self.concept2_ui),
            schema::RELATION_ATTRIBUTE => Some(&mut self.attribute),
            _ => None,
        }
    }
}

impl Assemble for ConceptRelationHandler {
    type Output = ConceptRelation;

    fn assemble(&self) -> Result<ConceptRelation> {
        Ok(ConceptRelation::new(
            self.relation,
            self.concept1_ui.value(),
            self.concept2_ui.value(),
            self.attribute.value_opt(),
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

    #[test]
    fn test_captures_relation_name_attribute() {
        let mut handler = ConceptRelationHandler::new();
        handler.on_start(
            schema::CONCEPT_RELATION,
            &start_attrs(&[(schema::RELATION_NAME_ATT, "NRW")]),
        );
        handler
            .delegate_mut(schema::CONCEPT_1_UI)
            .expect("registered")
            .on_text("M0000001");
        handler
            .delegate_mut(schema::CONCEPT_2_UI)
            .expect("registered")
            .on_text("M0000002");

        let relation = handler.assemble().unwrap();
        assert_eq!(relation.relation(), RelationName::Narrower);
        assert_eq!(relation.concept1_ui(), "M0000001");
        assert_eq!(relation.concept2_ui(), "M0000002");
        assert_eq!(relation.attribute(), None);
    }

    #[test]
    fn test_missing_attribute_defaults_to_related() {
        let mut handler = ConceptRelationHandler::new();
        handler.on_start(schema::CONCEPT_RELATION, &start_attrs(&[]));
        assert_eq!(handler.assemble().unwrap().relation(), RelationName::Related);
    }

    #[test]
    fn test_reset_restores_default_relation() {
        let mut handler = ConceptRelationHandler::new();
        handler.on_start(
            schema::CONCEPT_RELATION,
            &start_attrs(&[(schema::RELATION_NAME_ATT, "BRD")]),
        );
        handler.reset();
        assert_eq!(handler.assemble().unwrap().relation(), RelationName::Related);
    }
}
