//! Relations between concepts within one record.

use serde::{Deserialize, Serialize};

/// The kind of a concept-to-concept relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationName {
    /// `BRD` - the first concept is broader than the second.
    Broader,
    /// `NRW` - the first concept is narrower than the second.
    Narrower,
    /// `REL` - related, but neither broader nor narrower.
    Related,
}

impl RelationName {
    /// Map the `RelationName` attribute value to a relation kind.
    ///
    /// Missing or unrecognized values default to [`RelationName::Related`],
    /// the weakest claim the schema can make.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("BRD") => Self::Broader,
            Some("NRW") => Self::Narrower,
            _ => Self::Related,
        }
    }

    /// The attribute value for this relation kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Broader => "BRD",
            Self::Narrower => "NRW",
            Self::Related => "REL",
        }
    }
}

/// A relation between two concepts, identified by their UIs.
///
/// Most commonly relates the preferred concept of a record to one of its
/// subordinate concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRelation {
    relation: RelationName,
    concept1_ui: String,
    concept2_ui: String,
    attribute: Option<String>,
}

impl ConceptRelation {
    pub(crate) fn new(
        relation: RelationName,
        concept1_ui: String,
        concept2_ui: String,
        attribute: Option<String>,
    ) -> Self {
        Self {
            relation,
            concept1_ui,
            concept2_ui,
            attribute,
        }
    }

    /// The kind of this relation.
    #[must_use]
    pub fn relation(&self) -> RelationName {
        self.relation
    }

    /// Unique identifier of the first concept.
    #[must_use]
    pub fn concept1_ui(&self) -> &str {
        &self.concept1_ui
    }

    /// Unique identifier of the second concept.
    #[must_use]
    pub fn concept2_ui(&self) -> &str {
        &self.concept2_ui
    }

    /// Free text further describing the relation. No longer maintained in
    /// current distributions.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_name_mapping() {
        assert_eq!(
            RelationName::from_attribute(Some("BRD")),
            RelationName::Broader
        );
        assert_eq!(
            RelationName::from_attribute(Some("NRW")),
            RelationName::Narrower
        );
        assert_eq!(
            RelationName::from_attribute(Some("REL")),
            RelationName::Related
        );
    }

    #[test]
    fn test_relation_name_defaults_to_related() {
        assert_eq!(RelationName::from_attribute(None), RelationName::Related);
        assert_eq!(
            RelationName::from_attribute(Some("WIDE")),
            RelationName::Related
        );
    }
}
