//! Concepts: structured units of meaning within a record.

use serde::{Deserialize, Serialize};

use super::{ConceptRelation, NameUi, Term};

/// A structured unit of meaning within a [`super::MeshRecord`].
///
/// A record carries one or more concepts; exactly one of them is flagged
/// as preferred. Most of the linguistic content of a record lives in the
/// concept's terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    preferred: bool,
    name_ui: NameUi,
    umls_ui: Option<String>,
    casn1_name: Option<String>,
    registry_number: Option<String>,
    scope_note: Option<String>,
    semantic_types: Vec<NameUi>,
    related_registry_numbers: Vec<String>,
    relations: Vec<ConceptRelation>,
    terms: Vec<Term>,
}

impl Concept {
    #[allow(clippy::too_many_arguments)] // mirrors the element's field list
    pub(crate) fn new(
        preferred: bool,
        name_ui: NameUi,
        umls_ui: Option<String>,
        casn1_name: Option<String>,
        registry_number: Option<String>,
        scope_note: Option<String>,
        semantic_types: Vec<NameUi>,
        related_registry_numbers: Vec<String>,
        relations: Vec<ConceptRelation>,
        terms: Vec<Term>,
    ) -> Self {
        Self {
            preferred,
            name_ui,
            umls_ui,
            casn1_name,
            registry_number,
            scope_note,
            semantic_types,
            related_registry_numbers,
            relations,
            terms,
        }
    }

    /// Whether this is the preferred concept of its record.
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.preferred
    }

    /// The concept's name and unique identifier.
    #[must_use]
    pub fn name_ui(&self) -> &NameUi {
        &self.name_ui
    }

    /// The concept's identifier in the UMLS Metathesaurus.
    #[must_use]
    pub fn umls_ui(&self) -> Option<&str> {
        self.umls_ui.as_deref()
    }

    /// Chemical Abstracts Service type N1 name, for chemical concepts.
    #[must_use]
    pub fn casn1_name(&self) -> Option<&str> {
        self.casn1_name.as_deref()
    }

    /// Registry number from EC, CAS or RefSeq.
    #[must_use]
    pub fn registry_number(&self) -> Option<&str> {
        self.registry_number.as_deref()
    }

    /// Free text describing the scope of applicability of this concept.
    #[must_use]
    pub fn scope_note(&self) -> Option<&str> {
        self.scope_note.as_deref()
    }

    /// UMLS semantic network categories for this concept, in document
    /// order.
    #[must_use]
    pub fn semantic_types(&self) -> &[NameUi] {
        &self.semantic_types
    }

    /// Registry numbers for related substances without their own record,
    /// in document order.
    #[must_use]
    pub fn related_registry_numbers(&self) -> &[String] {
        &self.related_registry_numbers
    }

    /// Relations between this concept and other concepts of the record,
    /// in document order.
    #[must_use]
    pub fn relations(&self) -> &[ConceptRelation] {
        &self.relations
    }

    /// The terms belonging to this concept, in document order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}
