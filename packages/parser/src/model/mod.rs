//! Immutable value objects assembled from the XML stream.
//!
//! Every type here is built exactly once per record occurrence by its
//! paired handler in [`crate::handler`] and never mutated afterwards.
//! Fields are private; accessors return borrowed read-only views, and
//! optional free text is `Option` — an empty string in the source means
//! the field is absent, never an empty value.

mod concept;
mod date;
mod name_ui;
mod qualifier;
mod record;
mod relation;
mod term;

pub use concept::Concept;
pub use date::MeshDate;
pub use name_ui::NameUi;
pub use qualifier::{AllowableQualifier, EntryCombination, RecordOriginators};
pub use record::{DescriptorClass, MeshRecord};
pub(crate) use record::MeshRecordParts;
pub use relation::{ConceptRelation, RelationName};
pub use term::{LexicalTag, Term};

/// Convert accumulated free text to the absence-aware representation.
///
/// Zero-length text maps to `None`; this is how the schema expresses a
/// field that was never supplied or was supplied empty.
pub(crate) fn optional_text(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text_absence() {
        assert_eq!(optional_text(String::new()), None);
        assert_eq!(optional_text("note".to_string()), Some("note".to_string()));
    }
}
