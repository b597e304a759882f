//! Terms: the atomic lexical units of the vocabulary.

use serde::{Deserialize, Serialize};

use super::{MeshDate, NameUi};

/// The lexical category of a term, from the `LexicalTag` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexicalTag {
    /// `ABB` - abbreviation.
    Abbreviation,
    /// `ABX` - embedded abbreviation.
    EmbeddedAbbreviation,
    /// `ACR` - acronym.
    Acronym,
    /// `ACX` - embedded acronym.
    EmbeddedAcronym,
    /// `EPO` - eponym.
    Eponym,
    /// `LAB` - lab number.
    LabNumber,
    /// `NAM` - proper name.
    ProperName,
    /// `NON` - no particular category.
    None,
    /// `TRD` - trade name.
    TradeName,
}

impl LexicalTag {
    /// Map the `LexicalTag` attribute value to a category.
    ///
    /// Missing or unrecognized values default to [`LexicalTag::None`].
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("ABB") => Self::Abbreviation,
            Some("ABX") => Self::EmbeddedAbbreviation,
            Some("ACR") => Self::Acronym,
            Some("ACX") => Self::EmbeddedAcronym,
            Some("EPO") => Self::Eponym,
            Some("LAB") => Self::LabNumber,
            Some("NAM") => Self::ProperName,
            Some("TRD") => Self::TradeName,
            _ => Self::None,
        }
    }

    /// The attribute value for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abbreviation => "ABB",
            Self::EmbeddedAbbreviation => "ABX",
            Self::Acronym => "ACR",
            Self::EmbeddedAcronym => "ACX",
            Self::Eponym => "EPO",
            Self::LabNumber => "LAB",
            Self::ProperName => "NAM",
            Self::None => "NON",
            Self::TradeName => "TRD",
        }
    }
}

/// An atomic vocabulary string with its metadata.
///
/// Terms belong to a [`super::Concept`]; whether a term is preferred is
/// tracked both relative to its concept and relative to the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    name_ui: NameUi,
    date_created: Option<MeshDate>,
    abbreviation: Option<String>,
    sort_version: Option<String>,
    entry_version: Option<String>,
    thesaurus_ids: Vec<String>,
    concept_preferred: bool,
    permuted: bool,
    lexical_tag: LexicalTag,
    print_flag: bool,
    record_preferred: bool,
}

impl Term {
    #[allow(clippy::too_many_arguments)] // mirrors the element's field list
    pub(crate) fn new(
        name_ui: NameUi,
        date_created: Option<MeshDate>,
        abbreviation: Option<String>,
        sort_version: Option<String>,
        entry_version: Option<String>,
        thesaurus_ids: Vec<String>,
        concept_preferred: bool,
        permuted: bool,
        lexical_tag: LexicalTag,
        print_flag: bool,
        record_preferred: bool,
    ) -> Self {
        Self {
            name_ui,
            date_created,
            abbreviation,
            sort_version,
            entry_version,
            thesaurus_ids,
            concept_preferred,
            permuted,
            lexical_tag,
            print_flag,
            record_preferred,
        }
    }

    /// The term string and its unique identifier.
    #[must_use]
    pub fn name_ui(&self) -> &NameUi {
        &self.name_ui
    }

    /// When the term was first entered into the data entry system.
    #[must_use]
    pub fn date_created(&self) -> Option<MeshDate> {
        self.date_created
    }

    /// Two-letter abbreviation, present when the term is a qualifier.
    #[must_use]
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    /// Rewritten form used for alphanumeric sorting.
    #[must_use]
    pub fn sort_version(&self) -> Option<&str> {
        self.sort_version.as_deref()
    }

    /// Upper-case short form used for indexing and searching.
    #[must_use]
    pub fn entry_version(&self) -> Option<&str> {
        self.entry_version.as_deref()
    }

    /// Names and years of thesauri in which this term occurs, in document
    /// order.
    #[must_use]
    pub fn thesaurus_ids(&self) -> &[String] {
        &self.thesaurus_ids
    }

    /// Whether this is the preferred term for its concept.
    #[must_use]
    pub fn is_concept_preferred(&self) -> bool {
        self.concept_preferred
    }

    /// Whether the term was generated as a permuted variant of another
    /// term in the same record.
    #[must_use]
    pub fn is_permuted(&self) -> bool {
        self.permuted
    }

    /// The lexical category of this term.
    #[must_use]
    pub fn lexical_tag(&self) -> LexicalTag {
        self.lexical_tag
    }

    /// Whether this term appears in the printed edition.
    #[must_use]
    pub fn print_flag(&self) -> bool {
        self.print_flag
    }

    /// Whether this is the preferred term for the record in which it
    /// appears. Context sensitive, not a property of the term itself.
    #[must_use]
    pub fn is_record_preferred(&self) -> bool {
        self.record_preferred
    }
}
