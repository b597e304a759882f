//! The top-level descriptor record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    AllowableQualifier, Concept, EntryCombination, MeshDate, NameUi, RecordOriginators,
};

/// Classification of a descriptor record, from the `DescriptorClass`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptorClass {
    /// `"1"` - topical descriptor (e.g. Calcimycin). The default when the
    /// attribute is missing or unrecognized.
    Topical,
    /// `"2"` - publication type (e.g. Review).
    PublicationType,
    /// `"3"` - check tag (e.g. Male).
    CheckTag,
    /// `"4"` - geographic descriptor (e.g. Washington).
    Geographic,
}

impl DescriptorClass {
    /// Map the `DescriptorClass` attribute value to a classification.
    ///
    /// Missing or unrecognized values default to
    /// [`DescriptorClass::Topical`].
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("2") => Self::PublicationType,
            Some("3") => Self::CheckTag,
            Some("4") => Self::Geographic,
            _ => Self::Topical,
        }
    }

    /// Human-readable description of this classification.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Topical => "Topical Descriptor",
            Self::PublicationType => "Publication Types",
            Self::CheckTag => "Check Tag",
            Self::Geographic => "Geographic Descriptor",
        }
    }

    /// The numeric attribute value for this classification.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topical => "1",
            Self::PublicationType => "2",
            Self::CheckTag => "3",
            Self::Geographic => "4",
        }
    }
}

impl fmt::Display for DescriptorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.as_str(), self.description())
    }
}

/// One complete thesaurus entry, assembled from a `DescriptorRecord`
/// element.
///
/// Immutable once constructed. All sequence accessors return read-only
/// views over lists owned exclusively by this record; nothing is shared
/// with the handler tree or with other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRecord {
    descriptor_class: DescriptorClass,
    descriptor: NameUi,
    date_created: Option<MeshDate>,
    date_revised: Option<MeshDate>,
    date_established: Option<MeshDate>,
    active_years: Vec<String>,
    allowable_qualifiers: Vec<AllowableQualifier>,
    annotation: Option<String>,
    history_note: Option<String>,
    online_note: Option<String>,
    public_mesh_note: Option<String>,
    previous_indexing: Vec<String>,
    entry_combinations: Vec<EntryCombination>,
    see_related: Vec<NameUi>,
    consider_also: Option<String>,
    pharmacological_actions: Vec<NameUi>,
    running_head: Option<String>,
    tree_numbers: Vec<String>,
    originators: Option<RecordOriginators>,
    concepts: Vec<Concept>,
}

/// Assembly-time inputs for [`MeshRecord`], filled in by the record
/// handler. Keeps the constructor call sites readable; never leaves the
/// parsing layer.
#[derive(Debug, Default)]
pub(crate) struct MeshRecordParts {
    pub descriptor_class: Option<DescriptorClass>,
    pub date_created: Option<MeshDate>,
    pub date_revised: Option<MeshDate>,
    pub date_established: Option<MeshDate>,
    pub active_years: Vec<String>,
    pub allowable_qualifiers: Vec<AllowableQualifier>,
    pub annotation: Option<String>,
    pub history_note: Option<String>,
    pub online_note: Option<String>,
    pub public_mesh_note: Option<String>,
    pub previous_indexing: Vec<String>,
    pub entry_combinations: Vec<EntryCombination>,
    pub see_related: Vec<NameUi>,
    pub consider_also: Option<String>,
    pub pharmacological_actions: Vec<NameUi>,
    pub running_head: Option<String>,
    pub tree_numbers: Vec<String>,
    pub originators: Option<RecordOriginators>,
    pub concepts: Vec<Concept>,
}

impl MeshRecord {
    pub(crate) fn from_parts(descriptor: NameUi, parts: MeshRecordParts) -> Self {
        Self {
            descriptor_class: parts
                .descriptor_class
                .unwrap_or(DescriptorClass::Topical),
            descriptor,
            date_created: parts.date_created,
            date_revised: parts.date_revised,
            date_established: parts.date_established,
            active_years: parts.active_years,
            allowable_qualifiers: parts.allowable_qualifiers,
            annotation: parts.annotation,
            history_note: parts.history_note,
            online_note: parts.online_note,
            public_mesh_note: parts.public_mesh_note,
            previous_indexing: parts.previous_indexing,
            entry_combinations: parts.entry_combinations,
            see_related: parts.see_related,
            consider_also: parts.consider_also,
            pharmacological_actions: parts.pharmacological_actions,
            running_head: parts.running_head,
            tree_numbers: parts.tree_numbers,
            originators: parts.originators,
            concepts: parts.concepts,
        }
    }

    /// The classification of this record.
    #[must_use]
    pub fn descriptor_class(&self) -> DescriptorClass {
        self.descriptor_class
    }

    /// The record's descriptor name and unique identifier. Always present
    /// and never the empty pair.
    #[must_use]
    pub fn descriptor(&self) -> &NameUi {
        &self.descriptor
    }

    /// When the record was first entered into the data entry system.
    #[must_use]
    pub fn date_created(&self) -> Option<MeshDate> {
        self.date_created
    }

    /// When the record was last changed, if ever.
    #[must_use]
    pub fn date_revised(&self) -> Option<MeshDate> {
        self.date_revised
    }

    /// The first full month the record was available for searching.
    #[must_use]
    pub fn date_established(&self) -> Option<MeshDate> {
        self.date_established
    }

    /// Active years since the record's last modification, in document
    /// order. Strings rather than numbers because of values like "2006A".
    #[must_use]
    pub fn active_years(&self) -> &[String] {
        &self.active_years
    }

    /// Qualifiers that may be used with this descriptor for indexing, in
    /// document order.
    #[must_use]
    pub fn allowable_qualifiers(&self) -> &[AllowableQualifier] {
        &self.allowable_qualifiers
    }

    /// Free text for indexers and catalogers.
    #[must_use]
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Free text describing the history of the record.
    #[must_use]
    pub fn history_note(&self) -> Option<&str> {
        self.history_note.as_deref()
    }

    /// Deprecated online search help, superseded by the history note.
    #[must_use]
    pub fn online_note(&self) -> Option<&str> {
        self.online_note.as_deref()
    }

    /// Free text for users of the printed index.
    #[must_use]
    pub fn public_mesh_note(&self) -> Option<&str> {
        self.public_mesh_note.as_deref()
    }

    /// Descriptors used for this subject before this record existed, in
    /// document order.
    #[must_use]
    pub fn previous_indexing(&self) -> &[String] {
        &self.previous_indexing
    }

    /// Prohibited descriptor/qualifier combinations with their preferred
    /// substitutions, in document order.
    #[must_use]
    pub fn entry_combinations(&self) -> &[EntryCombination] {
        &self.entry_combinations
    }

    /// Related descriptors, in document order.
    #[must_use]
    pub fn see_related(&self) -> &[NameUi] {
        &self.see_related
    }

    /// Free text cross-referencing terms with related roots.
    #[must_use]
    pub fn consider_also(&self) -> Option<&str> {
        self.consider_also.as_deref()
    }

    /// Descriptors for observed biological activity of an exogenously
    /// administered chemical, in document order.
    #[must_use]
    pub fn pharmacological_actions(&self) -> &[NameUi] {
        &self.pharmacological_actions
    }

    /// Page header above this entry in the printed edition.
    #[must_use]
    pub fn running_head(&self) -> Option<&str> {
        self.running_head.as_deref()
    }

    /// Positions of this record in the descriptor hierarchy, in document
    /// order.
    #[must_use]
    pub fn tree_numbers(&self) -> &[String] {
        &self.tree_numbers
    }

    /// The editors who created, maintained and authorized this record.
    #[must_use]
    pub fn originators(&self) -> Option<&RecordOriginators> {
        self.originators.as_ref()
    }

    /// The record's concepts, in document order. One of them is flagged
    /// preferred.
    #[must_use]
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }
}
