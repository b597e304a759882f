//! Fixed-shape composites attached directly to a record: allowable
//! qualifiers, entry combinations and record originators.

use serde::{Deserialize, Serialize};

use super::NameUi;

/// A qualifier that may be used with the record's descriptor for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowableQualifier {
    name_ui: NameUi,
    abbreviation: String,
}

impl AllowableQualifier {
    pub(crate) fn new(name_ui: NameUi, abbreviation: String) -> Self {
        Self {
            name_ui,
            abbreviation,
        }
    }

    /// Name and unique identifier for this qualifier.
    #[must_use]
    pub fn name_ui(&self) -> &NameUi {
        &self.name_ui
    }

    /// The two-letter abbreviation for this qualifier.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

/// A prohibited descriptor/qualifier combination with its preferred
/// substitution.
///
/// The `ECIN` side names the input descriptor and the qualifier that must
/// not be used with it; the `ECOUT` side names the replacement descriptor
/// and, optionally, a replacement qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCombination {
    in_descriptor: NameUi,
    in_qualifier: NameUi,
    out_descriptor: NameUi,
    out_qualifier: Option<NameUi>,
}

impl EntryCombination {
    pub(crate) fn new(
        in_descriptor: NameUi,
        in_qualifier: NameUi,
        out_descriptor: NameUi,
        out_qualifier: Option<NameUi>,
    ) -> Self {
        Self {
            in_descriptor,
            in_qualifier,
            out_descriptor,
            out_qualifier,
        }
    }

    /// The base input descriptor.
    #[must_use]
    pub fn in_descriptor(&self) -> &NameUi {
        &self.in_descriptor
    }

    /// The qualifier prohibited from occurring with the input descriptor.
    #[must_use]
    pub fn in_qualifier(&self) -> &NameUi {
        &self.in_qualifier
    }

    /// The replacement descriptor.
    #[must_use]
    pub fn out_descriptor(&self) -> &NameUi {
        &self.out_descriptor
    }

    /// The replacement qualifier, if the substitution is qualified.
    #[must_use]
    pub fn out_qualifier(&self) -> Option<&NameUi> {
        self.out_qualifier.as_ref()
    }
}

/// The editors who created, maintained and authorized a record.
///
/// A fixed triple in the schema, not a repeated sequence: one originator
/// plus an optional maintainer and authorizer, each a short user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOriginators {
    originator: String,
    maintainer: Option<String>,
    authorizer: Option<String>,
}

impl RecordOriginators {
    pub(crate) fn new(
        originator: String,
        maintainer: Option<String>,
        authorizer: Option<String>,
    ) -> Self {
        Self {
            originator,
            maintainer,
            authorizer,
        }
    }

    /// User name of the editor who created the record.
    #[must_use]
    pub fn originator(&self) -> &str {
        &self.originator
    }

    /// User name of the editor who most recently modified the record.
    #[must_use]
    pub fn maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    /// User name of the editor or supervisor who authorized the record.
    #[must_use]
    pub fn authorizer(&self) -> Option<&str> {
        self.authorizer.as_deref()
    }
}
