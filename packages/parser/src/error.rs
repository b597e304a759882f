//! Error types for the parser.
//!
//! Every failure surfaced by this crate maps onto one of the categories
//! below and propagates to the stream-level caller; the parsing core
//! performs no internal retries.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Ill-formed markup, encoding failure or read failure reported by the
    /// XML reader. Fatal for the whole stream.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax on a start tag. Fatal for the whole stream.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    /// A close event did not line up with the active delegation path.
    /// Fatal for the whole stream, never silently recovered.
    #[error("mismatched nesting: {0}")]
    Structural(String),

    /// An external DTD reference that is not in the bundled schema set.
    /// Fatal at stream start; no network fallback is attempted.
    #[error("unresolved schema reference: '{0}'")]
    UnresolvedSchemaReference(String),

    /// A completed element violated a documented invariant, e.g. a missing
    /// required identifier. Carries the in-progress descriptor name/UI for
    /// diagnostics when one has been captured.
    #[error("malformed record{}: {reason}", .record.as_ref().map(|r| format!(" [{r}]")).unwrap_or_default())]
    MalformedRecord {
        record: Option<String>,
        reason: String,
    },

    /// A scalar field expected to be numeric was non-numeric.
    #[error("invalid numeric value for {field}: '{value}'")]
    ValueCoercion {
        field: &'static str,
        value: String,
    },

    /// The record emission sink refused a record. Fatal for the whole stream.
    #[error("record sink failed: {0}")]
    Sink(String),

    /// IO error from the underlying byte stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Whether skip-and-continue may recover from this error.
    ///
    /// Only record-level validation failures are recoverable; structural,
    /// schema and sink errors always abort the stream.
    #[must_use]
    pub fn is_record_scoped(&self) -> bool {
        matches!(
            self,
            MeshError::MalformedRecord { .. } | MeshError::ValueCoercion { .. }
        )
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_with_hint() {
        let err = MeshError::MalformedRecord {
            record: Some("D000001 (Calcimycin)".to_string()),
            reason: "missing descriptor identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record [D000001 (Calcimycin)]: missing descriptor identifier"
        );
    }

    #[test]
    fn test_malformed_record_without_hint() {
        let err = MeshError::MalformedRecord {
            record: None,
            reason: "missing descriptor identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record: missing descriptor identifier"
        );
    }

    #[test]
    fn test_record_scoped_classification() {
        let coercion = MeshError::ValueCoercion {
            field: "Year",
            value: "MCMXCIX".to_string(),
        };
        assert!(coercion.is_record_scoped());

        let structural = MeshError::Structural("close without open".to_string());
        assert!(!structural.is_record_scoped());
    }
}
