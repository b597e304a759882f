//! Name plus unique-identifier pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display name paired with a unique identifier (UI).
///
/// The schema uses this shape to reference descriptors, qualifiers,
/// concepts and semantic types. A pair with both fields empty is the
/// schema's way of saying "no value"; [`NameUi::from_parts`] maps that
/// degenerate case to `None` so consumers never see a zero-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameUi {
    name: String,
    ui: String,
}

impl NameUi {
    /// Build a pair from accumulated text, mapping the empty pair to the
    /// absence state.
    #[must_use]
    pub(crate) fn from_parts(name: String, ui: String) -> Option<Self> {
        if name.is_empty() && ui.is_empty() {
            None
        } else {
            Some(Self { name, ui })
        }
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unique identifier.
    #[must_use]
    pub fn ui(&self) -> &str {
        &self.ui
    }
}

impl fmt::Display for NameUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_maps_empty_pair_to_none() {
        assert_eq!(NameUi::from_parts(String::new(), String::new()), None);
    }

    #[test]
    fn test_from_parts_keeps_partial_pairs() {
        let pair = NameUi::from_parts("Calcimycin".to_string(), String::new());
        assert!(pair.is_some());

        let pair = NameUi::from_parts(String::new(), "D000001".to_string());
        assert!(pair.is_some());
    }

    #[test]
    fn test_display() {
        let pair = NameUi::from_parts("Calcimycin".to_string(), "D000001".to_string());
        assert_eq!(pair.map(|p| p.to_string()).as_deref(), Some("Calcimycin:D000001"));
    }
}
