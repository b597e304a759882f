//! Character-data accumulation: the leaves of the handler tree.

use crate::error::Result;
use crate::schema;

use super::{Assemble, ElementHandler};

/// Collects character data delivered between a start and end tag.
///
/// Multiple `append` calls concatenate, so text split across entity
/// boundaries or interleaved with transparent child elements still comes
/// out as one string.
#[derive(Debug, Default)]
pub struct TextAccumulator {
    buffer: String,
}

impl TextAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the buffer. Idempotent.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Append one chunk of character data.
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// The accumulated text, trimmed of leading and trailing whitespace.
    /// Empty before any data has arrived.
    #[must_use]
    pub fn value(&self) -> String {
        self.buffer.trim().to_string()
    }
}

/// A leaf element whose content is plain character data, e.g.
/// `DescriptorUI` or `Annotation`.
#[derive(Debug, Default)]
pub struct TextElementHandler {
    accumulator: TextAccumulator,
}

impl TextElementHandler {
    /// Create a handler with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The trimmed accumulated text; empty when the element never
    /// appeared in this record occurrence.
    #[must_use]
    pub fn value(&self) -> String {
        self.accumulator.value()
    }

    /// The accumulated text as an optional free-text field: `None` when
    /// the element was missing or empty.
    #[must_use]
    pub fn value_opt(&self) -> Option<String> {
        crate::model::optional_text(self.value())
    }
}

impl ElementHandler for TextElementHandler {
    fn reset(&mut self) {
        self.accumulator.reset();
    }

    fn on_text(&mut self, text: &str) {
        self.accumulator.append(text);
    }
}

impl Assemble for TextElementHandler {
    type Output = String;

    fn assemble(&self) -> Result<String> {
        Ok(self.value())
    }
}

/// A named element whose payload lives in a nested `<String>` child, as
/// `DescriptorName`, `QualifierName` and `ConceptName` do.
///
/// Text outside the `<String>` child is ignored, matching the schema.
#[derive(Debug, Default)]
pub struct StringElementHandler {
    inner: TextElementHandler,
}

impl StringElementHandler {
    /// Create a handler with an empty inner accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The trimmed text of the nested `<String>` child.
    #[must_use]
    pub fn value(&self) -> String {
        self.inner.value()
    }
}

impl ElementHandler for StringElementHandler {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        (name == schema::STRING).then_some(&mut self.inner as &mut dyn ElementHandler)
    }
}

impl Assemble for StringElementHandler {
    type Output = String;

    fn assemble(&self) -> Result<String> {
        Ok(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accumulator_concatenates_and_trims() {
        let mut acc = TextAccumulator::new();
        acc.append("  Calci");
        acc.append("mycin ");
        assert_eq!(acc.value(), "Calcimycin");
    }

    #[test]
    fn test_accumulator_value_before_append() {
        let acc = TextAccumulator::new();
        assert_eq!(acc.value(), "");
    }

    #[test]
    fn test_accumulator_reset_is_idempotent() {
        let mut acc = TextAccumulator::new();
        acc.reset();
        acc.reset();
        acc.append("x");
        acc.reset();
        assert_eq!(acc.value(), "");
    }

    #[test]
    fn test_text_element_optional_value() {
        let mut handler = TextElementHandler::new();
        assert_eq!(handler.value_opt(), None);
        handler.on_text("   ");
        assert_eq!(handler.value_opt(), None, "whitespace-only is absent");
        handler.on_text("note");
        assert_eq!(handler.value_opt(), Some("note".to_string()));
    }

    #[test]
    fn test_string_element_routes_through_string_child() {
        let mut handler = StringElementHandler::new();
        // Text directly inside the named element is not part of the value.
        handler.on_text("stray");
        let inner = handler.delegate_mut(schema::STRING).expect("registered");
        inner.on_text("Calcimycin");
        assert_eq!(handler.value(), "Calcimycin");
        assert!(handler.delegate_mut("Other").is_none());
    }
}
