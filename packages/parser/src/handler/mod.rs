//! The stateful handler tree that mirrors the XML schema.
//!
//! Each handler is a mutable builder for one element shape: it receives
//! the events the document driver routes to it, and on demand assembles
//! its accumulated state into an immutable value object from
//! [`crate::model`]. Handlers are allocated once per parser and reused for
//! every record occurrence; `reset` returns them to their pristine state.
//!
//! The driver never looks inside a handler. It walks the tree through
//! [`ElementHandler::delegate_mut`], which doubles as the registration
//! table: an element name is "registered" exactly when some handler on the
//! active path claims it.

mod concept;
mod date;
mod list;
mod name_ui;
mod qualifier;
mod record;
mod relation;
mod term;
mod text;

pub use concept::{ConceptHandler, SemanticTypeHandler};
pub use date::DateHandler;
pub use list::ListHandler;
pub use name_ui::NameUiHandler;
pub use qualifier::{AllowableQualifierHandler, EntryCombinationHandler, OriginatorsHandler};
pub use record::RecordHandler;
pub use relation::ConceptRelationHandler;
pub use term::TermHandler;
pub use text::{StringElementHandler, TextAccumulator, TextElementHandler};

use crate::error::Result;

/// Attributes captured from a start tag, in document order.
#[derive(Debug, Clone, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub(crate) fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a yes/no attribute is set to `"Y"`. Missing attributes and
    /// any other value count as no.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == Some(crate::schema::YES)
    }
}

/// Uniform capability set for every node of the handler tree.
///
/// The driver dispatches through this trait only; concrete handlers keep
/// their children as plain fields and expose them via `delegate_mut`.
pub trait ElementHandler {
    /// Clear all accumulated state, cascading to owned children.
    /// Idempotent; callable at any time, including before any event.
    fn reset(&mut self);

    /// Start of this handler's own element. Composite handlers capture
    /// attribute values here; everything else ignores it.
    fn on_start(&mut self, _name: &str, _attrs: &Attributes) {}

    /// Character data while this handler is the deepest active delegate.
    fn on_text(&mut self, _text: &str) {}

    /// Look up the child handler registered for a sub-element, if any.
    /// Elements without a registered child are transparent pass-through.
    fn delegate_mut(&mut self, _name: &str) -> Option<&mut dyn ElementHandler> {
        None
    }

    /// A delegated child element just closed; the owner may pull the
    /// finished child value now. This is the only moment a child result
    /// becomes visible to its parent.
    fn on_child_closed(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }
}

/// A handler that can produce a finished value from its current state.
///
/// `assemble` validates invariants and builds the immutable result; it
/// does not consume or mutate state, so calling it twice on unchanged
/// state yields an equal value.
pub trait Assemble: ElementHandler {
    /// The value object this handler produces.
    type Output;

    /// Validate accumulated state and build the value object.
    ///
    /// # Errors
    /// `MalformedRecord` when a documented invariant is violated, or
    /// `ValueCoercion` when a numeric field fails to parse.
    fn assemble(&self) -> Result<Self::Output>;
}
