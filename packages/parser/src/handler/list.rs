//! Generic list handler for container elements.

use crate::error::Result;

use super::{Assemble, ElementHandler};

/// Handler for a container element holding repeated items, e.g.
/// `ConceptList (Concept+)`.
///
/// One prototype item handler is reused for every repetition: each time
/// the contained item element closes, the finished item is pulled from the
/// prototype and appended to the sequence, and the prototype is reset so
/// the next occurrence starts clean.
#[derive(Debug)]
pub struct ListHandler<H: Assemble> {
    item_element: &'static str,
    item: H,
    items: Vec<H::Output>,
}

impl<H: Assemble> ListHandler<H> {
    /// Wrap an item handler for the given contained-item element name.
    #[must_use]
    pub fn new(item_element: &'static str, item: H) -> Self {
        Self {
            item_element,
            item,
            items: Vec::new(),
        }
    }

    /// The accumulated sequence in document order, as a fresh copy.
    ///
    /// Copying here is what guarantees that two released records never
    /// share list identity with each other or with the handler tree.
    #[must_use]
    pub fn items(&self) -> Vec<H::Output>
    where
        H::Output: Clone,
    {
        self.items.clone()
    }
}

impl<H: Assemble> ElementHandler for ListHandler<H> {
    fn reset(&mut self) {
        self.item.reset();
        self.items.clear();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        if name == self.item_element {
            Some(&mut self.item)
        } else {
            None
        }
    }

    fn on_child_closed(&mut self, _name: &str) -> Result<()> {
        self.items.push(self.item.assemble()?);
        self.item.reset();
        Ok(())
    }
}
