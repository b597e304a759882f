//! Handler for name/UI reference elements.

use crate::error::{MeshError, Result};
use crate::model::NameUi;
use crate::schema;

use super::{Assemble, ElementHandler, StringElementHandler, TextElementHandler};

/// Builder for the `(SomeUI, SomeName)` reference shape used by
/// `DescriptorReferredTo`, `QualifierReferredTo` and concept names.
///
/// The element names for the UI and name children are configurable since
/// the schema reuses the shape under several tag pairs. The name child
/// always carries its payload in a nested `<String>`.
#[derive(Debug)]
pub struct NameUiHandler {
    name_element: &'static str,
    ui_element: &'static str,
    name: StringElementHandler,
    ui: TextElementHandler,
}

impl NameUiHandler {
    /// Create a handler for the given name/UI child element pair.
    #[must_use]
    pub fn new(name_element: &'static str, ui_element: &'static str) -> Self {
        Self {
            name_element,
            ui_element,
            name: StringElementHandler::new(),
            ui: TextElementHandler::new(),
        }
    }

    /// Handler for descriptor references (`DescriptorName`/`DescriptorUI`).
    #[must_use]
    pub fn descriptor() -> Self {
        Self::new(schema::DESCRIPTOR_NAME, schema::DESCRIPTOR_UI)
    }

    /// Handler for qualifier references (`QualifierName`/`QualifierUI`).
    #[must_use]
    pub fn qualifier() -> Self {
        Self::new(schema::QUALIFIER_NAME, schema::QUALIFIER_UI)
    }

    /// The pair in its absence-aware form: `None` when neither child
    /// produced any text, i.e. the reference never appeared.
    #[must_use]
    pub fn assemble_opt(&self) -> Option<NameUi> {
        NameUi::from_parts(self.name.value(), self.ui.value())
    }
}

impl ElementHandler for NameUiHandler {
    fn reset(&mut self) {
        self.name.reset();
        self.ui.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        if name == self.name_element {
            Some(&mut self.name)
        } else if name == self.ui_element {
            Some(&mut self.ui)
        } else {
            None
        }
    }
}

impl Assemble for NameUiHandler {
    type Output = NameUi;

    /// The pair in its required form, for positions where the schema
    /// guarantees a reference is present.
    fn assemble(&self) -> Result<NameUi> {
        self.assemble_opt().ok_or_else(|| MeshError::MalformedRecord {
            record: None,
            reason: format!("empty {}/{} reference", self.ui_element, self.name_element),
        })
    }
}
