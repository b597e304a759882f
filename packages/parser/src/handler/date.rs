//! Handler for year/month/day date elements.

use crate::error::{MeshError, Result};
use crate::model::MeshDate;
use crate::schema;

use super::{Assemble, ElementHandler, TextElementHandler};

/// Builder for `DateCreated`, `DateRevised` and `DateEstablished`.
///
/// The year decides presence: when no `Year` child appeared the whole
/// date assembles to `None` rather than failing, tolerating records that
/// omit an optional date element entirely.
#[derive(Debug, Default)]
pub struct DateHandler {
    year: TextElementHandler,
    month: TextElementHandler,
    day: TextElementHandler,
}

impl DateHandler {
    /// Create a handler with empty components.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElementHandler for DateHandler {
    fn reset(&mut self) {
        self.year.reset();
        self.month.reset();
        self.day.reset();
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::YEAR => Some(&mut self.year),
            schema::MONTH => Some(&mut self.month),
            schema::DAY => Some(&mut self.day),
            _ => None,
        }
    }
}

impl Assemble for DateHandler {
    type Output = Option<MeshDate>;

    fn assemble(&self) -> Result<Option<MeshDate>> {
        let year = self.year.value();
        if year.is_empty() {
            return Ok(None);
        }
        Ok(Some(MeshDate::new(
            coerce(schema::YEAR, &year)?,
            coerce_or_zero(schema::MONTH, &self.month.value())?,
            coerce_or_zero(schema::DAY, &self.day.value())?,
        )))
    }
}

fn coerce<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| MeshError::ValueCoercion {
        field,
        value: raw.to_string(),
    })
}

/// Absent month/day components default to 0; they are not validated
/// against calendar rules at this layer.
fn coerce_or_zero(field: &'static str, raw: &str) -> Result<u8> {
    if raw.is_empty() {
        Ok(0)
    } else {
        coerce(field, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed(handler: &mut DateHandler, element: &str, text: &str) {
        let child = handler.delegate_mut(element).expect("registered");
        child.on_text(text);
    }

    #[test]
    fn test_assembles_full_date() {
        let mut handler = DateHandler::new();
        feed(&mut handler, schema::YEAR, "1999");
        feed(&mut handler, schema::MONTH, "01");
        feed(&mut handler, schema::DAY, "05");
        let date = handler.assemble().unwrap().expect("present");
        assert_eq!((date.year(), date.month(), date.day()), (1999, 1, 5));
    }

    #[test]
    fn test_missing_year_means_no_date() {
        let mut handler = DateHandler::new();
        feed(&mut handler, schema::MONTH, "01");
        assert_eq!(handler.assemble().unwrap(), None);
    }

    #[test]
    fn test_missing_month_and_day_default_to_zero() {
        let mut handler = DateHandler::new();
        feed(&mut handler, schema::YEAR, "2006");
        let date = handler.assemble().unwrap().expect("present");
        assert_eq!((date.month(), date.day()), (0, 0));
    }

    #[test]
    fn test_non_numeric_year_is_a_coercion_error() {
        let mut handler = DateHandler::new();
        feed(&mut handler, schema::YEAR, "MCMXCIX");
        let err = handler.assemble().unwrap_err();
        assert!(matches!(
            err,
            MeshError::ValueCoercion { field: "Year", .. }
        ));
    }

    #[test]
    fn test_assemble_is_repeatable() {
        let mut handler = DateHandler::new();
        feed(&mut handler, schema::YEAR, "2001");
        assert_eq!(handler.assemble().unwrap(), handler.assemble().unwrap());
    }

    #[test]
    fn test_reset_clears_components() {
        let mut handler = DateHandler::new();
        feed(&mut handler, schema::YEAR, "2001");
        handler.reset();
        assert_eq!(handler.assemble().unwrap(), None);
    }
}
