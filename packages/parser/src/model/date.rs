//! Calendar dates as they appear in the distribution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A year/month/day triple from a `DateCreated`-style element.
///
/// The year is the invariant-defining field: a date element whose year
/// never appeared assembles to no date at all (the handler returns
/// `None`), so a constructed `MeshDate` always has a year. Month and day
/// are carried as-is and are not validated against calendar rules here;
/// they are zero when the source omitted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshDate {
    year: u16,
    month: u8,
    day: u8,
}

impl MeshDate {
    pub(crate) fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The year for this date.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month for this date, or 0 if the source omitted it.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day for this date, or 0 if the source omitted it.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for MeshDate {
    /// Formats as `YYYY/MM/DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}
