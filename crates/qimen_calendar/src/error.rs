//! Error type for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Structurally invalid Gregorian date or clock hour.
    InvalidDate(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for CalendarError {}
