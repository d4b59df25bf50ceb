//! Error type for the selection engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use qimen_calendar::CalendarError;

/// Errors from auspicious-time search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The engine has no plate builder installed.
    BuilderNotConfigured,
    /// Malformed or impossible calendar date.
    InvalidDate(&'static str),
    /// End date precedes start date.
    InvalidRange(&'static str),
    /// Requested range exceeds the one-year scan limit.
    RangeTooLong,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuilderNotConfigured => write!(f, "no plate builder configured"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            Self::RangeTooLong => write!(f, "range exceeds 365 days"),
        }
    }
}

impl Error for SearchError {}

impl From<CalendarError> for SearchError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidDate(msg) => Self::InvalidDate(msg),
            _ => Self::InvalidDate("calendar error"),
        }
    }
}
