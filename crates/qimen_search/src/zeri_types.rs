//! Request and result types for auspicious-time search.

use std::rc::Rc;

use qimen_calendar::LeapMethod;
use qimen_plate::{Plate, PlateKind};

use crate::yongshen_types::{Category, HostGuest, ReferenceScore};

/// Maximum scan range in days.
pub const MAX_RANGE_DAYS: i64 = 365;

/// A ranged search request. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub start_date: String,
    pub end_date: String,
    pub category: Category,
    /// Maximum results returned.
    pub limit: usize,
    /// Composite score floor.
    pub min_score: f64,
    /// Attach the favorable compass direction to each result.
    pub include_direction: bool,
    /// Skip days whose branch clashes the year branch.
    pub exclude_year_clash: bool,
    /// Skip days whose branch clashes the month branch.
    pub exclude_month_clash: bool,
    /// Skip days a solar term falls on.
    pub exclude_term_transition: bool,
    pub kind: PlateKind,
    pub leap: LeapMethod,
}

impl SearchRequest {
    /// Request with default knobs: up to 10 results scoring 60 or more.
    pub fn new(start_date: &str, end_date: &str, category: Category) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            category,
            limit: 10,
            min_score: 60.0,
            include_direction: true,
            exclude_year_clash: false,
            exclude_month_clash: false,
            exclude_term_transition: false,
            kind: PlateKind::Rotating,
            leap: LeapMethod::ChaiBu,
        }
    }
}

/// Quality band of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_score(score: f64) -> Grade {
        if score >= 85.0 {
            Grade::Excellent
        } else if score >= 70.0 {
            Grade::Good
        } else if score >= 60.0 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "上吉",
            Self::Good => "吉",
            Self::Fair => "平",
            Self::Poor => "凶",
        }
    }
}

/// One qualifying double-hour.
#[derive(Debug, Clone)]
pub struct AuspiciousTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Clock hour the double-hour starts at (0, 2, ... 22).
    pub hour: u32,
    pub plate: Rc<Plate>,
    pub pattern_score: f64,
    pub reference_score: f64,
    pub spirit_score: f64,
    pub composite: f64,
    pub grade: Grade,
    /// Compass direction of the leading reference, when requested.
    pub direction: Option<&'static str>,
    pub references: Vec<ReferenceScore>,
    pub host_guest: Option<HostGuest>,
    pub highlights: Vec<String>,
    pub warnings: Vec<String>,
}
