//! Calendar collaborator for the Qimen engine.
//!
//! This crate provides:
//! - Gregorian ↔ Julian Day Number conversion and date validation
//! - Four-pillar (year/month/day/hour) derivation
//! - An approximate 24-solar-term table with yin/yang cycle selection
//!   and ju (stage) seeding under two leap-adjustment methods
//!
//! Solar-term dates are fixed-table approximations; astronomical
//! accuracy is out of scope for this engine.

pub mod error;
pub mod julian;
pub mod pillars;
pub mod solar_term;

pub use error::CalendarError;
pub use julian::{days_in_month, gregorian_to_jdn, is_leap_year, is_valid_date, jdn_to_gregorian};
pub use pillars::{
    FourPillars, day_pillar, four_pillars, hour_branch_from_clock, hour_pillar, month_pillar,
    year_pillar,
};
pub use solar_term::{
    ALL_TERMS, Dun, LeapMethod, SolarTerm, Yuan, current_term, days_into_term, ju_for_date,
    month_number, term_on, yuan_from_futou,
};
