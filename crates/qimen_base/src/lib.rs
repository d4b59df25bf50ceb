//! Core enumerations and fixed correspondence tables for Qimen Dunjia.
//!
//! This crate provides:
//! - The 9 palaces (gong) with Luoshu numbers, anchor branches, and the
//!   two physical ring traversal orders
//! - The 10 heavenly stems and 12 earthly branches with sexagenary pairs,
//!   six-xun tables, clash/harm tables
//! - The 8 gates, 9 stars, and 8 deities with their home palaces
//! - The five-element generation/control cycles and seasonal strength
//! - The physical rotation primitive used by all plate derivations
//!
//! Clean-room implementation from standard Qimen Dunjia conventions.

pub mod deity;
pub mod element;
pub mod ganzhi;
pub mod gate;
pub mod palace;
pub mod rotate;
pub mod star;

pub use deity::{ALL_DEITIES, DEITY_ORDER, Deity};
pub use element::{
    ElementRelation, Polarity, SeasonalState, WuXing, season_element, seasonal_state,
    storage_branch,
};
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, GanZhi, Stem};
pub use gate::{ALL_GATES, GATE_ORDER, Gate, gate_at_home};
pub use palace::{ALL_PALACES, BORROWED_PALACE, OUTER_PALACES, Palace, palace_of_branch};
pub use rotate::{OUTER_CLOCKWISE, OUTER_COUNTERCLOCKWISE, rotate};
pub use star::{ALL_STARS, STAR_ORDER, Star, star_at_home};
