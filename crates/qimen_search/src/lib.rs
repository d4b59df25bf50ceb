//! Auspicious-time selection engine (zeri) over Qimen Dunjia charts.
//!
//! This crate provides:
//! - An LRU plate cache keyed by (date, double-hour, plate style)
//! - Shensha (spirit) overlays with fixed scoring weights
//! - Category reference (yongshen) tables and per-reference scoring
//! - Host/guest strength comparison for contest-like questions
//! - The ranged scan that grades every double-hour and returns the best

pub mod cache;
pub mod error;
pub mod spirit;
pub mod yongshen;
pub mod yongshen_types;
pub mod zeri;
pub mod zeri_types;

pub use cache::{DEFAULT_CACHE_CAPACITY, PlateCache, PlateKey};
pub use error::SearchError;
pub use spirit::{ALL_SPIRITS, Shensha, SpiritHit, active_spirits, spirit_score};
pub use yongshen::{
    host_guest, reference_score, refs_for, score_references, target_palace, year_command,
};
pub use yongshen_types::{
    ALL_CATEGORIES, Category, CategoryRefs, HostGuest, RefTarget, ReferenceScore, Verdict,
};
pub use zeri::{PlateBuilder, ZeriEngine};
pub use zeri_types::{AuspiciousTime, Grade, MAX_RANGE_DAYS, SearchRequest};
