//! Convenience wrapper for the qimen plate and selection engine.
//!
//! Provides one-call chart assembly and auspicious-time search with the
//! default calendar wiring, removing the need to manage pillars, ju
//! resolution, or engine handles.
//!
//! # Quick start
//!
//! ```rust
//! use qimen_rs::*;
//!
//! let plate = chart(2024, 6, 1, 10).expect("chart");
//! println!("duty palace: {}", plate.leader_palace.name());
//!
//! let request = SearchRequest::new("2024-06-01", "2024-06-14", Category::Career);
//! let times = find_auspicious_times(&request).expect("search");
//! for t in &times {
//!     println!("{}-{:02}-{:02} {:02}:00 {:.1}", t.year, t.month, t.day, t.hour, t.composite);
//! }
//! ```

pub mod convenience;

// Primary re-exports — users should only need `use qimen_rs::*`
pub use convenience::{chart, chart_with, default_builder, default_engine, find_auspicious_times};

// Re-export the base vocabulary so callers don't need qimen_base directly.
pub use qimen_base::{
    Branch, Deity, Gate, GanZhi, Palace, Polarity, SeasonalState, Star, Stem, WuXing,
};

// Calendar types for requests and builders.
pub use qimen_calendar::{CalendarError, Dun, FourPillars, LeapMethod, SolarTerm, Yuan};

// Plate types.
pub use qimen_plate::{Formation, FormationKind, Plate, PlateKind};

// Search types.
pub use qimen_search::{
    AuspiciousTime, Category, Grade, HostGuest, PlateKey, RefTarget, ReferenceScore, SearchError,
    SearchRequest, Shensha, Verdict, ZeriEngine,
};
