//! Nine-palace plate assembly for Qimen Dunjia charts.
//!
//! Builds the full chart for one double-hour from a set of four pillars
//! and a ju number:
//!
//! - Earth plate: the six yi and three qi stems flown through the Luoshu.
//! - Heaven plate: the earth stems rotated so that the duty stem rides
//!   the hour-stem palace.
//! - Gate, star and deity rings rotated from the duty palace.
//! - Void, horse and formation annotations.
//!
//! Clean-room implementation from standard Qimen Dunjia plate conventions.

pub mod builder;
pub mod earth;
pub mod formation;
pub mod plate;

pub use builder::build_plate;
pub use earth::{EARTH_STEM_ORDER, EarthPlate};
pub use formation::{Formation, FormationKind, detect_formations};
pub use plate::{Plate, PlateKind};
