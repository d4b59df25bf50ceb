//! High-level entry points wiring the calendar, plate and search crates
//! together.

use qimen_calendar::{LeapMethod, four_pillars, ju_for_date};
use qimen_plate::{Plate, PlateKind, build_plate};
use qimen_search::{
    AuspiciousTime, PlateBuilder, SearchError, SearchRequest, ZeriEngine,
};

/// Builder that derives pillars and ju from the civil date, then
/// assembles the chart.
pub fn default_builder() -> PlateBuilder {
    Box::new(|key| {
        let pillars = four_pillars(key.year, key.month, key.day, key.hour)?;
        let (dun, ju) = ju_for_date(key.year, key.month, key.day, key.leap);
        Ok(build_plate(pillars, dun, ju, key.kind))
    })
}

/// Selection engine preloaded with the default builder.
pub fn default_engine() -> ZeriEngine {
    ZeriEngine::with_builder(default_builder())
}

/// Chart for a civil date and clock hour, rotating style, chaibu leap
/// handling.
pub fn chart(year: i32, month: u32, day: u32, hour: u32) -> Result<Plate, SearchError> {
    chart_with(year, month, day, hour, PlateKind::Rotating, LeapMethod::ChaiBu)
}

/// Chart with an explicit plate style and leap method.
pub fn chart_with(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    kind: PlateKind,
    leap: LeapMethod,
) -> Result<Plate, SearchError> {
    let pillars = four_pillars(year, month, day, hour)?;
    let (dun, ju) = ju_for_date(year, month, day, leap);
    Ok(build_plate(pillars, dun, ju, kind))
}

/// One-shot ranged search with a fresh engine and default builder.
pub fn find_auspicious_times(request: &SearchRequest) -> Result<Vec<AuspiciousTime>, SearchError> {
    default_engine().find_auspicious_times(request)
}
