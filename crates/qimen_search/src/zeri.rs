//! Ranged auspicious-time (zeri) search.
//!
//! Scans every double-hour in a date range, scores each chart for the
//! requested category, and returns the best slots sorted by composite
//! score. Charts are built through a pluggable builder and shared via
//! the LRU cache.

use std::cmp::Ordering;
use std::rc::Rc;

use qimen_base::{OUTER_PALACES, Polarity, Stem};
use qimen_calendar::{
    day_pillar, gregorian_to_jdn, is_valid_date, jdn_to_gregorian, month_pillar, term_on,
    year_pillar,
};
use qimen_plate::Plate;

use crate::cache::{PlateCache, PlateKey};
use crate::error::SearchError;
use crate::spirit::{active_spirits, spirit_score};
use crate::yongshen::{host_guest, refs_for, score_references, target_palace};
use crate::zeri_types::{AuspiciousTime, Grade, MAX_RANGE_DAYS, SearchRequest};

/// Builds a plate for a cache key.
pub type PlateBuilder = Box<dyn Fn(&PlateKey) -> Result<Plate, SearchError>>;

/// The selection engine: a plate builder plus its cache.
pub struct ZeriEngine {
    builder: Option<PlateBuilder>,
    cache: PlateCache,
}

impl ZeriEngine {
    /// Engine with no builder and the default cache capacity.
    pub fn new() -> Self {
        Self {
            builder: None,
            cache: PlateCache::new(),
        }
    }

    /// Engine with a builder installed.
    pub fn with_builder(builder: PlateBuilder) -> Self {
        Self {
            builder: Some(builder),
            cache: PlateCache::new(),
        }
    }

    pub fn set_builder(&mut self, builder: PlateBuilder) {
        self.builder = Some(builder);
    }

    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.cache = PlateCache::with_capacity(capacity);
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Chart for one key, served from the cache when possible.
    pub fn plate_for(&mut self, key: PlateKey) -> Result<Rc<Plate>, SearchError> {
        let builder = self
            .builder
            .as_ref()
            .ok_or(SearchError::BuilderNotConfigured)?;
        self.cache.get_or_build(key, |k| builder(k))
    }

    /// Scans the request's range and returns qualifying double-hours,
    /// best first.
    pub fn find_auspicious_times(
        &mut self,
        request: &SearchRequest,
    ) -> Result<Vec<AuspiciousTime>, SearchError> {
        if self.builder.is_none() {
            return Err(SearchError::BuilderNotConfigured);
        }
        let (sy, sm, sd) = parse_date(&request.start_date)?;
        let (ey, em, ed) = parse_date(&request.end_date)?;
        let start_jdn = gregorian_to_jdn(sy, sm, sd);
        let end_jdn = gregorian_to_jdn(ey, em, ed);
        if end_jdn < start_jdn {
            return Err(SearchError::InvalidRange("end date precedes start date"));
        }
        if end_jdn - start_jdn > MAX_RANGE_DAYS {
            return Err(SearchError::RangeTooLong);
        }

        let mut results = Vec::new();
        for jdn in start_jdn..=end_jdn {
            let (year, month, day) = jdn_to_gregorian(jdn);
            let day_gz = day_pillar(jdn);
            if request.exclude_year_clash {
                let year_gz = year_pillar(year, month, day);
                if day_gz.branch.clash() == year_gz.branch {
                    continue;
                }
            }
            if request.exclude_month_clash {
                let year_gz = year_pillar(year, month, day);
                let month_gz = month_pillar(year_gz.stem, month, day);
                if day_gz.branch.clash() == month_gz.branch {
                    continue;
                }
            }
            if request.exclude_term_transition && term_on(month, day).is_some() {
                continue;
            }

            let mut collected_today = 0usize;
            for slot in 0..12u32 {
                let hour = slot * 2;
                let key = PlateKey {
                    year,
                    month,
                    day,
                    hour,
                    kind: request.kind,
                    leap: request.leap,
                };
                let plate = self.plate_for(key)?;
                let candidate = evaluate_slot(&plate, request, year, month, day, hour);
                if candidate.composite >= request.min_score {
                    let strong = candidate.composite >= 80.0;
                    results.push(candidate);
                    collected_today += 1;
                    if collected_today >= request.limit.saturating_mul(2) && strong {
                        break;
                    }
                }
            }
        }

        results.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(Ordering::Equal)
        });
        results.truncate(request.limit);
        Ok(results)
    }
}

impl Default for ZeriEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `YYYY-MM-DD` into a validated civil date.
fn parse_date(s: &str) -> Result<(i32, u32, u32), SearchError> {
    let mut parts = s.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(SearchError::InvalidDate("expected YYYY-MM-DD"));
    };
    let year: i32 = y
        .parse()
        .map_err(|_| SearchError::InvalidDate("bad year field"))?;
    let month: u32 = m
        .parse()
        .map_err(|_| SearchError::InvalidDate("bad month field"))?;
    let day: u32 = d
        .parse()
        .map_err(|_| SearchError::InvalidDate("bad day field"))?;
    if !is_valid_date(year, month, day) {
        return Err(SearchError::InvalidDate("no such calendar day"));
    }
    Ok((year, month, day))
}

/// Scores one double-hour chart against a request.
fn evaluate_slot(
    plate: &Rc<Plate>,
    request: &SearchRequest,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> AuspiciousTime {
    // Pattern: formations plus gate placement.
    let favorable = plate
        .formations
        .iter()
        .filter(|f| f.kind.polarity() == Polarity::Favorable)
        .count() as i32;
    let unfavorable = plate
        .formations
        .iter()
        .filter(|f| f.kind.polarity() == Polarity::Unfavorable)
        .count() as i32;
    let good_gate_placed = OUTER_PALACES.into_iter().any(|p| {
        plate.gate_at(p).is_some_and(|g| g.is_auspicious()) && !plate.is_void(p)
    });
    let mut pattern = 60 + 10 * favorable - 15 * unfavorable;
    if good_gate_placed {
        pattern += 5;
    }
    let pattern_score = f64::from(pattern.clamp(0, 100));

    // References: mean of whatever appears this hour.
    let references = score_references(plate, request.category);
    let reference_score = if references.is_empty() {
        50.0
    } else {
        references.iter().map(|r| r.score).sum::<f64>() / references.len() as f64
    };

    // Spirits.
    let hits = active_spirits(plate);
    let spirit = f64::from((50 + spirit_score(&hits)).clamp(0, 100));

    let composite = 0.35 * pattern_score + 0.40 * reference_score + 0.25 * spirit;
    let grade = Grade::from_score(composite);

    let direction = if request.include_direction {
        refs_for(request.category)
            .primary
            .iter()
            .find_map(|t| target_palace(plate, *t))
            .map(|p| p.direction())
    } else {
        None
    };

    let mut highlights = Vec::new();
    let mut warnings = Vec::new();
    for formation in &plate.formations {
        match formation.kind.polarity() {
            Polarity::Favorable => highlights.push(formation.kind.name().to_string()),
            Polarity::Unfavorable => warnings.push(formation.kind.name().to_string()),
            Polarity::Neutral => {}
        }
    }
    if good_gate_placed {
        highlights.push("吉门得地".to_string());
    }
    for r in &references {
        if r.score >= 80.0 {
            highlights.push(format!("{}得力", r.target.name()));
        }
        if r.palace == plate.horse_palace {
            highlights.push(format!("驿马临{}", r.target.name()));
        }
    }
    let day_stem_palace = plate.palace_of_earth_stem(resolve_stem(plate, true));
    if plate.is_void(day_stem_palace) {
        warnings.push("日干落空".to_string());
    }
    let hour_stem_palace = plate.palace_of_earth_stem(resolve_stem(plate, false));
    if plate.is_void(hour_stem_palace) {
        warnings.push("时干落空".to_string());
    }

    let host_guest = if request.category.uses_host_guest() {
        Some(host_guest(plate))
    } else {
        None
    };

    AuspiciousTime {
        year,
        month,
        day,
        hour,
        plate: Rc::clone(plate),
        pattern_score,
        reference_score,
        spirit_score: spirit,
        composite,
        grade,
        direction,
        references,
        host_guest,
        highlights,
        warnings,
    }
}

/// Day or hour stem with Jia resolved through its decade's hiding stem.
fn resolve_stem(plate: &Plate, day: bool) -> Stem {
    let gz = if day {
        plate.pillars.day
    } else {
        plate.pillars.hour
    };
    if gz.stem == Stem::Jia {
        gz.hiding_stem()
    } else {
        gz.stem
    }
}
