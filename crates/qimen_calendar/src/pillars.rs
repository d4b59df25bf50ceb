//! Four-pillar (bazi) derivation for a civil moment.
//!
//! Day pillar: sexagenary day count anchored on the JDN cycle
//! (1949-10-01 is a Jiazi day). Year pillar: cuts over at Lichun.
//! Month pillar: follows the 12 jie terms with the five-tiger stem
//! rule. Hour pillar: five-rat stem rule from the day stem.
//!
//! The 23:00 double-hour is treated as the civil date's Zi hour; the
//! day pillar does not roll forward until midnight.

use qimen_base::{Branch, GanZhi, Stem};

use crate::error::CalendarError;
use crate::julian::{gregorian_to_jdn, is_valid_date};
use crate::solar_term::{SolarTerm, month_number};

/// The four stem-branch pillars of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

/// Sexagenary day pillar for a Julian Day Number.
pub const fn day_pillar(jdn: i64) -> GanZhi {
    GanZhi::from_index(((jdn + 49).rem_euclid(60)) as u8)
}

/// Year pillar, cutting over at Lichun rather than January 1st.
pub fn year_pillar(year: i32, month: u32, day: u32) -> GanZhi {
    let effective = if (month, day) < SolarTerm::LiChun.approx_date() {
        year - 1
    } else {
        year
    };
    GanZhi::from_index((effective - 4).rem_euclid(60) as u8)
}

/// Month pillar from the governing jie term and the year stem
/// (five-tiger rule: a Jia/Ji year opens with a Bingyin month).
pub fn month_pillar(year_stem: Stem, month: u32, day: u32) -> GanZhi {
    let n = month_number(month, day); // 1 = Yin month
    let branch = Branch::from_index(n + 1);
    let first_stem = (year_stem.index() % 5) * 2 + 2;
    let stem = Stem::from_index(first_stem + n - 1);
    GanZhi::new(stem, branch)
}

/// Double-hour branch for a clock hour (23:00-00:59 is Zi).
pub const fn hour_branch_from_clock(hour: u32) -> Branch {
    Branch::from_index((((hour + 1) / 2) % 12) as u8)
}

/// Hour pillar from the day stem (five-rat rule: a Jia/Ji day opens
/// with a Jiazi hour).
pub const fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> GanZhi {
    let stem = Stem::from_index((day_stem.index() % 5) * 2 + hour_branch.index());
    GanZhi::new(stem, hour_branch)
}

/// All four pillars for a civil date and clock hour.
pub fn four_pillars(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> Result<FourPillars, CalendarError> {
    if !is_valid_date(year, month, day) {
        return Err(CalendarError::InvalidDate("no such calendar day"));
    }
    if hour > 23 {
        return Err(CalendarError::InvalidDate("hour must be 0-23"));
    }
    let y = year_pillar(year, month, day);
    let m = month_pillar(y.stem, month, day);
    let d = day_pillar(gregorian_to_jdn(year, month, day));
    let h = hour_pillar(d.stem, hour_branch_from_clock(hour));
    Ok(FourPillars {
        year: y,
        month: m,
        day: d,
        hour: h,
    })
}
