//! The assembled chart for one double-hour.

use qimen_base::{ALL_PALACES, Branch, Deity, Gate, Palace, Star, Stem};
use qimen_calendar::{Dun, FourPillars};

use crate::earth::EarthPlate;
use crate::formation::Formation;

/// Plate construction style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateKind {
    /// Zhuan-Pan: symbols rotate along the physical ring.
    Rotating,
    /// Fei-Pan: symbols walk the Luoshu numbers.
    Flying,
}

impl PlateKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rotating => "转盘",
            Self::Flying => "飞盘",
        }
    }
}

/// A fully assembled nine-palace chart.
///
/// All per-palace arrays are indexed by `Palace::index()`. Gate, star and
/// deity slots are optional: the rotation can leave one outer palace
/// uncovered, and the Center only carries borrowed copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    pub pillars: FourPillars,
    pub dun: Dun,
    pub ju: u8,
    pub kind: PlateKind,
    pub earth: EarthPlate,
    pub heaven: [Stem; 9],
    pub gates: [Option<Gate>; 9],
    pub stars: [Option<Star>; 9],
    pub deities: [Option<Deity>; 9],
    /// Palace of the duty stem on the earth plate.
    pub leader_palace: Palace,
    /// Palace the duty gate and star fall into this hour.
    pub falling_palace: Palace,
    pub hour_void: [Branch; 2],
    pub day_void: [Branch; 2],
    /// Palaces holding an hour-void branch.
    pub void_flags: [bool; 9],
    pub horse_palace: Palace,
    pub formations: Vec<Formation>,
}

impl Plate {
    pub const fn heaven_stem(&self, palace: Palace) -> Stem {
        self.heaven[palace.index() as usize]
    }

    pub const fn earth_stem(&self, palace: Palace) -> Stem {
        self.earth.stem_at(palace)
    }

    pub const fn gate_at(&self, palace: Palace) -> Option<Gate> {
        self.gates[palace.index() as usize]
    }

    pub const fn star_at(&self, palace: Palace) -> Option<Star> {
        self.stars[palace.index() as usize]
    }

    pub const fn deity_at(&self, palace: Palace) -> Option<Deity> {
        self.deities[palace.index() as usize]
    }

    pub const fn is_void(&self, palace: Palace) -> bool {
        self.void_flags[palace.index() as usize]
    }

    /// Palace a stem occupies on the heaven plate. Jia never appears;
    /// callers resolve it through the hiding stem first.
    pub fn palace_of_heaven_stem(&self, stem: Stem) -> Option<Palace> {
        ALL_PALACES
            .into_iter()
            .find(|p| self.heaven[p.index() as usize] == stem)
    }

    /// Palace a stem occupies on the earth plate (Jia resolves to Wu).
    pub fn palace_of_earth_stem(&self, stem: Stem) -> Palace {
        self.earth.palace_of(stem)
    }
}
