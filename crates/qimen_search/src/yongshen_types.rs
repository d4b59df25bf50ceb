//! Types for category references (yongshen) and their evaluation.

use qimen_base::{Deity, ElementRelation, Gate, Palace, SeasonalState, Star, Stem, WuXing};
use qimen_plate::FormationKind;

/// Question categories a selection request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Career,
    Wealth,
    Marriage,
    Health,
    Travel,
    Study,
    Lawsuit,
    General,
}

/// All categories.
pub const ALL_CATEGORIES: [Category; 8] = [
    Category::Career,
    Category::Wealth,
    Category::Marriage,
    Category::Health,
    Category::Travel,
    Category::Study,
    Category::Lawsuit,
    Category::General,
];

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "事业",
            Self::Wealth => "财运",
            Self::Marriage => "婚姻",
            Self::Health => "健康",
            Self::Travel => "出行",
            Self::Study => "学业",
            Self::Lawsuit => "官司",
            Self::General => "综合",
        }
    }

    /// Categories where the host/guest contest matters.
    pub const fn uses_host_guest(self) -> bool {
        matches!(self, Self::Marriage | Self::Lawsuit | Self::Wealth)
    }
}

/// A symbol a category cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTarget {
    Gate(Gate),
    Star(Star),
    /// Heaven-plate stem.
    Stem(Stem),
    /// Earth-plate stem.
    EarthStem(Stem),
    Deity(Deity),
}

impl RefTarget {
    /// Five-element affiliation of the referenced symbol.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Gate(g) => g.element(),
            Self::Star(s) => s.element(),
            Self::Stem(s) | Self::EarthStem(s) => s.element(),
            Self::Deity(d) => d.element(),
        }
    }

    /// Display name of the referenced symbol.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gate(g) => g.name(),
            Self::Star(s) => s.name(),
            Self::Stem(s) | Self::EarthStem(s) => s.name(),
            Self::Deity(d) => d.name(),
        }
    }
}

/// Primary and secondary references of one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRefs {
    pub primary: &'static [RefTarget],
    pub secondary: &'static [RefTarget],
}

/// One scored reference on a concrete plate, with the state read off
/// the palace it landed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceScore {
    pub target: RefTarget,
    pub palace: Palace,
    /// Seasonal strength of the reference element this month.
    pub state: SeasonalState,
    /// The palace is void this hour.
    pub void: bool,
    /// The palace anchors the element's storage branch.
    pub storage: bool,
    /// The palace anchors the day branch's harm target.
    pub clashed: bool,
    /// Stance of the reference element toward the day stem.
    pub day_relation: ElementRelation,
    /// Formations touching the palace.
    pub formations: Vec<FormationKind>,
    /// 0-100 favorability.
    pub score: f64,
}

/// Outcome of the host/guest contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HostPrevails,
    GuestPrevails,
    Balanced,
}

/// Host (day) versus guest (hour) strength comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostGuest {
    pub host_palace: Palace,
    pub guest_palace: Palace,
    pub host_state: SeasonalState,
    pub guest_state: SeasonalState,
    pub verdict: Verdict,
}
