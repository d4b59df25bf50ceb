//! The 8 gates (men) and their canonical home palaces.

use crate::element::WuXing;
use crate::palace::Palace;

/// The 8 gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Rest,
    Life,
    Harm,
    Block,
    Brilliance,
    Death,
    Fright,
    Open,
}

/// All 8 gates in canonical ring order (clockwise from Kan).
pub const GATE_ORDER: [Gate; 8] = [
    Gate::Rest,
    Gate::Life,
    Gate::Harm,
    Gate::Block,
    Gate::Brilliance,
    Gate::Death,
    Gate::Fright,
    Gate::Open,
];

/// Alias kept for symmetry with the other enumerations.
pub const ALL_GATES: [Gate; 8] = GATE_ORDER;

impl Gate {
    /// 0-based index into `GATE_ORDER`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Rest => 0,
            Self::Life => 1,
            Self::Harm => 2,
            Self::Block => 3,
            Self::Brilliance => 4,
            Self::Death => 5,
            Self::Fright => 6,
            Self::Open => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rest => "休门",
            Self::Life => "生门",
            Self::Harm => "伤门",
            Self::Block => "杜门",
            Self::Brilliance => "景门",
            Self::Death => "死门",
            Self::Fright => "惊门",
            Self::Open => "开门",
        }
    }

    /// Canonical home palace.
    pub const fn home_palace(self) -> Palace {
        match self {
            Self::Rest => Palace::Kan,
            Self::Life => Palace::Gen,
            Self::Harm => Palace::Zhen,
            Self::Block => Palace::Xun,
            Self::Brilliance => Palace::Li,
            Self::Death => Palace::Kun,
            Self::Fright => Palace::Dui,
            Self::Open => Palace::Qian,
        }
    }

    /// Five-element affiliation (follows the home palace).
    pub const fn element(self) -> WuXing {
        self.home_palace().element()
    }

    /// The three auspicious gates (kai, xiu, sheng).
    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Open | Self::Rest | Self::Life)
    }
}

/// Gate whose home is the given palace. The Center resolves to its
/// borrowed palace, keeping the lookup total.
pub const fn gate_at_home(palace: Palace) -> Gate {
    match palace.ring_anchor() {
        Palace::Kan => Gate::Rest,
        Palace::Gen => Gate::Life,
        Palace::Zhen => Gate::Harm,
        Palace::Xun => Gate::Block,
        Palace::Li => Gate::Brilliance,
        Palace::Kun => Gate::Death,
        Palace::Dui => Gate::Fright,
        // ring_anchor never yields Zhong.
        Palace::Qian | Palace::Zhong => Gate::Open,
    }
}
