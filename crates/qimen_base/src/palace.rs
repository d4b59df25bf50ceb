//! The 9 palaces (gong) of the Qimen plate.
//!
//! Eight outer palaces sit on a ring with fixed spatial adjacency; the
//! ninth is the Center, which for plate construction is treated as
//! coincident with its borrowed outer palace (Kun 2).

use crate::element::WuXing;
use crate::ganzhi::Branch;

/// The 9 palaces, ordered by Luoshu number (Kan 1 … Li 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Zhong,
    Qian,
    Dui,
    Gen,
    Li,
}

/// All 9 palaces in Luoshu order.
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Zhong,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// The 8 outer palaces (everything but the Center), Luoshu order.
pub const OUTER_PALACES: [Palace; 8] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// The outer palace the Center is borrowed into (Zhuan-Pan convention).
pub const BORROWED_PALACE: Palace = Palace::Kun;

impl Palace {
    /// 0-based index into `ALL_PALACES` (= Luoshu number − 1).
    pub const fn index(self) -> u8 {
        match self {
            Self::Kan => 0,
            Self::Kun => 1,
            Self::Zhen => 2,
            Self::Xun => 3,
            Self::Zhong => 4,
            Self::Qian => 5,
            Self::Dui => 6,
            Self::Gen => 7,
            Self::Li => 8,
        }
    }

    /// Luoshu number (1-9).
    pub const fn luoshu(self) -> u8 {
        self.index() + 1
    }

    /// Palace for a Luoshu number (1-9). Returns None outside that range.
    pub fn from_luoshu(n: u8) -> Option<Palace> {
        if n == 0 || n > 9 {
            return None;
        }
        Some(ALL_PALACES[(n - 1) as usize])
    }

    /// Chinese trigram name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "坎",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Zhong => "中",
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
        }
    }

    /// Compass direction of the palace.
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Kan => "北",
            Self::Kun => "西南",
            Self::Zhen => "东",
            Self::Xun => "东南",
            Self::Zhong => "中央",
            Self::Qian => "西北",
            Self::Dui => "西",
            Self::Gen => "东北",
            Self::Li => "南",
        }
    }

    /// Five-element affiliation of the palace.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Kan => WuXing::Water,
            Self::Kun => WuXing::Earth,
            Self::Zhen => WuXing::Wood,
            Self::Xun => WuXing::Wood,
            Self::Zhong => WuXing::Earth,
            Self::Qian => WuXing::Metal,
            Self::Dui => WuXing::Metal,
            Self::Gen => WuXing::Earth,
            Self::Li => WuXing::Fire,
        }
    }

    /// Earthly branches anchored to this palace (empty for the Center).
    pub const fn anchor_branches(self) -> &'static [Branch] {
        match self {
            Self::Kan => &[Branch::Zi],
            Self::Kun => &[Branch::Wei, Branch::Shen],
            Self::Zhen => &[Branch::Mao],
            Self::Xun => &[Branch::Chen, Branch::Si],
            Self::Zhong => &[],
            Self::Qian => &[Branch::Xu, Branch::Hai],
            Self::Dui => &[Branch::You],
            Self::Gen => &[Branch::Chou, Branch::Yin],
            Self::Li => &[Branch::Wu],
        }
    }

    /// Palace diametrically opposite on the ring. The Center is its own
    /// opposite.
    pub const fn opposite(self) -> Palace {
        match self {
            Self::Kan => Self::Li,
            Self::Kun => Self::Gen,
            Self::Zhen => Self::Dui,
            Self::Xun => Self::Qian,
            Self::Zhong => Self::Zhong,
            Self::Qian => Self::Xun,
            Self::Dui => Self::Zhen,
            Self::Gen => Self::Kun,
            Self::Li => Self::Kan,
        }
    }

    /// The palace as a ring position: the Center resolves to its
    /// borrowed palace, outer palaces are themselves.
    pub const fn ring_anchor(self) -> Palace {
        match self {
            Self::Zhong => BORROWED_PALACE,
            other => other,
        }
    }

    /// True for the Center palace.
    pub const fn is_center(self) -> bool {
        matches!(self, Self::Zhong)
    }
}

/// Fixed branch → palace anchoring.
pub const fn palace_of_branch(branch: Branch) -> Palace {
    match branch {
        Branch::Zi => Palace::Kan,
        Branch::Chou => Palace::Gen,
        Branch::Yin => Palace::Gen,
        Branch::Mao => Palace::Zhen,
        Branch::Chen => Palace::Xun,
        Branch::Si => Palace::Xun,
        Branch::Wu => Palace::Li,
        Branch::Wei => Palace::Kun,
        Branch::Shen => Palace::Kun,
        Branch::You => Palace::Dui,
        Branch::Xu => Palace::Qian,
        Branch::Hai => Palace::Qian,
    }
}
