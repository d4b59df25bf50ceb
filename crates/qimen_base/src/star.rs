//! The 9 stars (xing): 8 active ring stars plus Tianqin, which is always
//! merged with Tianrui's palace and shown at the Center.

use crate::element::WuXing;
use crate::palace::Palace;

/// The 9 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    Peng,
    Ren,
    Chong,
    Fu,
    Ying,
    Rui,
    Zhu,
    Xin,
    Qin,
}

/// The 8 active stars in canonical ring order (clockwise from Kan).
pub const STAR_ORDER: [Star; 8] = [
    Star::Peng,
    Star::Ren,
    Star::Chong,
    Star::Fu,
    Star::Ying,
    Star::Rui,
    Star::Zhu,
    Star::Xin,
];

/// All 9 stars.
pub const ALL_STARS: [Star; 9] = [
    Star::Peng,
    Star::Ren,
    Star::Chong,
    Star::Fu,
    Star::Ying,
    Star::Rui,
    Star::Zhu,
    Star::Xin,
    Star::Qin,
];

impl Star {
    /// 0-based index into `ALL_STARS`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Peng => 0,
            Self::Ren => 1,
            Self::Chong => 2,
            Self::Fu => 3,
            Self::Ying => 4,
            Self::Rui => 5,
            Self::Zhu => 6,
            Self::Xin => 7,
            Self::Qin => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peng => "天蓬",
            Self::Ren => "天任",
            Self::Chong => "天冲",
            Self::Fu => "天辅",
            Self::Ying => "天英",
            Self::Rui => "天芮",
            Self::Zhu => "天柱",
            Self::Xin => "天心",
            Self::Qin => "天禽",
        }
    }

    /// Canonical home palace. Tianqin's home is the Center.
    pub const fn home_palace(self) -> Palace {
        match self {
            Self::Peng => Palace::Kan,
            Self::Ren => Palace::Gen,
            Self::Chong => Palace::Zhen,
            Self::Fu => Palace::Xun,
            Self::Ying => Palace::Li,
            Self::Rui => Palace::Kun,
            Self::Zhu => Palace::Dui,
            Self::Xin => Palace::Qian,
            Self::Qin => Palace::Zhong,
        }
    }

    /// Five-element affiliation.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Peng => WuXing::Water,
            Self::Ren => WuXing::Earth,
            Self::Chong => WuXing::Wood,
            Self::Fu => WuXing::Wood,
            Self::Ying => WuXing::Fire,
            Self::Rui => WuXing::Earth,
            Self::Zhu => WuXing::Metal,
            Self::Xin => WuXing::Metal,
            Self::Qin => WuXing::Earth,
        }
    }
}

/// Active star whose home is the given palace. The Center resolves to
/// its borrowed palace (Tianrui, which Tianqin rides with).
pub const fn star_at_home(palace: Palace) -> Star {
    match palace.ring_anchor() {
        Palace::Kan => Star::Peng,
        Palace::Gen => Star::Ren,
        Palace::Zhen => Star::Chong,
        Palace::Xun => Star::Fu,
        Palace::Li => Star::Ying,
        Palace::Kun => Star::Rui,
        Palace::Dui => Star::Zhu,
        // ring_anchor never yields Zhong.
        Palace::Qian | Palace::Zhong => Star::Xin,
    }
}
