//! The 8 deities (bashen) overlaid on the plate: Zhifu walks from the
//! duty palace and the rest follow in fixed order.

use crate::element::{Polarity, WuXing};

/// The 8 deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deity {
    ZhiFu,
    TengShe,
    TaiYin,
    LiuHe,
    BaiHu,
    XuanWu,
    JiuDi,
    JiuTian,
}

/// Walking order, starting at Zhifu.
pub const DEITY_ORDER: [Deity; 8] = [
    Deity::ZhiFu,
    Deity::TengShe,
    Deity::TaiYin,
    Deity::LiuHe,
    Deity::BaiHu,
    Deity::XuanWu,
    Deity::JiuDi,
    Deity::JiuTian,
];

/// Alias kept for symmetry with the other enumerations.
pub const ALL_DEITIES: [Deity; 8] = DEITY_ORDER;

impl Deity {
    /// 0-based index into `DEITY_ORDER`.
    pub const fn index(self) -> u8 {
        match self {
            Self::ZhiFu => 0,
            Self::TengShe => 1,
            Self::TaiYin => 2,
            Self::LiuHe => 3,
            Self::BaiHu => 4,
            Self::XuanWu => 5,
            Self::JiuDi => 6,
            Self::JiuTian => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ZhiFu => "值符",
            Self::TengShe => "腾蛇",
            Self::TaiYin => "太阴",
            Self::LiuHe => "六合",
            Self::BaiHu => "白虎",
            Self::XuanWu => "玄武",
            Self::JiuDi => "九地",
            Self::JiuTian => "九天",
        }
    }

    /// Five-element affiliation.
    pub const fn element(self) -> WuXing {
        match self {
            Self::ZhiFu => WuXing::Earth,
            Self::TengShe => WuXing::Fire,
            Self::TaiYin => WuXing::Metal,
            Self::LiuHe => WuXing::Wood,
            Self::BaiHu => WuXing::Metal,
            Self::XuanWu => WuXing::Water,
            Self::JiuDi => WuXing::Earth,
            Self::JiuTian => WuXing::Metal,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::ZhiFu | Self::TaiYin | Self::LiuHe | Self::JiuDi | Self::JiuTian => {
                Polarity::Favorable
            }
            Self::TengShe | Self::BaiHu | Self::XuanWu => Polarity::Unfavorable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deity_indices_sequential() {
        for (i, d) in DEITY_ORDER.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    #[test]
    fn zhifu_leads() {
        assert_eq!(DEITY_ORDER[0], Deity::ZhiFu);
    }

    #[test]
    fn polarity_split() {
        let bad: Vec<Deity> = ALL_DEITIES
            .iter()
            .copied()
            .filter(|d| matches!(d.polarity(), Polarity::Unfavorable))
            .collect();
        assert_eq!(bad, vec![Deity::TengShe, Deity::BaiHu, Deity::XuanWu]);
    }
}
