//! The 24 solar terms, the yin/yang cycle split, and ju (stage) seeding.
//!
//! Term dates come from a fixed approximate table (the civil-date drift
//! of ±1 day is accepted; astronomical accuracy is a non-goal). The ju
//! table assigns each term its upper/middle/lower-yuan stage numbers;
//! the yuan is derived either from the day pillar's futou (chaibu
//! method) or from 5-day blocks within the term (zhirun approximation).

use qimen_base::{Branch, GanZhi};

use crate::julian::gregorian_to_jdn;
use crate::pillars::day_pillar;

/// The 24 solar terms, ordered by civil-year date (Xiaohan first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 terms in civil-year order.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

impl SolarTerm {
    /// 0-based index into `ALL_TERMS`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
        }
    }

    /// Approximate (month, day) the term falls on.
    pub const fn approx_date(self) -> (u32, u32) {
        match self {
            Self::XiaoHan => (1, 6),
            Self::DaHan => (1, 20),
            Self::LiChun => (2, 4),
            Self::YuShui => (2, 19),
            Self::JingZhe => (3, 6),
            Self::ChunFen => (3, 21),
            Self::QingMing => (4, 5),
            Self::GuYu => (4, 20),
            Self::LiXia => (5, 6),
            Self::XiaoMan => (5, 21),
            Self::MangZhong => (6, 6),
            Self::XiaZhi => (6, 21),
            Self::XiaoShu => (7, 7),
            Self::DaShu => (7, 23),
            Self::LiQiu => (8, 8),
            Self::ChuShu => (8, 23),
            Self::BaiLu => (9, 8),
            Self::QiuFen => (9, 23),
            Self::HanLu => (10, 8),
            Self::ShuangJiang => (10, 24),
            Self::LiDong => (11, 8),
            Self::XiaoXue => (11, 22),
            Self::DaXue => (12, 7),
            Self::DongZhi => (12, 22),
        }
    }

    /// True for terms in the yang half-cycle (Dongzhi through Mangzhong).
    pub const fn is_yang(self) -> bool {
        matches!(
            self,
            Self::DongZhi
                | Self::XiaoHan
                | Self::DaHan
                | Self::LiChun
                | Self::YuShui
                | Self::JingZhe
                | Self::ChunFen
                | Self::QingMing
                | Self::GuYu
                | Self::LiXia
                | Self::XiaoMan
                | Self::MangZhong
        )
    }

    /// Ju (stage) numbers for the upper, middle, and lower yuan.
    pub const fn ju_numbers(self) -> [u8; 3] {
        match self {
            Self::DongZhi => [1, 7, 4],
            Self::XiaoHan => [2, 8, 5],
            Self::DaHan => [3, 9, 6],
            Self::LiChun => [8, 5, 2],
            Self::YuShui => [9, 6, 3],
            Self::JingZhe => [1, 7, 4],
            Self::ChunFen => [3, 9, 6],
            Self::QingMing => [4, 1, 7],
            Self::GuYu => [5, 2, 8],
            Self::LiXia => [4, 1, 7],
            Self::XiaoMan => [5, 2, 8],
            Self::MangZhong => [6, 3, 9],
            Self::XiaZhi => [9, 3, 6],
            Self::XiaoShu => [8, 2, 5],
            Self::DaShu => [7, 1, 4],
            Self::LiQiu => [2, 5, 8],
            Self::ChuShu => [1, 4, 7],
            Self::BaiLu => [9, 3, 6],
            Self::QiuFen => [7, 1, 4],
            Self::HanLu => [6, 9, 3],
            Self::ShuangJiang => [5, 8, 2],
            Self::LiDong => [6, 9, 3],
            Self::XiaoXue => [5, 8, 2],
            Self::DaXue => [4, 7, 1],
        }
    }
}

/// Yin or yang half-cycle; selects the rotation direction of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dun {
    Yang,
    Yin,
}

impl Dun {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳遁",
            Self::Yin => "阴遁",
        }
    }

    /// Yang cycles rotate clockwise, yin counterclockwise.
    pub const fn clockwise(self) -> bool {
        matches!(self, Self::Yang)
    }
}

/// Position within a term's three five-day yuan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Yuan {
    Upper,
    Middle,
    Lower,
}

impl Yuan {
    pub const fn index(self) -> usize {
        match self {
            Self::Upper => 0,
            Self::Middle => 1,
            Self::Lower => 2,
        }
    }
}

/// Method for reconciling the sexagenary day cycle with the terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeapMethod {
    /// Yuan from the day pillar's futou (the preceding Jia/Ji day).
    ChaiBu,
    /// Yuan from 5-day blocks counted from the term start.
    ZhiRun,
}

/// The term whose approximate date is exactly (month, day), if any.
pub fn term_on(month: u32, day: u32) -> Option<SolarTerm> {
    ALL_TERMS
        .iter()
        .copied()
        .find(|t| t.approx_date() == (month, day))
}

/// The term governing the given civil date (the latest term whose date
/// is not after it). Dates before Xiaohan belong to the previous
/// year's Dongzhi.
pub fn current_term(month: u32, day: u32) -> SolarTerm {
    let mut current = SolarTerm::DongZhi;
    for t in ALL_TERMS {
        let (tm, td) = t.approx_date();
        if (tm, td) <= (month, day) {
            current = t;
        }
    }
    current
}

/// Month number 1-12 counted from Lichun (the Yin month).
pub fn month_number(month: u32, day: u32) -> u8 {
    // The 12 jie terms open the 12 months.
    const JIE: [(SolarTerm, u8); 12] = [
        (SolarTerm::LiChun, 1),
        (SolarTerm::JingZhe, 2),
        (SolarTerm::QingMing, 3),
        (SolarTerm::LiXia, 4),
        (SolarTerm::MangZhong, 5),
        (SolarTerm::XiaoShu, 6),
        (SolarTerm::LiQiu, 7),
        (SolarTerm::BaiLu, 8),
        (SolarTerm::HanLu, 9),
        (SolarTerm::LiDong, 10),
        (SolarTerm::DaXue, 11),
        (SolarTerm::XiaoHan, 12),
    ];
    let mut n = 11; // before Xiaohan in January: still the Zi month
    for (t, num) in JIE {
        if t.approx_date() <= (month, day) {
            n = num;
        }
    }
    // January before Xiaohan belongs to month 11 (Zi) of the cycle that
    // started the previous Lichun.
    if month == 1 && (month, day) < SolarTerm::XiaoHan.approx_date() {
        n = 11;
    }
    n
}

/// Days elapsed since the governing term began (0 on the term day).
pub fn days_into_term(year: i32, month: u32, day: u32) -> i64 {
    let term = current_term(month, day);
    let (tm, td) = term.approx_date();
    // A January date before Xiaohan sits in the previous year's Dongzhi.
    let term_year = if term == SolarTerm::DongZhi && month == 1 {
        year - 1
    } else {
        year
    };
    gregorian_to_jdn(year, month, day) - gregorian_to_jdn(term_year, tm, td)
}

/// Yuan from the day pillar's futou (chaibu method): step back to the
/// nearest Jia or Ji day and classify its branch group.
pub fn yuan_from_futou(day: GanZhi) -> Yuan {
    let offset = day.stem.index() % 5;
    let futou = Branch::from_index(12 + day.branch.index() - offset);
    match futou {
        Branch::Zi | Branch::Wu | Branch::Mao | Branch::You => Yuan::Upper,
        Branch::Yin | Branch::Shen | Branch::Si | Branch::Hai => Yuan::Middle,
        Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Yuan::Lower,
    }
}

/// Cycle polarity and ju number for a civil date.
pub fn ju_for_date(year: i32, month: u32, day: u32, method: LeapMethod) -> (Dun, u8) {
    let term = current_term(month, day);
    let dun = if term.is_yang() { Dun::Yang } else { Dun::Yin };
    let yuan = match method {
        LeapMethod::ChaiBu => {
            let day_gz = day_pillar(gregorian_to_jdn(year, month, day));
            yuan_from_futou(day_gz)
        }
        LeapMethod::ZhiRun => {
            let elapsed = days_into_term(year, month, day).rem_euclid(15);
            match elapsed / 5 {
                0 => Yuan::Upper,
                1 => Yuan::Middle,
                _ => Yuan::Lower,
            }
        }
    };
    (dun, term.ju_numbers()[yuan.index()])
}
