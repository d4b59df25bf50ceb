//! Heavenly stems, earthly branches, and sexagenary (ganzhi) pairs.
//!
//! Includes the six-xun tables used throughout plate construction: each
//! sexagenary pair belongs to one of six decades led by a Jia day; the
//! decade's leader hides behind one of the six yi stems, and the two
//! branches the decade never reaches are its void (kongwang) pair.

use crate::element::WuXing;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// 0-based index into `ALL_STEMS`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem for a 0-based cycle index (taken modulo 10).
    pub const fn from_index(i: u8) -> Stem {
        ALL_STEMS[(i % 10) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Five-element affiliation.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Jia | Self::Yi => WuXing::Wood,
            Self::Bing | Self::Ding => WuXing::Fire,
            Self::Wu | Self::Ji => WuXing::Earth,
            Self::Geng | Self::Xin => WuXing::Metal,
            Self::Ren | Self::Gui => WuXing::Water,
        }
    }

    /// Yang stems sit at even cycle positions.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// 0-based index into `ALL_BRANCHES`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch for a 0-based cycle index (taken modulo 12).
    pub const fn from_index(i: u8) -> Branch {
        ALL_BRANCHES[(i % 12) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Five-element affiliation.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Yin | Self::Mao => WuXing::Wood,
            Self::Si | Self::Wu => WuXing::Fire,
            Self::Shen | Self::You => WuXing::Metal,
            Self::Hai | Self::Zi => WuXing::Water,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => WuXing::Earth,
        }
    }

    /// The branch this one clashes with (liuchong: the diametric branch).
    pub const fn clash(self) -> Branch {
        Branch::from_index(self.index() + 6)
    }

    /// The branch this one harms (liuhai pairs).
    pub const fn harm(self) -> Branch {
        match self {
            Self::Zi => Self::Wei,
            Self::Wei => Self::Zi,
            Self::Chou => Self::Wu,
            Self::Wu => Self::Chou,
            Self::Yin => Self::Si,
            Self::Si => Self::Yin,
            Self::Mao => Self::Chen,
            Self::Chen => Self::Mao,
            Self::Shen => Self::Hai,
            Self::Hai => Self::Shen,
            Self::You => Self::Xu,
            Self::Xu => Self::You,
        }
    }

    /// Yang branches sit at even cycle positions.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Post-horse (transit) branch of this branch's triad.
    pub const fn horse(self) -> Branch {
        match self {
            Self::Shen | Self::Zi | Self::Chen => Self::Yin,
            Self::Yin | Self::Wu | Self::Xu => Self::Shen,
            Self::Si | Self::You | Self::Chou => Self::Hai,
            Self::Hai | Self::Mao | Self::Wei => Self::Si,
        }
    }
}

/// A sexagenary stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair for a 0-based sexagenary cycle index (taken modulo 60).
    pub const fn from_index(i: u8) -> Self {
        let i = i % 60;
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// 0-based position in the sexagenary cycle (0 = Jiazi).
    pub const fn cycle_index(self) -> u8 {
        // CRT over the 10- and 12-cycles.
        ((6 * self.stem.index() as u16 + 55 * self.branch.index() as u16) % 60) as u8
    }

    /// Branch of the decade leader (the Jia day opening this xun).
    pub const fn xun_leader_branch(self) -> Branch {
        Branch::from_index(12 + self.branch.index() - self.stem.index())
    }

    /// The yi stem the decade leader hides behind (Jiazi → Wu … Jiayin → Gui).
    pub const fn hiding_stem(self) -> Stem {
        match self.xun_leader_branch() {
            Branch::Zi => Stem::Wu,
            Branch::Xu => Stem::Ji,
            Branch::Shen => Stem::Geng,
            Branch::Wu => Stem::Xin,
            Branch::Chen => Stem::Ren,
            // Odd leader branches cannot arise from a sexagenary pair.
            _ => Stem::Gui,
        }
    }

    /// The two void (kongwang) branches of this pair's decade.
    pub const fn void_branches(self) -> [Branch; 2] {
        let leader = self.xun_leader_branch().index();
        [
            Branch::from_index(leader + 10),
            Branch::from_index(leader + 11),
        ]
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60 {
            assert_eq!(GanZhi::from_index(i).cycle_index(), i);
        }
    }

    #[test]
    fn jiazi_is_index_zero() {
        let gz = GanZhi::new(Stem::Jia, Branch::Zi);
        assert_eq!(gz.cycle_index(), 0);
    }

    #[test]
    fn wuwu_cycle_index() {
        // 戊午 is position 54 in the cycle.
        let gz = GanZhi::new(Stem::Wu, Branch::Wu);
        assert_eq!(gz.cycle_index(), 54);
    }

    #[test]
    fn xun_leaders_and_hiding_stems() {
        // 甲子旬: leader Zi, hides behind Wu.
        let gz = GanZhi::new(Stem::Bing, Branch::Yin); // 丙寅, in 甲子旬
        assert_eq!(gz.xun_leader_branch(), Branch::Zi);
        assert_eq!(gz.hiding_stem(), Stem::Wu);

        // 庚午 is in 甲子旬 (index 6).
        let gz = GanZhi::from_index(6);
        assert_eq!(gz.hiding_stem(), Stem::Wu);

        // 甲戌旬 hides behind Ji.
        let gz = GanZhi::from_index(10);
        assert_eq!(gz.stem, Stem::Jia);
        assert_eq!(gz.branch, Branch::Xu);
        assert_eq!(gz.hiding_stem(), Stem::Ji);

        // 甲寅旬 hides behind Gui.
        let gz = GanZhi::from_index(50);
        assert_eq!(gz.branch, Branch::Yin);
        assert_eq!(gz.hiding_stem(), Stem::Gui);
    }

    #[test]
    fn void_branches_per_xun() {
        // 甲子旬 void: 戌亥.
        let gz = GanZhi::from_index(0);
        assert_eq!(gz.void_branches(), [Branch::Xu, Branch::Hai]);
        // 甲戌旬 void: 申酉.
        let gz = GanZhi::from_index(10);
        assert_eq!(gz.void_branches(), [Branch::Shen, Branch::You]);
        // 甲寅旬 void: 子丑.
        let gz = GanZhi::from_index(50);
        assert_eq!(gz.void_branches(), [Branch::Zi, Branch::Chou]);
    }

    #[test]
    fn clash_is_diametric() {
        assert_eq!(Branch::Zi.clash(), Branch::Wu);
        assert_eq!(Branch::Chou.clash(), Branch::Wei);
        for b in ALL_BRANCHES {
            assert_eq!(b.clash().clash(), b);
        }
    }

    #[test]
    fn harm_is_symmetric() {
        for b in ALL_BRANCHES {
            assert_eq!(b.harm().harm(), b);
        }
    }

    #[test]
    fn parity_alternates() {
        assert!(Stem::Jia.is_yang());
        assert!(!Stem::Yi.is_yang());
        assert!(Branch::Zi.is_yang());
        assert!(!Branch::Hai.is_yang());
        // A sexagenary pair never mixes parities.
        for i in 0..60 {
            let gz = GanZhi::from_index(i);
            assert_eq!(gz.stem.is_yang(), gz.branch.is_yang());
        }
    }

    #[test]
    fn horse_triads() {
        assert_eq!(Branch::Zi.horse(), Branch::Yin);
        assert_eq!(Branch::Wu.horse(), Branch::Shen);
        assert_eq!(Branch::You.horse(), Branch::Hai);
        assert_eq!(Branch::Mao.horse(), Branch::Si);
    }
}
