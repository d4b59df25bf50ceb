//! Shensha (spirit) overlays: auxiliary stars keyed on the day, month
//! and year pillars, each anchored to a palace and carrying a fixed
//! scoring weight.

use qimen_base::{Branch, Palace, Polarity, Stem, palace_of_branch};
use qimen_plate::Plate;

/// The recognized spirits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shensha {
    /// 天乙贵人: the noble helper.
    TianYiGuiRen,
    /// 禄神: the emolument star.
    LuShen,
    /// 文昌: the scholar star.
    WenChang,
    /// 驿马: the post horse.
    YiMa,
    /// 桃花: the peach blossom.
    TaoHua,
    /// 华盖: the canopy.
    HuaGai,
    /// 将星: the general star.
    JiangXing,
    /// 月德: monthly virtue.
    YueDe,
    /// 天德: heavenly virtue.
    TianDe,
    /// 劫煞: the robbery sha.
    JieSha,
    /// 灾煞: the calamity sha.
    ZaiSha,
    /// 孤辰: the lone chen.
    GuChen,
    /// 寡宿: the widow su.
    GuaSu,
}

/// All spirits in evaluation order.
pub const ALL_SPIRITS: [Shensha; 13] = [
    Shensha::TianYiGuiRen,
    Shensha::LuShen,
    Shensha::WenChang,
    Shensha::YiMa,
    Shensha::TaoHua,
    Shensha::HuaGai,
    Shensha::JiangXing,
    Shensha::YueDe,
    Shensha::TianDe,
    Shensha::JieSha,
    Shensha::ZaiSha,
    Shensha::GuChen,
    Shensha::GuaSu,
];

impl Shensha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianYiGuiRen => "天乙贵人",
            Self::LuShen => "禄神",
            Self::WenChang => "文昌",
            Self::YiMa => "驿马",
            Self::TaoHua => "桃花",
            Self::HuaGai => "华盖",
            Self::JiangXing => "将星",
            Self::YueDe => "月德",
            Self::TianDe => "天德",
            Self::JieSha => "劫煞",
            Self::ZaiSha => "灾煞",
            Self::GuChen => "孤辰",
            Self::GuaSu => "寡宿",
        }
    }

    /// Scoring weight. The neutral observers contribute nothing.
    pub const fn weight(self) -> i32 {
        match self {
            Self::TianYiGuiRen => 8,
            Self::YueDe | Self::TianDe => 6,
            Self::LuShen => 5,
            Self::WenChang => 4,
            Self::YiMa | Self::JiangXing => 3,
            Self::TaoHua | Self::HuaGai => 0,
            Self::GuChen | Self::GuaSu => -4,
            Self::JieSha | Self::ZaiSha => -5,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self.weight() {
            w if w > 0 => Polarity::Favorable,
            0 => Polarity::Neutral,
            _ => Polarity::Unfavorable,
        }
    }
}

/// A present spirit and the palace its marker anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiritHit {
    pub spirit: Shensha,
    pub palace: Palace,
}

/// Marker a spirit is keyed on: a branch or a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Stem(Stem),
    Branch(Branch),
}

/// The two noble-helper branches of a day stem.
const fn noble_branches(stem: Stem) -> [Branch; 2] {
    match stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Ren | Stem::Gui => [Branch::Si, Branch::Mao],
        Stem::Xin => [Branch::Wu, Branch::Yin],
    }
}

/// Emolument branch of a day stem.
const fn lu_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Yin,
        Stem::Yi => Branch::Mao,
        Stem::Bing | Stem::Wu => Branch::Si,
        Stem::Ding | Stem::Ji => Branch::Wu,
        Stem::Geng => Branch::Shen,
        Stem::Xin => Branch::You,
        Stem::Ren => Branch::Hai,
        Stem::Gui => Branch::Zi,
    }
}

/// Scholar branch of a day stem.
const fn wenchang_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Si,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Shen,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Hai,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Yin,
        Stem::Gui => Branch::Mao,
    }
}

/// Peach-blossom branch of the day branch's triad.
const fn taohua_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::You,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Mao,
        Branch::Si | Branch::You | Branch::Chou => Branch::Wu,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Zi,
    }
}

/// Canopy branch (the triad's storage).
const fn huagai_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::Chen,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Xu,
        Branch::Si | Branch::You | Branch::Chou => Branch::Chou,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Wei,
    }
}

/// General-star branch (the triad's pivot).
const fn jiangxing_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::Zi,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Wu,
        Branch::Si | Branch::You | Branch::Chou => Branch::You,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Mao,
    }
}

/// Robbery-sha branch of the triad.
const fn jiesha_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::Si,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Hai,
        Branch::Si | Branch::You | Branch::Chou => Branch::Yin,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Shen,
    }
}

/// Calamity-sha branch of the triad.
const fn zaisha_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::Wu,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Zi,
        Branch::Si | Branch::You | Branch::Chou => Branch::Mao,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::You,
    }
}

/// Lone-chen branch of the year branch's season group.
const fn guchen_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Hai | Branch::Zi | Branch::Chou => Branch::Yin,
        Branch::Yin | Branch::Mao | Branch::Chen => Branch::Si,
        Branch::Si | Branch::Wu | Branch::Wei => Branch::Shen,
        Branch::Shen | Branch::You | Branch::Xu => Branch::Hai,
    }
}

/// Widow-su branch of the year branch's season group.
const fn guasu_branch(branch: Branch) -> Branch {
    match branch {
        Branch::Hai | Branch::Zi | Branch::Chou => Branch::Xu,
        Branch::Yin | Branch::Mao | Branch::Chen => Branch::Chou,
        Branch::Si | Branch::Wu | Branch::Wei => Branch::Chen,
        Branch::Shen | Branch::You | Branch::Xu => Branch::Wei,
    }
}

/// Monthly-virtue stem of a month branch.
const fn yuede_stem(branch: Branch) -> Stem {
    match branch {
        Branch::Yin | Branch::Wu | Branch::Xu => Stem::Bing,
        Branch::Shen | Branch::Zi | Branch::Chen => Stem::Ren,
        Branch::Hai | Branch::Mao | Branch::Wei => Stem::Jia,
        Branch::Si | Branch::You | Branch::Chou => Stem::Geng,
    }
}

/// Heavenly-virtue marker of a month branch (a stem for some months, a
/// branch for others).
const fn tiande_marker(branch: Branch) -> Marker {
    match branch {
        Branch::Yin => Marker::Stem(Stem::Ding),
        Branch::Mao => Marker::Branch(Branch::Shen),
        Branch::Chen => Marker::Stem(Stem::Ren),
        Branch::Si => Marker::Stem(Stem::Xin),
        Branch::Wu => Marker::Branch(Branch::Hai),
        Branch::Wei => Marker::Stem(Stem::Jia),
        Branch::Shen => Marker::Stem(Stem::Gui),
        Branch::You => Marker::Branch(Branch::Yin),
        Branch::Xu => Marker::Stem(Stem::Bing),
        Branch::Hai => Marker::Stem(Stem::Yi),
        Branch::Zi => Marker::Branch(Branch::Si),
        Branch::Chou => Marker::Stem(Stem::Geng),
    }
}

fn marker_palace(plate: &Plate, marker: Marker) -> Option<Palace> {
    match marker {
        Marker::Branch(b) => Some(palace_of_branch(b)),
        Marker::Stem(s) => plate.palace_of_heaven_stem(s),
    }
}

/// Spirits present on the plate.
///
/// Each rule's markers come from its keyed pillar; branch markers
/// anchor through the fixed branch-to-palace table, stem markers by
/// scanning the heaven plate. A marker whose stem never shows on the
/// plate is dropped. The noble helper carries two markers and can
/// contribute two entries.
pub fn active_spirits(plate: &Plate) -> Vec<SpiritHit> {
    let day = plate.pillars.day;
    let month = plate.pillars.month;
    let year = plate.pillars.year;

    let mut markers: Vec<(Shensha, Vec<Marker>)> = Vec::with_capacity(ALL_SPIRITS.len());
    markers.push((
        Shensha::TianYiGuiRen,
        noble_branches(day.stem)
            .into_iter()
            .map(Marker::Branch)
            .collect(),
    ));
    markers.push((Shensha::LuShen, vec![Marker::Branch(lu_branch(day.stem))]));
    markers.push((
        Shensha::WenChang,
        vec![Marker::Branch(wenchang_branch(day.stem))],
    ));
    markers.push((Shensha::YiMa, vec![Marker::Branch(day.branch.horse())]));
    markers.push((
        Shensha::TaoHua,
        vec![Marker::Branch(taohua_branch(day.branch))],
    ));
    markers.push((
        Shensha::HuaGai,
        vec![Marker::Branch(huagai_branch(day.branch))],
    ));
    markers.push((
        Shensha::JiangXing,
        vec![Marker::Branch(jiangxing_branch(day.branch))],
    ));
    markers.push((
        Shensha::YueDe,
        vec![Marker::Stem(yuede_stem(month.branch))],
    ));
    markers.push((Shensha::TianDe, vec![tiande_marker(month.branch)]));
    markers.push((
        Shensha::JieSha,
        vec![Marker::Branch(jiesha_branch(day.branch))],
    ));
    markers.push((
        Shensha::ZaiSha,
        vec![Marker::Branch(zaisha_branch(day.branch))],
    ));
    markers.push((
        Shensha::GuChen,
        vec![Marker::Branch(guchen_branch(year.branch))],
    ));
    markers.push((
        Shensha::GuaSu,
        vec![Marker::Branch(guasu_branch(year.branch))],
    ));

    let mut hits = Vec::new();
    for (spirit, ms) in markers {
        for marker in ms {
            if let Some(palace) = marker_palace(plate, marker) {
                hits.push(SpiritHit { spirit, palace });
            }
        }
    }
    hits
}

/// Net spirit weight of a set of hits.
pub fn spirit_score(hits: &[SpiritHit]) -> i32 {
    hits.iter().map(|h| h.spirit.weight()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qimen_base::GanZhi;
    use qimen_calendar::{Dun, FourPillars};
    use qimen_plate::{PlateKind, build_plate};

    fn plate_with_hour(day: GanZhi, month: GanZhi, hour: GanZhi) -> Plate {
        let pillars = FourPillars {
            year: GanZhi::from_index(0),
            month,
            day,
            hour,
        };
        build_plate(pillars, Dun::Yang, 1, PlateKind::Rotating)
    }

    #[test]
    fn noble_helper_anchors_both_branches() {
        // Jia day: nobles at Chou and Wei, anchoring Gen and Kun.
        let day = GanZhi::new(Stem::Jia, Branch::Zi);
        let month = GanZhi::new(Stem::Bing, Branch::Yin);
        let hour = GanZhi::new(Stem::Yi, Branch::Chou);
        let plate = plate_with_hour(day, month, hour);
        let hits = active_spirits(&plate);
        let nobles: Vec<Palace> = hits
            .iter()
            .filter(|h| h.spirit == Shensha::TianYiGuiRen)
            .map(|h| h.palace)
            .collect();
        assert_eq!(nobles, vec![Palace::Gen, Palace::Kun]);
    }

    #[test]
    fn branch_spirits_present_whatever_the_hour() {
        // Jiazi day and a Jiazi hour: the emolument branch is Yin, the
        // post horse is Yin, neither matches the hour, both still land.
        let day = GanZhi::new(Stem::Jia, Branch::Zi);
        let month = GanZhi::new(Stem::Bing, Branch::Yin);
        let hour = GanZhi::new(Stem::Jia, Branch::Zi);
        let plate = plate_with_hour(day, month, hour);
        let hits = active_spirits(&plate);
        let lu = hits
            .iter()
            .find(|h| h.spirit == Shensha::LuShen)
            .expect("emolument star");
        assert_eq!(lu.palace, Palace::Gen);
        assert!(hits.iter().any(|h| h.spirit == Shensha::YiMa));
        // All eleven branch-keyed rules resolve through the total
        // branch table; only the two virtue stems can drop out.
        assert!(hits.len() >= 12);
    }

    #[test]
    fn virtue_stems_scan_the_heaven_plate() {
        // Yin month: monthly virtue is Bing, somewhere on the plate.
        let day = GanZhi::new(Stem::Jia, Branch::Zi);
        let month = GanZhi::new(Stem::Bing, Branch::Yin);
        let hour = GanZhi::new(Stem::Bing, Branch::Yin);
        let plate = plate_with_hour(day, month, hour);
        let hits = active_spirits(&plate);
        let virtue = hits
            .iter()
            .find(|h| h.spirit == Shensha::YueDe)
            .expect("monthly virtue");
        assert_eq!(plate.heaven_stem(virtue.palace), Stem::Bing);
    }

    #[test]
    fn jia_virtue_is_dropped() {
        // Mao month: monthly virtue is Jia, which never shows on the
        // heaven plate, so the rule produces nothing.
        let day = GanZhi::new(Stem::Yi, Branch::Chou);
        let month = GanZhi::new(Stem::Ding, Branch::Mao);
        let hour = GanZhi::new(Stem::Jia, Branch::Shen);
        let plate = plate_with_hour(day, month, hour);
        let hits = active_spirits(&plate);
        assert!(!hits.iter().any(|h| h.spirit == Shensha::YueDe));
    }

    #[test]
    fn sha_spirits_weigh_negative() {
        // Zi day: robbery sha at Si.
        let day = GanZhi::new(Stem::Geng, Branch::Zi);
        let month = GanZhi::new(Stem::Wu, Branch::Chen);
        let hour = GanZhi::new(Stem::Xin, Branch::Si);
        let plate = plate_with_hour(day, month, hour);
        let hits = active_spirits(&plate);
        let sha = hits
            .iter()
            .find(|h| h.spirit == Shensha::JieSha)
            .expect("robbery sha");
        assert_eq!(sha.palace, palace_of_branch(Branch::Si));
        assert!(Shensha::JieSha.weight() < 0);
    }

    #[test]
    fn lone_chen_keys_on_year_branch() {
        // Jiazi year (Zi group): lone chen at Yin.
        let day = GanZhi::new(Stem::Ji, Branch::You);
        let month = GanZhi::new(Stem::Geng, Branch::Wu);
        let hour = GanZhi::new(Stem::Bing, Branch::Yin);
        let plate = plate_with_hour(day, month, hour);
        let hits = active_spirits(&plate);
        let chen = hits
            .iter()
            .find(|h| h.spirit == Shensha::GuChen)
            .expect("lone chen");
        assert_eq!(chen.palace, palace_of_branch(Branch::Yin));
    }

    #[test]
    fn score_sums_weights() {
        let hits = [
            SpiritHit {
                spirit: Shensha::TianYiGuiRen,
                palace: Palace::Gen,
            },
            SpiritHit {
                spirit: Shensha::JieSha,
                palace: Palace::Li,
            },
        ];
        assert_eq!(spirit_score(&hits), 3);
    }
}
