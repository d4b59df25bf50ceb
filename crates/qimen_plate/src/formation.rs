//! Named stem/gate formations (geju) detected on an assembled plate.

use qimen_base::{ElementRelation, Gate, OUTER_PALACES, Palace, Polarity, Stem};

use crate::earth::EarthPlate;

/// Recognized formation patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationKind {
    /// 青龙返首: Bing over Wu.
    QingLongFanShou,
    /// 飞鸟跌穴: Wu over Bing.
    FeiNiaoDieXue,
    /// 青龙逃走: Yi over Xin.
    QingLongTaoZou,
    /// 白虎猖狂: Xin over Yi.
    BaiHuChangKuang,
    /// 朱雀投江: Ding over Gui.
    ZhuQueTouJiang,
    /// 腾蛇夭矫: Gui over Ding.
    TengSheYaoJiao,
    /// 太白入荧: Geng over Bing.
    TaiBaiRuYing,
    /// 荧入太白: Bing over Geng.
    YingRuTaiBai,
    /// 三奇升殿: a qi stem enthroned at its honored palace.
    SanQiShengDian,
    /// 天遁: Life gate with heavenly Bing.
    TianDun,
    /// 地遁: Open gate with heavenly Yi.
    DiDun,
    /// 人遁: Rest gate with heavenly Ding.
    RenDun,
    /// 玉女守门: Ding at the duty gate's falling palace.
    YuNuShouMen,
    /// 门迫: gate element overcoming its palace element.
    MenPo,
    /// 六仪击刑: a yi stem striking its punishment palace.
    LiuYiJiXing,
    /// 伏吟: heaven plate frozen over the earth plate.
    FuYin,
    /// 反吟: heaven plate flipped against the earth plate.
    FanYin,
}

impl FormationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::QingLongFanShou => "青龙返首",
            Self::FeiNiaoDieXue => "飞鸟跌穴",
            Self::QingLongTaoZou => "青龙逃走",
            Self::BaiHuChangKuang => "白虎猖狂",
            Self::ZhuQueTouJiang => "朱雀投江",
            Self::TengSheYaoJiao => "腾蛇夭矫",
            Self::TaiBaiRuYing => "太白入荧",
            Self::YingRuTaiBai => "荧入太白",
            Self::SanQiShengDian => "三奇升殿",
            Self::TianDun => "天遁",
            Self::DiDun => "地遁",
            Self::RenDun => "人遁",
            Self::YuNuShouMen => "玉女守门",
            Self::MenPo => "门迫",
            Self::LiuYiJiXing => "六仪击刑",
            Self::FuYin => "伏吟",
            Self::FanYin => "反吟",
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::QingLongFanShou
            | Self::FeiNiaoDieXue
            | Self::SanQiShengDian
            | Self::TianDun
            | Self::DiDun
            | Self::RenDun
            | Self::YuNuShouMen => Polarity::Favorable,
            Self::QingLongTaoZou
            | Self::BaiHuChangKuang
            | Self::ZhuQueTouJiang
            | Self::TengSheYaoJiao
            | Self::TaiBaiRuYing
            | Self::YingRuTaiBai
            | Self::MenPo
            | Self::LiuYiJiXing
            | Self::FuYin
            | Self::FanYin => Polarity::Unfavorable,
        }
    }
}

/// A detected formation and the palaces it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    pub kind: FormationKind,
    pub palaces: Vec<Palace>,
}

/// Heaven-over-earth stem pairings with fixed names.
const STEM_PAIRS: [(Stem, Stem, FormationKind); 8] = [
    (Stem::Bing, Stem::Wu, FormationKind::QingLongFanShou),
    (Stem::Wu, Stem::Bing, FormationKind::FeiNiaoDieXue),
    (Stem::Yi, Stem::Xin, FormationKind::QingLongTaoZou),
    (Stem::Xin, Stem::Yi, FormationKind::BaiHuChangKuang),
    (Stem::Ding, Stem::Gui, FormationKind::ZhuQueTouJiang),
    (Stem::Gui, Stem::Ding, FormationKind::TengSheYaoJiao),
    (Stem::Geng, Stem::Bing, FormationKind::TaiBaiRuYing),
    (Stem::Bing, Stem::Geng, FormationKind::YingRuTaiBai),
];

/// Punishment palace of each yi stem (liuyi jixing).
const PUNISHMENTS: [(Stem, Palace); 6] = [
    (Stem::Wu, Palace::Zhen),
    (Stem::Ji, Palace::Kun),
    (Stem::Geng, Palace::Gen),
    (Stem::Xin, Palace::Li),
    (Stem::Ren, Palace::Xun),
    (Stem::Gui, Palace::Xun),
];

/// Scans an assembled plate for named formations.
pub fn detect_formations(
    heaven: &[Stem; 9],
    earth: &EarthPlate,
    gates: &[Option<Gate>; 9],
    falling: Palace,
) -> Vec<Formation> {
    let mut found = Vec::new();

    for palace in OUTER_PALACES {
        let h = heaven[palace.index() as usize];
        let e = earth.stem_at(palace);
        for (over, under, kind) in STEM_PAIRS {
            if h == over && e == under {
                found.push(Formation {
                    kind,
                    palaces: vec![palace],
                });
            }
        }
    }

    // 三奇升殿: Yi at Zhen, Bing at Li, Ding at Dui.
    let enthroned: Vec<Palace> = [
        (Stem::Yi, Palace::Zhen),
        (Stem::Bing, Palace::Li),
        (Stem::Ding, Palace::Dui),
    ]
    .into_iter()
    .filter(|(stem, palace)| heaven[palace.index() as usize] == *stem)
    .map(|(_, palace)| palace)
    .collect();
    if !enthroned.is_empty() {
        found.push(Formation {
            kind: FormationKind::SanQiShengDian,
            palaces: enthroned,
        });
    }

    // The three escapes: a qi stem riding its partner gate.
    for palace in OUTER_PALACES {
        let h = heaven[palace.index() as usize];
        let kind = match (gates[palace.index() as usize], h) {
            (Some(Gate::Life), Stem::Bing) => Some(FormationKind::TianDun),
            (Some(Gate::Open), Stem::Yi) => Some(FormationKind::DiDun),
            (Some(Gate::Rest), Stem::Ding) => Some(FormationKind::RenDun),
            _ => None,
        };
        if let Some(kind) = kind {
            found.push(Formation {
                kind,
                palaces: vec![palace],
            });
        }
    }

    // 玉女守门.
    if !falling.is_center() && heaven[falling.index() as usize] == Stem::Ding {
        found.push(Formation {
            kind: FormationKind::YuNuShouMen,
            palaces: vec![falling],
        });
    }

    // 门迫.
    let forced: Vec<Palace> = OUTER_PALACES
        .into_iter()
        .filter(|palace| {
            gates[palace.index() as usize].is_some_and(|gate| {
                gate.element().relation_to(palace.element()) == ElementRelation::Overcomes
            })
        })
        .collect();
    if !forced.is_empty() {
        found.push(Formation {
            kind: FormationKind::MenPo,
            palaces: forced,
        });
    }

    // 六仪击刑.
    let struck: Vec<Palace> = PUNISHMENTS
        .into_iter()
        .filter(|(stem, palace)| heaven[palace.index() as usize] == *stem)
        .map(|(_, palace)| palace)
        .collect();
    if !struck.is_empty() {
        found.push(Formation {
            kind: FormationKind::LiuYiJiXing,
            palaces: struck,
        });
    }

    // Whole-plate echoes.
    let fu_yin = OUTER_PALACES
        .into_iter()
        .all(|p| heaven[p.index() as usize] == earth.stem_at(p));
    if fu_yin {
        found.push(Formation {
            kind: FormationKind::FuYin,
            palaces: OUTER_PALACES.to_vec(),
        });
    }
    let fan_yin = OUTER_PALACES
        .into_iter()
        .all(|p| heaven[p.index() as usize] == earth.stem_at(p.opposite()));
    if fan_yin {
        found.push(Formation {
            kind: FormationKind::FanYin,
            palaces: OUTER_PALACES.to_vec(),
        });
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use qimen_calendar::Dun;

    fn frozen_heaven(earth: &EarthPlate) -> [Stem; 9] {
        let mut heaven = [Stem::Wu; 9];
        for p in qimen_base::ALL_PALACES {
            heaven[p.index() as usize] = earth.stem_at(p);
        }
        heaven
    }

    #[test]
    fn frozen_plate_is_fu_yin() {
        let earth = EarthPlate::assemble(Dun::Yang, 1);
        let heaven = frozen_heaven(&earth);
        let gates = [None; 9];
        let found = detect_formations(&heaven, &earth, &gates, Palace::Kan);
        assert!(found.iter().any(|f| f.kind == FormationKind::FuYin));
        assert!(!found.iter().any(|f| f.kind == FormationKind::FanYin));
    }

    #[test]
    fn stem_pair_detection() {
        let earth = EarthPlate::assemble(Dun::Yang, 1);
        // Earth has Wu at Kan; put Bing on top of it.
        let mut heaven = frozen_heaven(&earth);
        heaven[Palace::Kan.index() as usize] = Stem::Bing;
        let gates = [None; 9];
        let found = detect_formations(&heaven, &earth, &gates, Palace::Li);
        let dragon = found
            .iter()
            .find(|f| f.kind == FormationKind::QingLongFanShou)
            .expect("qinglong fanshou");
        assert_eq!(dragon.palaces, vec![Palace::Kan]);
    }

    #[test]
    fn enthroned_qi_stems() {
        let earth = EarthPlate::assemble(Dun::Yang, 4);
        let mut heaven = frozen_heaven(&earth);
        heaven[Palace::Zhen.index() as usize] = Stem::Yi;
        heaven[Palace::Li.index() as usize] = Stem::Bing;
        let gates = [None; 9];
        let found = detect_formations(&heaven, &earth, &gates, Palace::Kan);
        let sheng = found
            .iter()
            .find(|f| f.kind == FormationKind::SanQiShengDian)
            .expect("shengdian");
        assert_eq!(sheng.palaces, vec![Palace::Zhen, Palace::Li]);
    }

    #[test]
    fn gate_forcing() {
        let earth = EarthPlate::assemble(Dun::Yang, 1);
        let heaven = frozen_heaven(&earth);
        let mut gates = [None; 9];
        // Fright gate (metal) at Zhen (wood): metal overcomes wood.
        gates[Palace::Zhen.index() as usize] = Some(Gate::Fright);
        let found = detect_formations(&heaven, &earth, &gates, Palace::Kan);
        let po = found
            .iter()
            .find(|f| f.kind == FormationKind::MenPo)
            .expect("menpo");
        assert!(po.palaces.contains(&Palace::Zhen));
    }

    #[test]
    fn escape_patterns() {
        let earth = EarthPlate::assemble(Dun::Yin, 5);
        let mut heaven = frozen_heaven(&earth);
        heaven[Palace::Gen.index() as usize] = Stem::Bing;
        let mut gates = [None; 9];
        gates[Palace::Gen.index() as usize] = Some(Gate::Life);
        let found = detect_formations(&heaven, &earth, &gates, Palace::Kan);
        assert!(found.iter().any(|f| f.kind == FormationKind::TianDun));
    }

    #[test]
    fn punishment_strikes() {
        let earth = EarthPlate::assemble(Dun::Yang, 2);
        let mut heaven = frozen_heaven(&earth);
        heaven[Palace::Zhen.index() as usize] = Stem::Wu;
        let gates = [None; 9];
        let found = detect_formations(&heaven, &earth, &gates, Palace::Kan);
        let jixing = found
            .iter()
            .find(|f| f.kind == FormationKind::LiuYiJiXing)
            .expect("jixing");
        assert_eq!(jixing.palaces, vec![Palace::Zhen]);
    }
}
