//! Category reference (yongshen) scoring against a concrete plate.

use qimen_base::{
    Deity, ElementRelation, Gate, OUTER_PALACES, Palace, Polarity, Star, Stem, seasonal_state,
    storage_branch,
};
use qimen_plate::Plate;

use crate::yongshen_types::{
    Category, CategoryRefs, HostGuest, RefTarget, ReferenceScore, Verdict,
};

/// Reference tables per category, primary first.
pub const fn refs_for(category: Category) -> CategoryRefs {
    match category {
        Category::Career => CategoryRefs {
            primary: &[RefTarget::Gate(Gate::Open), RefTarget::Deity(Deity::ZhiFu)],
            secondary: &[RefTarget::Star(Star::Xin)],
        },
        Category::Wealth => CategoryRefs {
            primary: &[RefTarget::Gate(Gate::Life), RefTarget::EarthStem(Stem::Wu)],
            secondary: &[RefTarget::Star(Star::Ren), RefTarget::Deity(Deity::LiuHe)],
        },
        Category::Marriage => CategoryRefs {
            primary: &[
                RefTarget::Deity(Deity::LiuHe),
                RefTarget::Stem(Stem::Yi),
                RefTarget::Stem(Stem::Geng),
            ],
            secondary: &[RefTarget::Gate(Gate::Rest)],
        },
        Category::Health => CategoryRefs {
            primary: &[RefTarget::Star(Star::Rui), RefTarget::Gate(Gate::Life)],
            secondary: &[RefTarget::Stem(Stem::Yi)],
        },
        Category::Travel => CategoryRefs {
            primary: &[RefTarget::Gate(Gate::Open), RefTarget::Deity(Deity::JiuTian)],
            secondary: &[RefTarget::Star(Star::Chong)],
        },
        Category::Study => CategoryRefs {
            primary: &[RefTarget::Star(Star::Fu), RefTarget::Stem(Stem::Ding)],
            secondary: &[RefTarget::Gate(Gate::Brilliance)],
        },
        Category::Lawsuit => CategoryRefs {
            primary: &[RefTarget::Gate(Gate::Fright), RefTarget::Deity(Deity::BaiHu)],
            secondary: &[RefTarget::Stem(Stem::Geng)],
        },
        Category::General => CategoryRefs {
            primary: &[RefTarget::Deity(Deity::ZhiFu), RefTarget::Gate(Gate::Open)],
            secondary: &[
                RefTarget::Stem(Stem::Yi),
                RefTarget::Stem(Stem::Bing),
                RefTarget::Stem(Stem::Ding),
            ],
        },
    }
}

/// Palace a reference symbol occupies on the plate, if it appears.
pub fn target_palace(plate: &Plate, target: RefTarget) -> Option<Palace> {
    match target {
        RefTarget::Gate(gate) => OUTER_PALACES
            .into_iter()
            .find(|p| plate.gate_at(*p) == Some(gate)),
        RefTarget::Star(star) => OUTER_PALACES
            .into_iter()
            .find(|p| plate.star_at(*p) == Some(star)),
        RefTarget::Stem(stem) => plate.palace_of_heaven_stem(stem),
        RefTarget::EarthStem(stem) => Some(plate.palace_of_earth_stem(stem)),
        RefTarget::Deity(deity) => OUTER_PALACES
            .into_iter()
            .find(|p| plate.deity_at(*p) == Some(deity)),
    }
}

/// Weight of the reference element's stance toward the day stem.
const fn day_relation_weight(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::Same => 5,
        ElementRelation::Generates => 8,
        ElementRelation::GeneratedBy => -3,
        ElementRelation::Overcomes => -10,
        ElementRelation::OvercomeBy => -5,
    }
}

/// Scores one reference on the plate (0-100), or None when the symbol
/// does not appear this hour.
///
/// Starts from a neutral 50, then adjusts for seasonal strength, the
/// palace's void and storage condition, the harm relation against the
/// day branch, the stance toward the day stem, and any formation
/// touching the palace.
pub fn reference_score(plate: &Plate, target: RefTarget) -> Option<ReferenceScore> {
    let palace = target_palace(plate, target)?;
    let element = target.element();
    let month_branch = plate.pillars.month.branch;
    let day = plate.pillars.day;

    let state = seasonal_state(element, month_branch);
    let void = plate.is_void(palace);
    let storage = palace.anchor_branches().contains(&storage_branch(element));
    let clashed = palace.anchor_branches().contains(&day.branch.harm());
    let day_relation = element.relation_to(day.stem.element());
    let formations: Vec<_> = plate
        .formations
        .iter()
        .filter(|f| f.palaces.contains(&palace))
        .map(|f| f.kind)
        .collect();

    let mut score = 50i32 + state.weight();
    if void {
        score -= 10;
    }
    if storage {
        score -= 8;
    }
    if clashed {
        score -= 6;
    }
    score += day_relation_weight(day_relation);
    for kind in &formations {
        score += match kind.polarity() {
            Polarity::Favorable => 8,
            Polarity::Unfavorable => -8,
            Polarity::Neutral => 0,
        };
    }

    Some(ReferenceScore {
        target,
        palace,
        state,
        void,
        storage,
        clashed,
        day_relation,
        formations,
        score: f64::from(score.clamp(0, 100)),
    })
}

/// Scores every reference of a category that appears on the plate.
pub fn score_references(plate: &Plate, category: Category) -> Vec<ReferenceScore> {
    let refs = refs_for(category);
    refs.primary
        .iter()
        .chain(refs.secondary.iter())
        .filter_map(|t| reference_score(plate, *t))
        .collect()
}

/// Supplementary year-command reference: the year stem scored as a
/// heaven-plate symbol. A Jia year resolves through its decade's hiding
/// stem.
pub fn year_command(plate: &Plate) -> Option<ReferenceScore> {
    let year = plate.pillars.year;
    let stem = if year.stem == Stem::Jia {
        year.hiding_stem()
    } else {
        year.stem
    };
    reference_score(plate, RefTarget::Stem(stem))
}

/// Host/guest contest: the day stem's palace against the hour stem's
/// palace, compared by seasonal strength and element stance. Jia is
/// resolved through its decade's hiding stem.
pub fn host_guest(plate: &Plate) -> HostGuest {
    let day = plate.pillars.day;
    let hour = plate.pillars.hour;
    let host_stem = if day.stem == Stem::Jia {
        day.hiding_stem()
    } else {
        day.stem
    };
    let guest_stem = if hour.stem == Stem::Jia {
        hour.hiding_stem()
    } else {
        hour.stem
    };

    let host_palace = plate.palace_of_earth_stem(host_stem);
    let guest_palace = plate.palace_of_earth_stem(guest_stem);
    let month_branch = plate.pillars.month.branch;
    let host_state = seasonal_state(day.stem.element(), month_branch);
    let guest_state = seasonal_state(hour.stem.element(), month_branch);

    let verdict = if host_state.rank() > guest_state.rank() {
        Verdict::HostPrevails
    } else if host_state.rank() < guest_state.rank() {
        Verdict::GuestPrevails
    } else {
        match day.stem.element().relation_to(hour.stem.element()) {
            ElementRelation::Overcomes => Verdict::HostPrevails,
            ElementRelation::OvercomeBy => Verdict::GuestPrevails,
            _ => Verdict::Balanced,
        }
    };

    HostGuest {
        host_palace,
        guest_palace,
        host_state,
        guest_state,
        verdict,
    }
}
