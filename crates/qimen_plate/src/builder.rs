//! Chart assembly: derives the heaven plate and the gate, star and deity
//! rings from the four pillars and a resolved ju.

use qimen_base::{
    ALL_PALACES, DEITY_ORDER, Deity, GATE_ORDER, Gate, Palace, STAR_ORDER, Star, Stem,
    gate_at_home, palace_of_branch, rotate, star_at_home,
};
use qimen_calendar::{Dun, FourPillars};

use crate::earth::{EARTH_STEM_ORDER, EarthPlate};
use crate::formation::detect_formations;
use crate::plate::{Plate, PlateKind};

/// Position of a stem in the earth-plate flying order.
fn order_index(stem: Stem) -> usize {
    EARTH_STEM_ORDER
        .iter()
        .position(|s| *s == stem)
        .unwrap_or(0)
}

/// Destination of `steps` moves from `start` under a plate kind: the
/// rotating style walks the physical ring, the flying style walks the
/// Luoshu numbers.
fn advance(start: Palace, steps: u8, dun: Dun, kind: PlateKind) -> Palace {
    match kind {
        PlateKind::Rotating => rotate(start, steps, dun.clockwise()),
        PlateKind::Flying => {
            let step = match dun {
                Dun::Yang => i32::from(start.index()) + i32::from(steps),
                Dun::Yin => i32::from(start.index()) - i32::from(steps),
            };
            ALL_PALACES[step.rem_euclid(9) as usize]
        }
    }
}

/// Builds the full chart for one double-hour.
///
/// `ju` must already be resolved for the date (see
/// `qimen_calendar::ju_for_date`). The hour pillar drives everything:
/// its decade's hiding stem is the duty stem, and its branch counts the
/// steps the duty gate has walked from the duty palace.
pub fn build_plate(pillars: FourPillars, dun: Dun, ju: u8, kind: PlateKind) -> Plate {
    let earth = EarthPlate::assemble(dun, ju);
    let hour = pillars.hour;

    let duty_stem = hour.hiding_stem();
    let leader_palace = earth.palace_of(duty_stem);

    // Heaven plate: the duty stem rides the hour-stem's earth palace and
    // the rest follow in flying order.
    let hour_stem = if hour.stem == Stem::Jia {
        duty_stem
    } else {
        hour.stem
    };
    let ride_palace = earth.palace_of(hour_stem);
    let mut heaven = [Stem::Wu; 9];
    let lead = order_index(duty_stem);
    for i in 0..9u8 {
        let dest = advance(ride_palace, i, dun, kind);
        heaven[dest.index() as usize] = EARTH_STEM_ORDER[(lead + i as usize) % 9];
    }

    // Gate, star and deity rings all fall where the hour branch carries
    // the duty palace.
    let hour_steps = hour.branch.index();
    let falling_palace = advance(leader_palace.ring_anchor(), hour_steps, dun, kind);

    let duty_gate = gate_at_home(leader_palace);
    let mut gates: [Option<Gate>; 9] = [None; 9];
    for i in 0..8u8 {
        let dest = advance(falling_palace, i, dun, kind);
        gates[dest.index() as usize] =
            Some(GATE_ORDER[(duty_gate.index() as usize + i as usize) % 8]);
    }
    // The Center shows its borrowed palace's gate.
    gates[Palace::Zhong.index() as usize] = gates[Palace::Zhong.ring_anchor().index() as usize];

    let duty_star = star_at_home(leader_palace);
    let mut stars: [Option<Star>; 9] = [None; 9];
    for i in 0..8u8 {
        let dest = advance(falling_palace, i, dun, kind);
        stars[dest.index() as usize] =
            Some(STAR_ORDER[(duty_star.index() as usize + i as usize) % 8]);
    }
    // Tianqin always shows at the Center, riding with Tianrui.
    stars[Palace::Zhong.index() as usize] = Some(Star::Qin);

    let mut deities: [Option<Deity>; 9] = [None; 9];
    for (i, deity) in DEITY_ORDER.iter().enumerate() {
        let dest = advance(falling_palace, i as u8, dun, kind);
        deities[dest.index() as usize] = Some(*deity);
    }

    let hour_void = hour.void_branches();
    let day_void = pillars.day.void_branches();
    let mut void_flags = [false; 9];
    for branch in hour_void {
        void_flags[palace_of_branch(branch).index() as usize] = true;
    }

    let horse_palace = palace_of_branch(hour.branch.horse());

    let formations = detect_formations(&heaven, &earth, &gates, falling_palace);

    Plate {
        pillars,
        dun,
        ju,
        kind,
        earth,
        heaven,
        gates,
        stars,
        deities,
        leader_palace,
        falling_palace,
        hour_void,
        day_void,
        void_flags,
        horse_palace,
        formations,
    }
}
