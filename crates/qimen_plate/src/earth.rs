//! Earth plate: flying the six yi and three qi through the Luoshu.

use qimen_base::{ALL_PALACES, Palace, Stem};
use qimen_calendar::Dun;

/// Canonical stem order used when flying the earth plate. Jia is hidden
/// and never appears on the plate; Wu leads in its place.
pub const EARTH_STEM_ORDER: [Stem; 9] = [
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Ding,
    Stem::Bing,
    Stem::Yi,
];

/// One stem per palace, indexed by `Palace::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarthPlate {
    stems: [Stem; 9],
}

impl EarthPlate {
    /// Assembles the earth plate for a dun direction and ju number (1..=9).
    ///
    /// Wu starts at the Luoshu palace matching the ju number; the remaining
    /// stems follow in canonical order, walking the Luoshu numbers forward
    /// in yang dun and backward in yin dun.
    pub fn assemble(dun: Dun, ju: u8) -> EarthPlate {
        debug_assert!((1..=9).contains(&ju));
        let start = i32::from(ju) - 1;
        let mut stems = [Stem::Wu; 9];
        for (i, stem) in EARTH_STEM_ORDER.iter().enumerate() {
            let step = match dun {
                Dun::Yang => start + i as i32,
                Dun::Yin => start - i as i32,
            };
            let palace = ALL_PALACES[step.rem_euclid(9) as usize];
            stems[palace.index() as usize] = *stem;
        }
        EarthPlate { stems }
    }

    /// Stem occupying a palace.
    pub const fn stem_at(&self, palace: Palace) -> Stem {
        self.stems[palace.index() as usize]
    }

    /// Palace occupied by a stem. Jia resolves to the palace of Wu,
    /// the leader it hides behind.
    pub fn palace_of(&self, stem: Stem) -> Palace {
        let wanted = if stem == Stem::Jia { Stem::Wu } else { stem };
        for palace in ALL_PALACES {
            if self.stems[palace.index() as usize] == wanted {
                return palace;
            }
        }
        unreachable!("every non-Jia stem appears exactly once")
    }

    pub const fn stems(&self) -> &[Stem; 9] {
        &self.stems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yang_one_ju_places_wu_at_kan() {
        let earth = EarthPlate::assemble(Dun::Yang, 1);
        assert_eq!(earth.stem_at(Palace::Kan), Stem::Wu);
        assert_eq!(earth.stem_at(Palace::Kun), Stem::Ji);
        assert_eq!(earth.stem_at(Palace::Zhen), Stem::Geng);
        assert_eq!(earth.stem_at(Palace::Xun), Stem::Xin);
        assert_eq!(earth.stem_at(Palace::Zhong), Stem::Ren);
        assert_eq!(earth.stem_at(Palace::Qian), Stem::Gui);
        assert_eq!(earth.stem_at(Palace::Dui), Stem::Ding);
        assert_eq!(earth.stem_at(Palace::Gen), Stem::Bing);
        assert_eq!(earth.stem_at(Palace::Li), Stem::Yi);
    }

    #[test]
    fn yin_nine_ju_places_wu_at_li() {
        let earth = EarthPlate::assemble(Dun::Yin, 9);
        assert_eq!(earth.stem_at(Palace::Li), Stem::Wu);
        assert_eq!(earth.stem_at(Palace::Gen), Stem::Ji);
        assert_eq!(earth.stem_at(Palace::Dui), Stem::Geng);
    }

    #[test]
    fn every_stem_appears_once() {
        for dun in [Dun::Yang, Dun::Yin] {
            for ju in 1..=9u8 {
                let earth = EarthPlate::assemble(dun, ju);
                for stem in EARTH_STEM_ORDER {
                    assert_eq!(earth.stem_at(earth.palace_of(stem)), stem);
                }
            }
        }
    }

    #[test]
    fn jia_hides_behind_wu() {
        let earth = EarthPlate::assemble(Dun::Yang, 3);
        assert_eq!(earth.palace_of(Stem::Jia), earth.palace_of(Stem::Wu));
    }
}
