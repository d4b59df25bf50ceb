//! Five-element (wuxing) cycles, seasonal strength, and polarity.
//!
//! The generation and control cycles are universal conventions; the
//! seasonal strength table maps the month branch's season element
//! against a queried element into one of five ordered states
//! (wang > xiang > xiu > qiu > si).

use crate::ganzhi::Branch;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WuXing {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation-cycle order.
pub const ALL_ELEMENTS: [WuXing; 5] = [
    WuXing::Wood,
    WuXing::Fire,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Water,
];

impl WuXing {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates (sheng cycle).
    pub const fn generates(self) -> WuXing {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes (ke cycle).
    pub const fn overcomes(self) -> WuXing {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Relation of `self` toward `other`.
    pub const fn relation_to(self, other: WuXing) -> ElementRelation {
        if self as u8 == other as u8 {
            ElementRelation::Same
        } else if self.generates() as u8 == other as u8 {
            ElementRelation::Generates
        } else if other.generates() as u8 == self as u8 {
            ElementRelation::GeneratedBy
        } else if self.overcomes() as u8 == other as u8 {
            ElementRelation::Overcomes
        } else {
            ElementRelation::OvercomeBy
        }
    }
}

/// Directed five-element relationship between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRelation {
    Same,
    Generates,
    GeneratedBy,
    Overcomes,
    OvercomeBy,
}

/// Seasonal strength states, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalState {
    Thriving,
    Supported,
    Resting,
    Trapped,
    Dead,
}

impl SeasonalState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thriving => "旺",
            Self::Supported => "相",
            Self::Resting => "休",
            Self::Trapped => "囚",
            Self::Dead => "死",
        }
    }

    /// Scoring weight contributed by this state.
    pub const fn weight(self) -> i32 {
        match self {
            Self::Thriving => 20,
            Self::Supported => 10,
            Self::Resting => 0,
            Self::Trapped => -10,
            Self::Dead => -20,
        }
    }

    /// Ordinal rank for dominance comparison (higher is stronger).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Thriving => 4,
            Self::Supported => 3,
            Self::Resting => 2,
            Self::Trapped => 1,
            Self::Dead => 0,
        }
    }
}

/// Favorability classification shared by formations, spirits, and deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Favorable,
    Unfavorable,
    Neutral,
}

/// Season element commanded by a month branch.
pub const fn season_element(month_branch: Branch) -> WuXing {
    month_branch.element()
}

/// Seasonal strength of `element` during the month of `month_branch`.
pub const fn seasonal_state(element: WuXing, month_branch: Branch) -> SeasonalState {
    let season = season_element(month_branch);
    if element as u8 == season as u8 {
        SeasonalState::Thriving
    } else if season.generates() as u8 == element as u8 {
        SeasonalState::Supported
    } else if element.generates() as u8 == season as u8 {
        SeasonalState::Resting
    } else if element.overcomes() as u8 == season as u8 {
        SeasonalState::Trapped
    } else {
        SeasonalState::Dead
    }
}

/// Storage (tomb) branch of an element.
pub const fn storage_branch(element: WuXing) -> Branch {
    match element {
        WuXing::Wood => Branch::Wei,
        WuXing::Fire => Branch::Xu,
        WuXing::Metal => Branch::Chou,
        WuXing::Water | WuXing::Earth => Branch::Chen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_cycle_closes() {
        let mut e = WuXing::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, WuXing::Wood);
    }

    #[test]
    fn control_cycle_closes() {
        let mut e = WuXing::Wood;
        for _ in 0..5 {
            e = e.overcomes();
        }
        assert_eq!(e, WuXing::Wood);
    }

    #[test]
    fn relations_exhaustive() {
        assert_eq!(WuXing::Wood.relation_to(WuXing::Wood), ElementRelation::Same);
        assert_eq!(
            WuXing::Wood.relation_to(WuXing::Fire),
            ElementRelation::Generates
        );
        assert_eq!(
            WuXing::Fire.relation_to(WuXing::Wood),
            ElementRelation::GeneratedBy
        );
        assert_eq!(
            WuXing::Wood.relation_to(WuXing::Earth),
            ElementRelation::Overcomes
        );
        assert_eq!(
            WuXing::Earth.relation_to(WuXing::Wood),
            ElementRelation::OvercomeBy
        );
    }

    #[test]
    fn spring_states() {
        // Mao month: wood commands.
        assert_eq!(
            seasonal_state(WuXing::Wood, Branch::Mao),
            SeasonalState::Thriving
        );
        assert_eq!(
            seasonal_state(WuXing::Fire, Branch::Mao),
            SeasonalState::Supported
        );
        assert_eq!(
            seasonal_state(WuXing::Water, Branch::Mao),
            SeasonalState::Resting
        );
        assert_eq!(
            seasonal_state(WuXing::Metal, Branch::Mao),
            SeasonalState::Trapped
        );
        assert_eq!(
            seasonal_state(WuXing::Earth, Branch::Mao),
            SeasonalState::Dead
        );
    }

    #[test]
    fn state_ranks_strictly_ordered() {
        assert!(SeasonalState::Thriving.rank() > SeasonalState::Supported.rank());
        assert!(SeasonalState::Supported.rank() > SeasonalState::Resting.rank());
        assert!(SeasonalState::Resting.rank() > SeasonalState::Trapped.rank());
        assert!(SeasonalState::Trapped.rank() > SeasonalState::Dead.rank());
    }

    #[test]
    fn storage_branches() {
        assert_eq!(storage_branch(WuXing::Wood), Branch::Wei);
        assert_eq!(storage_branch(WuXing::Fire), Branch::Xu);
        assert_eq!(storage_branch(WuXing::Metal), Branch::Chou);
        assert_eq!(storage_branch(WuXing::Water), Branch::Chen);
    }
}
