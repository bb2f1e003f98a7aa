use super::category::Category;
use crate::cards::rank::Rank;

/// Game family. Families differ only in how four of a kind is paid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Game {
    JacksOrBetter,
    BonusPoker,
    DoubleBonus,
    DoubleDoubleBonus,
}

impl Game {
    pub const fn all() -> [Self; 4] {
        [
            Self::JacksOrBetter,
            Self::BonusPoker,
            Self::DoubleBonus,
            Self::DoubleDoubleBonus,
        ]
    }

    /// sub-classify four of a kind by quad rank and, in double double
    /// bonus, by the rank of the fifth card
    pub fn quads(&self, quad: Rank, kicker: Rank) -> Category {
        let low = |r: Rank| matches!(r, Rank::Two | Rank::Three | Rank::Four);
        match self {
            Self::JacksOrBetter => Category::FourOfAKind,
            Self::DoubleDoubleBonus if quad == Rank::Ace && low(kicker) => {
                Category::FourAcesWithKicker
            }
            Self::DoubleDoubleBonus if low(quad) && (low(kicker) || kicker == Rank::Ace) => {
                Category::FourTwosThruFoursWithKicker
            }
            Self::BonusPoker | Self::DoubleBonus | Self::DoubleDoubleBonus => match quad {
                Rank::Ace => Category::FourAces,
                Rank::Two | Rank::Three | Rank::Four => Category::FourTwosThruFours,
                _ => Category::FourFivesThruKings,
            },
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::JacksOrBetter => write!(f, "jacksOrBetter"),
            Self::BonusPoker => write!(f, "bonusPoker"),
            Self::DoubleBonus => write!(f, "doubleBonus"),
            Self::DoubleDoubleBonus => write!(f, "doubleDoubleBonus"),
        }
    }
}
