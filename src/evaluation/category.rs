/// Closed set of payable hand categories across every supported game.
///
/// Quad categories are split differently per [`Game`]; everything else is
/// shared. Declaration order is classification priority.
///
/// [`Game`]: super::game::Game
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    RoyalFlush,
    StraightFlush,
    FourAcesWithKicker,
    FourTwosThruFoursWithKicker,
    FourAces,
    FourTwosThruFours,
    FourFivesThruKings,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    JacksOrBetter,
    Nothing,
}

impl Category {
    pub const fn all() -> [Self; 15] {
        [
            Self::RoyalFlush,
            Self::StraightFlush,
            Self::FourAcesWithKicker,
            Self::FourTwosThruFoursWithKicker,
            Self::FourAces,
            Self::FourTwosThruFours,
            Self::FourFivesThruKings,
            Self::FourOfAKind,
            Self::FullHouse,
            Self::Flush,
            Self::Straight,
            Self::ThreeOfAKind,
            Self::TwoPair,
            Self::JacksOrBetter,
            Self::Nothing,
        ]
    }
    pub const fn is_quads(&self) -> bool {
        matches!(
            self,
            Self::FourAcesWithKicker
                | Self::FourTwosThruFoursWithKicker
                | Self::FourAces
                | Self::FourTwosThruFours
                | Self::FourFivesThruKings
                | Self::FourOfAKind
        )
    }
}

/// camelCase, matching pay schedule field names
impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RoyalFlush => write!(f, "royalFlush"),
            Self::StraightFlush => write!(f, "straightFlush"),
            Self::FourAcesWithKicker => write!(f, "fourAcesWithKicker"),
            Self::FourTwosThruFoursWithKicker => write!(f, "fourTwosThruFoursWithKicker"),
            Self::FourAces => write!(f, "fourAces"),
            Self::FourTwosThruFours => write!(f, "fourTwosThruFours"),
            Self::FourFivesThruKings => write!(f, "fourFivesThruKings"),
            Self::FourOfAKind => write!(f, "fourOfAKind"),
            Self::FullHouse => write!(f, "fullHouse"),
            Self::Flush => write!(f, "flush"),
            Self::Straight => write!(f, "straight"),
            Self::ThreeOfAKind => write!(f, "threeOfAKind"),
            Self::TwoPair => write!(f, "twoPair"),
            Self::JacksOrBetter => write!(f, "jacksOrBetter"),
            Self::Nothing => write!(f, "nothing"),
        }
    }
}
