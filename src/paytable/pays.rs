use crate::Payout;
use crate::evaluation::Category;

/// Coins returned per coin wagered, one multiplier per category.
/// Categories a game never produces are left at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pays {
    pub royal_flush: Payout,
    pub straight_flush: Payout,
    pub four_aces_with_kicker: Payout,
    pub four_twos_thru_fours_with_kicker: Payout,
    pub four_aces: Payout,
    pub four_twos_thru_fours: Payout,
    pub four_fives_thru_kings: Payout,
    pub four_of_a_kind: Payout,
    pub full_house: Payout,
    pub flush: Payout,
    pub straight: Payout,
    pub three_of_a_kind: Payout,
    pub two_pair: Payout,
    pub jacks_or_better: Payout,
}

impl Pays {
    pub const fn pay(&self, category: Category) -> Payout {
        match category {
            Category::RoyalFlush => self.royal_flush,
            Category::StraightFlush => self.straight_flush,
            Category::FourAcesWithKicker => self.four_aces_with_kicker,
            Category::FourTwosThruFoursWithKicker => self.four_twos_thru_fours_with_kicker,
            Category::FourAces => self.four_aces,
            Category::FourTwosThruFours => self.four_twos_thru_fours,
            Category::FourFivesThruKings => self.four_fives_thru_kings,
            Category::FourOfAKind => self.four_of_a_kind,
            Category::FullHouse => self.full_house,
            Category::Flush => self.flush,
            Category::Straight => self.straight,
            Category::ThreeOfAKind => self.three_of_a_kind,
            Category::TwoPair => self.two_pair,
            Category::JacksOrBetter => self.jacks_or_better,
            Category::Nothing => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let pays = serde_json::from_str::<Pays>(r#"{"royalFlush": 800, "fourAces": 160}"#).unwrap();
        assert_eq!(pays.pay(Category::RoyalFlush), 800);
        assert_eq!(pays.pay(Category::FourAces), 160);
        assert_eq!(pays.pay(Category::FourOfAKind), 0);
        assert_eq!(pays.pay(Category::Nothing), 0);
    }
}
