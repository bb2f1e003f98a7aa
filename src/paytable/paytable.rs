use super::pays::Pays;
use crate::Payout;
use crate::cards::hand::Hand;
use crate::evaluation::Category;
use crate::evaluation::Evaluator;
use crate::evaluation::Game;

/// One pay schedule: a game family plus its multipliers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paytable {
    pub id: String,
    pub name: String,
    pub game: Game,
    pub pays: Pays,
}

impl Paytable {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn game(&self) -> Game {
        self.game
    }

    /// payout of a complete five-card hand
    pub fn payout(&self, hand: Hand) -> Payout {
        self.pays.pay(Evaluator::from(hand).classify(self.game))
    }

    /// every category the game can produce must pay something,
    /// except Nothing, which never does
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.id.trim().is_empty(), "paytable with empty id");
        let unpaid = self
            .categories()
            .into_iter()
            .filter(|c| *c != Category::Nothing)
            .filter(|c| self.pays.pay(*c) == 0)
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        anyhow::ensure!(
            unpaid.is_empty(),
            "paytable {} does not pay {}",
            self.id,
            unpaid.join(", ")
        );
        Ok(())
    }

    /// categories reachable under this game's classification
    pub fn categories(&self) -> Vec<Category> {
        Category::all()
            .into_iter()
            .filter(|c| match (self.game, c) {
                (_, c) if !c.is_quads() => true,
                (Game::JacksOrBetter, c) => *c == Category::FourOfAKind,
                (Game::DoubleDoubleBonus, c) => *c != Category::FourOfAKind,
                (_, c) => !matches!(
                    c,
                    Category::FourOfAKind
                        | Category::FourAcesWithKicker
                        | Category::FourTwosThruFoursWithKicker
                ),
            })
            .collect()
    }
}

impl std::fmt::Display for Paytable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<28}{:<24}{}", self.id, self.game, self.name)
    }
}
