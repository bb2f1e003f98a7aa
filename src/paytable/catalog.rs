use super::pays::Pays;
use super::paytable::Paytable;
use crate::evaluation::Game;
use anyhow::Context;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable registry of pay schedules, built once at startup and shared.
#[derive(Debug, Clone)]
pub struct Catalog(BTreeMap<String, Arc<Paytable>>);

impl Catalog {
    /// read a JSON array of paytables, replacing the built-in schedules
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read paytables from {}", path.display()))?;
        let tables = serde_json::from_str::<Vec<Paytable>>(&json)
            .with_context(|| format!("parse paytables in {}", path.display()))?;
        Self::try_from(tables)
    }

    pub fn get(&self, id: &str) -> anyhow::Result<Arc<Paytable>> {
        self.0
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown paytable id: {}", id))
    }

    /// resolve every id up front so a typo aborts before any work begins
    pub fn resolve(&self, ids: &[String]) -> anyhow::Result<Vec<Arc<Paytable>>> {
        ids.iter().map(|id| self.get(id)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Paytable>> {
        self.0.values()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl TryFrom<Vec<Paytable>> for Catalog {
    type Error = anyhow::Error;
    fn try_from(tables: Vec<Paytable>) -> Result<Self, Self::Error> {
        let mut catalog = BTreeMap::new();
        for table in tables {
            table.validate()?;
            let id = table.id.clone();
            anyhow::ensure!(
                catalog.insert(id.clone(), Arc::new(table)).is_none(),
                "duplicate paytable id: {}",
                id
            );
        }
        Ok(Self(catalog))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let tables = vec![
            jacks_or_better("jacks-or-better-9-6", "Jacks or Better 9/6", 9, 6),
            jacks_or_better("jacks-or-better-8-5", "Jacks or Better 8/5", 8, 5),
            jacks_or_better("jacks-or-better-7-5", "Jacks or Better 7/5", 7, 5),
            bonus_poker("bonus-poker-8-5", "Bonus Poker 8/5", 8, 5),
            bonus_poker("bonus-poker-7-5", "Bonus Poker 7/5", 7, 5),
            double_bonus("double-bonus-10-7", "Double Bonus 10/7", 10, 7),
            double_bonus("double-bonus-9-7", "Double Bonus 9/7", 9, 7),
            double_bonus("double-bonus-9-6", "Double Bonus 9/6", 9, 6),
            double_double_bonus("double-double-bonus-9-6", "Double Double Bonus 9/6", 9, 6),
            double_double_bonus("double-double-bonus-9-5", "Double Double Bonus 9/5", 9, 5),
            double_double_bonus("double-double-bonus-8-5", "Double Double Bonus 8/5", 8, 5),
        ];
        Self(
            tables
                .into_iter()
                .map(|t| (t.id.clone(), Arc::new(t)))
                .collect(),
        )
    }
}

fn schedule(id: &str, name: &str, game: Game, pays: Pays) -> Paytable {
    Paytable {
        id: id.to_string(),
        name: name.to_string(),
        game,
        pays,
    }
}

fn jacks_or_better(id: &str, name: &str, full_house: u32, flush: u32) -> Paytable {
    #[rustfmt::skip]
    let pays = Pays {
        royal_flush: 800, straight_flush: 50, four_of_a_kind: 25,
        full_house, flush, straight: 4, three_of_a_kind: 3, two_pair: 2, jacks_or_better: 1,
        ..Pays::default()
    };
    schedule(id, name, Game::JacksOrBetter, pays)
}

fn bonus_poker(id: &str, name: &str, full_house: u32, flush: u32) -> Paytable {
    #[rustfmt::skip]
    let pays = Pays {
        royal_flush: 800, straight_flush: 50,
        four_aces: 80, four_twos_thru_fours: 40, four_fives_thru_kings: 25,
        full_house, flush, straight: 4, three_of_a_kind: 3, two_pair: 2, jacks_or_better: 1,
        ..Pays::default()
    };
    schedule(id, name, Game::BonusPoker, pays)
}

fn double_bonus(id: &str, name: &str, full_house: u32, flush: u32) -> Paytable {
    #[rustfmt::skip]
    let pays = Pays {
        royal_flush: 800, straight_flush: 50,
        four_aces: 160, four_twos_thru_fours: 80, four_fives_thru_kings: 50,
        full_house, flush, straight: 5, three_of_a_kind: 3, two_pair: 1, jacks_or_better: 1,
        ..Pays::default()
    };
    schedule(id, name, Game::DoubleBonus, pays)
}

fn double_double_bonus(id: &str, name: &str, full_house: u32, flush: u32) -> Paytable {
    #[rustfmt::skip]
    let pays = Pays {
        royal_flush: 800, straight_flush: 50,
        four_aces_with_kicker: 400, four_twos_thru_fours_with_kicker: 160,
        four_aces: 160, four_twos_thru_fours: 80, four_fives_thru_kings: 50,
        full_house, flush, straight: 4, three_of_a_kind: 3, two_pair: 1, jacks_or_better: 1,
        ..Pays::default()
    };
    schedule(id, name, Game::DoubleDoubleBonus, pays)
}
