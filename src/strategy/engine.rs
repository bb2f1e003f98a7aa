use super::analysis::Analysis;
use super::expectation::Expectation;
use super::hold::Hold;
use crate::cards::deal::Deal;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::paytable::Paytable;

/// Exact EV of hold decisions under one pay schedule.
///
/// The draw is enumerated exhaustively from the 47 undealt cards, so an
/// evaluation is fully deterministic: the discarded cards never return.
pub struct Engine<'a>(&'a Paytable);

impl<'a> From<&'a Paytable> for Engine<'a> {
    fn from(paytable: &'a Paytable) -> Self {
        Self(paytable)
    }
}

impl Engine<'_> {
    pub fn paytable(&self) -> &Paytable {
        self.0
    }

    pub fn evaluate(&self, deal: &Deal, hold: Hold) -> Expectation {
        let held = hold.held(deal);
        match hold.draws() {
            0 => Expectation::certain(self.0.payout(held)),
            n => {
                let draws = HandIterator::from((n, deal.hand()));
                let outcomes = draws.combinations();
                let ev = draws
                    .map(|draw| Hand::add(held, draw))
                    .map(|hand| self.0.payout(hand))
                    .fold(Expectation::default(), Expectation::observe);
                debug_assert_eq!(ev.count() as usize, outcomes);
                ev
            }
        }
    }

    /// all 32 holds, with the best one selected
    pub fn analyze(&self, deal: &Deal) -> Analysis {
        let mut evs = [Expectation::default(); crate::N_HOLDS];
        Hold::all().for_each(|hold| evs[usize::from(hold)] = self.evaluate(deal, hold));
        Analysis::from(evs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::Deck;
    use crate::paytable::Catalog;

    fn lookup(catalog: &Catalog, id: &str) -> std::sync::Arc<Paytable> {
        catalog.get(id).unwrap()
    }

    #[test]
    fn hold_all_is_payout() {
        let catalog = Catalog::default();
        let paytable = lookup(&catalog, "double-double-bonus-9-6");
        let deal = Deal::random();
        let ev = Engine::from(paytable.as_ref()).evaluate(&deal, Hold::ALL);
        assert_eq!(ev.count(), 1);
        assert_eq!(ev.total(), paytable.payout(deal.hand()) as u64);
    }

    #[test]
    fn draw_counts() {
        let catalog = Catalog::default();
        let paytable = lookup(&catalog, "jacks-or-better-9-6");
        let engine = Engine::from(paytable.as_ref());
        let deal = Deal::try_from("2h 7d 9c Jh Ks").unwrap();
        let counts = [1, 47, 1081, 16215, 178365, 1533939];
        Hold::all()
            .filter(|hold| hold.draws() < 5)
            .for_each(|hold| {
                let draws = HandIterator::from((hold.draws(), deal.hand()));
                assert_eq!(draws.combinations() as u64, counts[hold.draws()]);
                assert_eq!(engine.evaluate(&deal, hold).count(), counts[hold.draws()]);
            });
        assert_eq!(engine.evaluate(&deal, Hold::NONE).count(), 1_533_939);
    }

    #[test]
    fn royal_flush() {
        let catalog = Catalog::default();
        let paytable = lookup(&catalog, "jacks-or-better-9-6");
        let engine = Engine::from(paytable.as_ref());
        let deal = Deal::try_from("Th Jh Qh Kh Ah").unwrap();
        assert_eq!(engine.evaluate(&deal, Hold::ALL), Expectation::certain(800));
        let analysis = engine.analyze(&deal);
        assert_eq!(analysis.best(), Hold::ALL);
        assert_eq!(analysis.best_ev().value(), 800.);
    }

    #[test]
    fn high_pair() {
        let catalog = Catalog::default();
        let paytable = lookup(&catalog, "jacks-or-better-9-6");
        let engine = Engine::from(paytable.as_ref());
        let deal = Deal::try_from("Jh Js 3d 7c 9h").unwrap();
        let analysis = engine.analyze(&deal);
        assert_eq!(analysis.best(), Hold::try_from(0b00011).unwrap());
        assert!(analysis.best_ev().value() > 1.);
    }

    #[test]
    fn four_flush() {
        let catalog = Catalog::default();
        let deal = Deal::try_from("2h 5h 8h Jh Ks").unwrap();
        let hearts = Hold::try_from(0b01111).unwrap();
        for id in ["jacks-or-better-9-6", "double-bonus-10-7"] {
            let paytable = lookup(&catalog, id);
            let engine = Engine::from(paytable.as_ref());
            let analysis = engine.analyze(&deal);
            assert_eq!(analysis.best(), hearts, "{}", id);
            let held = hearts.held(&deal);
            let average = Deck::without(deal.hand())
                .fold(Expectation::default(), |e, card| {
                    e.observe(paytable.payout(Hand::add(held, Hand::from(u64::from(card)))))
                });
            assert_eq!(average.count(), 47);
            assert_eq!(analysis.ev(hearts), average);
        }
    }

    #[test]
    fn four_flush_exact_value() {
        let catalog = Catalog::default();
        let paytable = lookup(&catalog, "jacks-or-better-9-6");
        let deal = Deal::try_from("2h 5h 8h Jh Ks").unwrap();
        let ev = Engine::from(paytable.as_ref()).evaluate(&deal, Hold::try_from(0b01111).unwrap());
        assert_eq!(ev, Expectation::new(57, 47));
    }

    #[test]
    fn argmax_dominates() {
        let catalog = Catalog::default();
        let paytable = lookup(&catalog, "bonus-poker-8-5");
        let analysis = Engine::from(paytable.as_ref()).analyze(&Deal::random());
        Hold::all().for_each(|hold| assert!(analysis.best_ev() >= analysis.ev(hold)));
    }
}
