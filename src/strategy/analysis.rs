use super::expectation::Expectation;
use super::hold::Hold;
use crate::HAND_SIZE;
use crate::N_HOLDS;

/// EVs of all 32 holds of one deal and the best of them.
/// Ties go to the lowest mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    evs: [Expectation; N_HOLDS],
    best: Hold,
}

impl From<[Expectation; N_HOLDS]> for Analysis {
    fn from(evs: [Expectation; N_HOLDS]) -> Self {
        let best = Hold::all()
            .fold(Hold::NONE, |best, hold| {
                match evs[usize::from(hold)] > evs[usize::from(best)] {
                    true => hold,
                    false => best,
                }
            });
        Self { evs, best }
    }
}

impl Analysis {
    pub fn best(&self) -> Hold {
        self.best
    }
    pub fn best_ev(&self) -> Expectation {
        self.evs[usize::from(self.best)]
    }
    pub fn ev(&self, hold: Hold) -> Expectation {
        self.evs[usize::from(hold)]
    }
    pub fn evs(&self) -> &[Expectation; N_HOLDS] {
        &self.evs
    }

    /// the same table seen from a suit-isomorphic deal whose position i
    /// corresponds to position align[i] of the analyzed deal
    pub fn remap(&self, align: &[usize; HAND_SIZE]) -> Self {
        let mut evs = [Expectation::default(); N_HOLDS];
        Hold::all().for_each(|hold| evs[usize::from(hold)] = self.ev(hold.translate(align)));
        Self::from(evs)
    }

    /// holds ranked best first, ties in mask order
    pub fn ranking(&self) -> Vec<(Hold, Expectation)> {
        let mut ranking = Hold::all().map(|h| (h, self.ev(h))).collect::<Vec<_>>();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: impl Fn(usize) -> u64) -> [Expectation; N_HOLDS] {
        std::array::from_fn(|i| Expectation::new(values(i), 1))
    }

    #[test]
    fn lowest_mask_wins_ties() {
        let analysis = Analysis::from(table(|i| if i == 7 || i == 19 { 5 } else { 1 }));
        assert_eq!(analysis.best(), Hold::try_from(7).unwrap());
    }

    #[test]
    fn all_equal_picks_zero() {
        let analysis = Analysis::from(table(|_| 3));
        assert_eq!(analysis.best(), Hold::NONE);
    }

    #[test]
    fn remap_moves_best() {
        let analysis = Analysis::from(table(|i| if i == 0b00001 { 9 } else { 1 }));
        let remapped = analysis.remap(&[4, 3, 2, 1, 0]);
        assert_eq!(remapped.best(), Hold::try_from(0b10000).unwrap());
        assert_eq!(remapped.best_ev(), analysis.best_ev());
    }

    #[test]
    fn ranking_is_sorted() {
        let analysis = Analysis::from(table(|i| (i % 5) as u64));
        let ranking = analysis.ranking();
        assert_eq!(ranking.len(), N_HOLDS);
        assert_eq!(ranking[0].0, analysis.best());
        assert!(ranking.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
