use crate::N_ISOMORPHIC;
use crate::cards::CanonicalKey;
use crate::cards::Deal;
use crate::cards::Enumerator;
use crate::cards::Isomorphism;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::ops::Range;

/// A member of a class: its persisted key and its deck-ordered deal.
pub type Member = (CanonicalKey, Deal);

/// The hand space to solve, partitioned into suit-isomorphism classes.
///
/// Each class lists its canonical keys in key order. The first member is the
/// representative whose EV table is computed; every other member receives the
/// same table with hold positions realigned.
#[derive(Debug, Clone, Default)]
pub struct Space(Vec<Vec<Member>>);

impl Space {
    /// every canonical key of the full deck, grouped by isomorphism
    pub fn exhaust() -> anyhow::Result<Self> {
        let canonical = Enumerator::canonical()?;
        let space = Self::group(canonical);
        anyhow::ensure!(
            space.len() == N_ISOMORPHIC,
            "grouped {} isomorphism classes, expected {}",
            space.len(),
            N_ISOMORPHIC
        );
        log::info!(
            "{:<32}{:<32}",
            "hand space",
            format!("{} keys in {} classes", space.n_hands(), space.len())
        );
        Ok(space)
    }

    fn group(canonical: BTreeMap<CanonicalKey, Deal>) -> Self {
        let tagged = canonical
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(key, deal)| (Isomorphism::from(&deal), (key, deal)))
            .collect::<Vec<_>>();
        let classes = tagged
            .into_iter()
            .fold(BTreeMap::<Isomorphism, Vec<Member>>::new(), |mut classes, (iso, member)| {
                classes.entry(iso).or_default().push(member);
                classes
            });
        Self(classes.into_values().collect())
    }

    /// drop keys already solved; classes left empty disappear
    pub fn without(&self, solved: &BTreeSet<CanonicalKey>) -> Self {
        Self(
            self.0
                .iter()
                .map(|class| {
                    class
                        .iter()
                        .filter(|(key, _)| !solved.contains(key))
                        .copied()
                        .collect::<Vec<_>>()
                })
                .filter(|class| !class.is_empty())
                .collect(),
        )
    }

    /// number of isomorphism classes
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// number of canonical keys, i.e. records a full solve persists
    pub fn n_hands(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
    pub fn classes(&self, range: Range<usize>) -> &[Vec<Member>] {
        &self.0[range]
    }

    /// at most n contiguous, near-equal class ranges covering the space
    pub fn chunks(&self, n: usize) -> Vec<Range<usize>> {
        match self.len() {
            0 => vec![],
            len => {
                let size = len.div_ceil(n.clamp(1, len));
                (0..len)
                    .step_by(size)
                    .map(|start| start..(start + size).min(len))
                    .collect()
            }
        }
    }
}

/// arbitrary deals, deduplicated by key and grouped like the full space
impl From<Vec<Deal>> for Space {
    fn from(deals: Vec<Deal>) -> Self {
        let canonical = deals
            .into_iter()
            .map(|deal| deal.sorted())
            .fold(BTreeMap::new(), |mut keys, deal| {
                keys.entry(CanonicalKey::from(&deal)).or_insert(deal);
                keys
            });
        Self::group(canonical)
    }
}

/// classes taken as given, without regrouping
#[cfg(test)]
impl From<Vec<Vec<Member>>> for Space {
    fn from(classes: Vec<Vec<Member>>) -> Self {
        Self(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deals(hands: &[&str]) -> Vec<Deal> {
        hands.iter().map(|h| Deal::try_from(*h).unwrap()).collect()
    }

    #[test]
    fn groups_isomorphic_keys() {
        let space = Space::from(deals(&[
            "2h 2d 3h 4c 5s",
            "2h 2d 3d 4c 5s",
            "5s 4c 3d 2d 2h",
            "Th Jh Qh Kh Ah",
            "Ts Js Qs Ks As",
        ]));
        assert_eq!(space.len(), 2);
        assert_eq!(space.n_hands(), 3);
    }

    #[test]
    fn without_solved() {
        let space = Space::from(deals(&["2h 2d 3h 4c 5s", "2h 2d 3d 4c 5s", "Th Jh Qh Kh Ah"]));
        let royal = CanonicalKey::from(&Deal::try_from("Th Jh Qh Kh Ah").unwrap());
        let rest = space.without(&BTreeSet::from([royal]));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest.n_hands(), 2);
    }

    #[test]
    fn chunks_cover_space() {
        let space = Space::from(deals(&[
            "2h 3h 4h 5h 7h",
            "2h 3h 4h 5h 7d",
            "2h 3h 4h 5d 7d",
            "2h 3h 4d 5c 7s",
            "Th Jh Qh Kh Ah",
        ]));
        assert_eq!(space.len(), 5);
        let chunks = space.chunks(2);
        assert_eq!(chunks, vec![0..3, 3..5]);
        assert_eq!(space.chunks(8).len(), 5);
        assert!(Space::default().chunks(4).is_empty());
    }

    #[test]
    fn exhaustive_isomorphism_count() {
        let space = Space::exhaust().unwrap();
        assert_eq!(space.len(), N_ISOMORPHIC);
        assert_eq!(space.n_hands(), crate::N_CANONICAL);
    }
}
