use super::canonical::CanonicalKey;
use super::deal::Deal;
use super::hand::Hand;
use super::hands::HandIterator;
use crate::N_CANONICAL;
use std::collections::BTreeMap;

/// Exhaustive enumeration of the deal space.
pub struct Enumerator;

impl Enumerator {
    /// every unordered five-card deal, in deck order, deterministically
    pub fn deals() -> impl Iterator<Item = Deal> {
        HandIterator::from((crate::HAND_SIZE, Hand::empty())).map(Deal::from)
    }

    /// every CanonicalKey with its first deal in enumeration order.
    /// any other deal with the same key is positionally identical.
    pub fn canonical() -> anyhow::Result<BTreeMap<CanonicalKey, Deal>> {
        let keys = Self::deals().fold(BTreeMap::new(), |mut keys, deal| {
            keys.entry(CanonicalKey::from(&deal)).or_insert(deal);
            keys
        });
        anyhow::ensure!(
            keys.len() == N_CANONICAL,
            "enumerated {} canonical keys, expected {}",
            keys.len(),
            N_CANONICAL
        );
        log::debug!("enumerated {} canonical keys", keys.len());
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_canonical_count() {
        let keys = Enumerator::canonical().unwrap();
        assert_eq!(keys.len(), N_CANONICAL);
        assert!(keys.iter().all(|(key, deal)| CanonicalKey::from(deal) == *key));
    }

    #[test]
    fn deterministic_representatives() {
        let a = Enumerator::deals().take(1000).collect::<Vec<_>>();
        let b = Enumerator::deals().take(1000).collect::<Vec<_>>();
        assert_eq!(a, b);
        assert!(a.iter().all(|deal| *deal == deal.sorted()));
    }
}
