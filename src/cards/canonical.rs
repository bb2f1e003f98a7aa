use super::card::Card;
use super::deal::Deal;
use super::permutation::Permutation;
use super::rank::Rank;
use super::suit::Suit;
use crate::HAND_SIZE;

/// CanonicalKey is the persisted identity of a dealt hand.
///
/// The cards are sorted by rank and then by suit in deck order, and each
/// suit is replaced by a letter in order of first appearance: the first suit
/// seen becomes `a`, the next new one `b`, and so on. The result is ten ASCII
/// bytes of alternating rank character and suit label, e.g. `2a5b7aJcKb`.
///
/// Equal keys always mean suit-isomorphic deals. The converse does not hold
/// when a rank is paired, because the sort consults concrete suits before
/// they are relabeled. See [`Isomorphism`] for the exact invariant.
///
/// [`Isomorphism`]: super::isomorphism::Isomorphism
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalKey([u8; 2 * HAND_SIZE]);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
    pub fn as_bytes(&self) -> &[u8; 2 * HAND_SIZE] {
        &self.0
    }

    /// a deck-ordered deal that produces this key.
    /// labels are tried against every assignment of concrete suits.
    pub fn deal(&self) -> Option<Deal> {
        let ranks = self
            .0
            .iter()
            .step_by(2)
            .map(|&b| Rank::try_from((b as char).to_string().as_str()).ok())
            .collect::<Option<Vec<Rank>>>()?;
        let labels = self
            .0
            .iter()
            .skip(1)
            .step_by(2)
            .map(|&b| b.checked_sub(b'a').filter(|&l| l < 4))
            .collect::<Option<Vec<u8>>>()?;
        Permutation::exhaust()
            .into_iter()
            .map(|p| [0, 1, 2, 3, 4].map(|i| Card::from((ranks[i], p.map(&Suit::from(labels[i]))))))
            .filter_map(|cards| Deal::try_from(cards).ok())
            .map(|deal| deal.sorted())
            .find(|deal| Self::from(deal) == *self)
    }
}

impl From<&Deal> for CanonicalKey {
    fn from(deal: &Deal) -> Self {
        let mut key = [0u8; 2 * HAND_SIZE];
        let mut labels = [None::<u8>; 4];
        let mut fresh = b'a';
        for (i, card) in deal.sorted().cards().iter().enumerate() {
            let label = *labels[card.suit() as usize].get_or_insert_with(|| {
                fresh += 1;
                fresh - 1
            });
            key[2 * i] = card.rank().char() as u8;
            key[2 * i + 1] = label;
        }
        Self(key)
    }
}

/// str isomorphism, accepting only keys some deal actually produces
impl TryFrom<&str> for CanonicalKey {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bytes = <[u8; 2 * HAND_SIZE]>::try_from(s.trim().as_bytes())
            .map_err(|_| format!("canonical key must be 10 characters: {}", s))?;
        let key = Self(bytes);
        match key.deal() {
            Some(_) => Ok(key),
            None => Err(format!("not a canonical key: {}", s)),
        }
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn format() {
        let deal = Deal::try_from("2s 5h 7s Jd Kh").unwrap();
        assert_eq!(CanonicalKey::from(&deal).as_str(), "2a5b7aJcKb");
    }

    #[test]
    fn identical_patterns_share_key() {
        let a = Deal::try_from("2s 5h 7s Jd Kh").unwrap();
        let b = Deal::try_from("2c 5d 7c Js Kd").unwrap();
        assert_eq!(CanonicalKey::from(&a), CanonicalKey::from(&b));
    }

    #[test]
    fn order_of_deal_is_irrelevant() {
        let a = Deal::try_from("Kh Jd 7s 5h 2s").unwrap();
        let b = Deal::try_from("2s 5h 7s Jd Kh").unwrap();
        assert_eq!(CanonicalKey::from(&a), CanonicalKey::from(&b));
    }

    #[test]
    fn ties_break_by_deck_order() {
        let deal = Deal::try_from("3s 3h 3d 9c 9h").unwrap();
        assert_eq!(CanonicalKey::from(&deal).as_str(), "3a3b3c9a9d");
    }

    #[test]
    fn unpaired_keys_are_suit_invariant() {
        let deal = Deal::try_from("2s 5h 7s Jd Kh").unwrap();
        let key = CanonicalKey::from(&deal);
        Permutation::exhaust()
            .into_iter()
            .for_each(|p| assert_eq!(key, CanonicalKey::from(&p.permute(&deal))));
    }

    #[test]
    fn paired_keys_may_split_an_orbit() {
        let a = Deal::try_from("2h 2d 3h 4c 5s").unwrap();
        let b = Deal::try_from("2h 2d 3d 4c 5s").unwrap();
        assert!(Permutation::between(&a, &b).is_some());
        assert_ne!(CanonicalKey::from(&a), CanonicalKey::from(&b));
    }

    #[test]
    fn decode_reproduces_key() {
        let deal = Deal::random();
        let key = CanonicalKey::from(&deal);
        let decoded = key.deal().unwrap();
        assert_eq!(CanonicalKey::from(&decoded), key);
        assert!(Permutation::between(&deal, &decoded).is_some());
    }

    #[test]
    fn parse() {
        assert!(CanonicalKey::try_from("2a5b7aJcKb").is_ok());
        assert!(CanonicalKey::try_from("2b5a7aJcKb").is_err());
        assert!(CanonicalKey::try_from("2a2a7aJcKb").is_err());
        assert!(CanonicalKey::try_from("2a5b7a").is_err());
    }
}
