use super::card::Card;
use super::deal::Deal;
use super::hand::Hand;
use super::suit::Suit;
use crate::Arbitrary;
use crate::HAND_SIZE;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming the deck order of suits (H < D < C < S),
/// we use [Suit; 4] to map H -> P[0], D -> P[1], C -> P[2], S -> P[3].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Permutation([Suit; 4]);

impl Permutation {
    /// the image of a Deal keeps its positions and relabels its suits
    pub fn permute(&self, deal: &Deal) -> Deal {
        Deal::try_from(deal.cards().map(|c| self.apply(&c)))
            .unwrap_or_else(|_| unreachable!("suit relabeling is injective"))
    }

    /// the image of a single card
    pub fn apply(&self, card: &Card) -> Card {
        Card::from((card.rank(), self.map(&card.suit())))
    }

    /// the image of a hand under a permutation
    /// is the union of its shifted sub-Hands
    pub fn image(&self, hand: &Hand) -> Hand {
        Suit::all()
            .iter()
            .map(|suit| self.shift(suit, hand))
            .fold(Hand::empty(), |acc, x| Hand::add(acc, x))
    }

    /// some relabeling that carries one deal's cards onto another's
    pub fn between(from: &Deal, onto: &Deal) -> Option<Self> {
        Self::exhaust()
            .into_iter()
            .find(|p| p.image(&from.hand()) == onto.hand())
    }

    /// positional correspondence between suit-isomorphic deals.
    /// align[i] is the position in `onto` of the image of `from`'s card i.
    pub fn align(from: &Deal, onto: &Deal) -> Option<[usize; HAND_SIZE]> {
        Self::between(from, onto).map(|p| {
            from.cards().map(|card| {
                let image = p.apply(&card);
                onto.cards()
                    .iter()
                    .position(|c| *c == image)
                    .unwrap_or_else(|| unreachable!("image lies in target deal"))
            })
        })
    }

    /// the hand here gets filtered by the "old" suit
    /// and then we bitshift so that it is in its "new" suit
    /// e.g. Full Hand -> Hearts Hand -> Spades Hand
    fn shift(&self, suit: &Suit, hand: &Hand) -> Hand {
        let old = *suit;
        let new = self.map(suit);
        let shift = new as i8 - old as i8;
        let cards = u64::from(*suit) & u64::from(*hand);
        if shift >= 0 {
            Hand::from(cards << shift as u64)
        } else {
            Hand::from(cards >> shift.abs() as u64)
        }
    }
    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }

    pub const fn identity() -> Self {
        Self(Suit::all())
    }
    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
        ]
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::exhaust()[rng.random_range(0..24)]
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all() {
            write!(f, "{}{} ", suit, self.map(&suit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_identity() {
        let identity = Permutation::identity();
        assert!(identity.map(&Suit::H) == Suit::H);
        assert!(identity.map(&Suit::D) == Suit::D);
        assert!(identity.map(&Suit::C) == Suit::C);
        assert!(identity.map(&Suit::S) == Suit::S);
    }

    #[test]
    fn map_arbitrary() {
        let permutation = Permutation([Suit::C, Suit::S, Suit::H, Suit::D]);
        assert!(permutation.map(&Suit::H) == Suit::C);
        assert!(permutation.map(&Suit::D) == Suit::S);
        assert!(permutation.map(&Suit::C) == Suit::H);
        assert!(permutation.map(&Suit::S) == Suit::D);
    }

    #[test]
    fn permute_simple() {
        let permutation = Permutation([Suit::C, Suit::H, Suit::S, Suit::D]);
        let hearts = Hand::from(0b_0001_0001_0001_0001_0001_0001_0001_0001_u64);
        let clubs = Hand::from(0b_0100_0100_0100_0100_0100_0100_0100_0100_u64);
        assert!(permutation.image(&hearts) == clubs);
    }

    #[test]
    fn permute_unique() {
        let ref hand = Hand::try_from("Ah Kd Qc Js").unwrap();
        let mut unique = std::collections::HashSet::new();
        let n = Permutation::exhaust()
            .into_iter()
            .map(|p| p.image(hand))
            .inspect(|h| assert!(unique.insert(*h)))
            .count();
        assert!(n == 24);
    }

    #[test]
    fn permute_rotation() {
        let permutation = Permutation([Suit::S, Suit::H, Suit::D, Suit::C]);
        let original = Hand::try_from("Ah Kd Qc Js").unwrap();
        let permuted = Hand::try_from("As Kh Qd Jc").unwrap();
        assert!(permutation.image(&original) == permuted);
    }

    #[test]
    fn image_agrees_with_apply() {
        let permutation = Permutation::random();
        let deal = Deal::random();
        assert_eq!(permutation.image(&deal.hand()), permutation.permute(&deal).hand());
    }

    #[test]
    fn align_positions() {
        let from = Deal::try_from("2s 5h 7s Jd Kh").unwrap();
        let onto = Deal::try_from("2c 5d 7c Js Kd").unwrap();
        let align = Permutation::align(&from, &onto).unwrap();
        assert_eq!(align, [0, 1, 2, 3, 4]);
        let onto = Deal::try_from("Kd 7c Js 2c 5d").unwrap();
        let align = Permutation::align(&from, &onto).unwrap();
        assert_eq!(align, [3, 4, 1, 2, 0]);
    }

    #[test]
    fn align_rejects_distinct_orbits() {
        let from = Deal::try_from("2s 5h 7s Jd Kh").unwrap();
        let onto = Deal::try_from("2s 5s 7s Jd Kh").unwrap();
        assert!(Permutation::align(&from, &onto).is_none());
    }
}
