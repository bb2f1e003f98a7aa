use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use crate::Arbitrary;
use crate::HAND_SIZE;

/// Five distinct cards in the order they were dealt.
///
/// Position matters here, unlike in [`Hand`]: bit i of a hold mask refers to
/// the card at position i. Deals produced by enumeration are already in deck
/// order, i.e. sorted by rank and then by suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deal([Card; HAND_SIZE]);

impl Deal {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    pub fn card(&self, position: usize) -> Card {
        self.0[position]
    }
    pub fn hand(&self) -> Hand {
        Hand::from(self.0.as_slice())
    }

    /// same cards in deck order
    pub fn sorted(&self) -> Self {
        let mut cards = self.0;
        cards.sort();
        Self(cards)
    }

    /// the deck-ordered deal, together with the dealt position of each of
    /// its cards. order[i] is the dealt position of sorted card i.
    pub fn canonical(&self) -> (Self, [usize; HAND_SIZE]) {
        let mut order = [0, 1, 2, 3, 4];
        order.sort_by_key(|&i| self.0[i]);
        let cards = order.map(|i| self.0[i]);
        (Self(cards), order)
    }
}

/// enumeration yields 5-card Hands, which come out in deck order
impl From<Hand> for Deal {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() == HAND_SIZE);
        let mut cards = [Card::from(0u8); HAND_SIZE];
        hand.take(HAND_SIZE)
            .enumerate()
            .for_each(|(i, card)| cards[i] = card);
        Self(cards)
    }
}

impl TryFrom<[Card; HAND_SIZE]> for Deal {
    type Error = String;
    fn try_from(cards: [Card; HAND_SIZE]) -> Result<Self, Self::Error> {
        match Hand::from(cards.as_slice()).size() {
            HAND_SIZE => Ok(Self(cards)),
            _ => Err(format!("duplicate cards in deal: {}", Self(cards))),
        }
    }
}

impl TryFrom<&str> for Deal {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let cards = <[Card; HAND_SIZE]>::try_from(cards)
            .map_err(|v| format!("deal must have 5 cards, found {}", v.len()))?;
        Self::try_from(cards)
    }
}

impl Arbitrary for Deal {
    fn random() -> Self {
        let mut deck = Deck::new();
        Self([deck.draw(), deck.draw(), deck.draw(), deck.draw(), deck.draw()])
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.map(|c| c.to_string());
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        assert!(Deal::try_from("As As Kd 7c 2h").is_err());
        assert!(Deal::try_from("As Kd 7c 2h").is_err());
        assert!(Deal::try_from("As Qs Kd 7c 2h").is_ok());
    }

    #[test]
    fn canonical_order() {
        let deal = Deal::try_from("Ks 2h Jd 2s 7c").unwrap();
        let (sorted, order) = deal.canonical();
        assert_eq!(sorted, Deal::try_from("2h 2s 7c Jd Ks").unwrap());
        assert_eq!(order, [1, 3, 4, 2, 0]);
        (0..HAND_SIZE).for_each(|i| assert_eq!(sorted.card(i), deal.card(order[i])));
    }

    #[test]
    fn bijective_hand() {
        let deal = Deal::random().sorted();
        assert_eq!(deal, Deal::from(deal.hand()));
    }

    #[test]
    fn random_is_valid() {
        let deal = Deal::random();
        assert_eq!(deal.hand().size(), HAND_SIZE);
    }
}
