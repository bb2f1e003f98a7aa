use crate::HAND_SIZE;
use crate::N_HOLDS;
use crate::cards::deal::Deal;
use crate::cards::hand::Hand;

/// Which positions of a deal are kept before the draw.
/// Bit i set means position i is held; 0 discards all, 31 holds all.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hold(u8);

impl Hold {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self((N_HOLDS - 1) as u8);

    /// every hold in ascending mask order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_HOLDS as u8).map(Self)
    }
    pub fn holds(&self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn draws(&self) -> usize {
        HAND_SIZE - self.size()
    }
    /// the kept cards of a deal
    pub fn held(&self, deal: &Deal) -> Hand {
        Hand::from(
            (0..HAND_SIZE)
                .filter(|i| self.holds(*i))
                .map(|i| deal.card(i))
                .collect::<Vec<_>>(),
        )
    }
    /// carry position i to position align[i]
    pub fn translate(&self, align: &[usize; HAND_SIZE]) -> Self {
        Self(
            (0..HAND_SIZE)
                .filter(|i| self.holds(*i))
                .map(|i| 1u8 << align[i])
                .fold(0, |mask, bit| mask | bit),
        )
    }
    /// e.g. "Jh Js -- -- --"
    pub fn describe(&self, deal: &Deal) -> String {
        (0..HAND_SIZE)
            .map(|i| match self.holds(i) {
                true => deal.card(i).to_string(),
                false => "--".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<u8> for Hold {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < N_HOLDS {
            true => Ok(Self(n)),
            false => Err(format!("hold mask out of range: {}", n)),
        }
    }
}
impl From<Hold> for u8 {
    fn from(h: Hold) -> u8 {
        h.0
    }
}
impl From<Hold> for usize {
    fn from(h: Hold) -> usize {
        h.0 as usize
    }
}

impl std::fmt::Display for Hold {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_two_holds() {
        assert_eq!(Hold::all().count(), N_HOLDS);
        assert_eq!(Hold::all().filter(|h| h.draws() == 0).count(), 1);
        assert_eq!(Hold::all().filter(|h| h.draws() == 5).count(), 1);
    }

    #[test]
    fn held_cards() {
        let deal = Deal::try_from("Jh Js 3d 7c 9h").unwrap();
        let hold = Hold::try_from(0b00011).unwrap();
        assert_eq!(hold.held(&deal), Hand::try_from("Jh Js").unwrap());
        assert_eq!(hold.describe(&deal), "Jh Js -- -- --");
    }

    #[test]
    fn translate_positions() {
        let hold = Hold::try_from(0b00101).unwrap();
        let align = [4, 3, 2, 1, 0];
        assert_eq!(hold.translate(&align), Hold::try_from(0b10100).unwrap());
    }

    #[test]
    fn rejects_large_masks() {
        assert!(Hold::try_from(32).is_err());
    }
}
