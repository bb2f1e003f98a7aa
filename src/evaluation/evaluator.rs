use super::category::Category;
use super::game::Game;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const BROADWAY: u16 = 0b_1111100000000;

/// A lazy classifier for a five-card hand.
///
/// Using the compact bitset representation of the Hand, we search for the
/// highest paying category using bitwise operations, in priority order.
/// Four of a kind is handed to the [`Game`] for sub-classification.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        debug_assert!(h.size() == crate::HAND_SIZE);
        Self(h)
    }
}

impl Evaluator {
    pub fn classify(&self, game: Game) -> Category {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak(game))
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_high_pair())
            .unwrap_or(Category::Nothing)
    }

    fn find_royal_flush(&self) -> Option<Category> {
        (self.is_flush() && self.ranks() == BROADWAY).then_some(Category::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Category> {
        (self.is_flush() && self.is_straight()).then_some(Category::StraightFlush)
    }
    fn find_4_oak(&self, game: Game) -> Option<Category> {
        self.find_rank_of_n_oak(4).map(|quad| {
            let rest = self.ranks() & !u16::from(quad);
            let kicker = Rank::from(rest);
            game.quads(quad, kicker)
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Category> {
        self.find_rank_of_n_oak(3)
            .and_then(|_| self.find_rank_of_n_oak(2))
            .map(|_| Category::FullHouse)
    }
    fn find_flush(&self) -> Option<Category> {
        self.is_flush().then_some(Category::Flush)
    }
    fn find_straight(&self) -> Option<Category> {
        self.is_straight().then_some(Category::Straight)
    }
    fn find_3_oak(&self) -> Option<Category> {
        self.find_rank_of_n_oak(3).map(|_| Category::ThreeOfAKind)
    }
    fn find_2_oak_2_oak(&self) -> Option<Category> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|_| Category::TwoPair)
        })
    }
    fn find_high_pair(&self) -> Option<Category> {
        self.find_rank_of_n_oak(2)
            .filter(|pair| *pair >= Rank::Jack)
            .map(|_| Category::JacksOrBetter)
    }

    /// distinct ranks present
    fn ranks(&self) -> u16 {
        u16::from(self.0)
    }
    fn is_flush(&self) -> bool {
        let hand = u64::from(self.0);
        Suit::all()
            .iter()
            .any(|suit| hand & !u64::from(*suit) == 0)
    }
    /// five distinct consecutive ranks, ace low in the wheel
    fn is_straight(&self) -> bool {
        let ranks = self.ranks();
        ranks.count_ones() == 5 && (ranks >> ranks.trailing_zeros() == 0b11111 || ranks == WHEEL)
    }
    fn find_rank_of_n_oak(&self, n: u32) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    /// highest rank held exactly n times
    fn find_rank_of_n_oak_skip(&self, n: u32, skip: Option<Rank>) -> Option<Rank> {
        let hand = u64::from(self.0);
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| (hand & u64::from(*rank)).count_ones() == n)
    }
}

impl From<(Hand, Game)> for Category {
    fn from((hand, game): (Hand, Game)) -> Self {
        Evaluator::from(hand).classify(game)
    }
}
