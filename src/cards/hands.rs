use super::hand::Hand;

/// HandIterator yields every Hand of exactly n cards that avoids a mask of
/// blocked cards. It is how the draw after a hold is enumerated: the mask is
/// the five dealt cards, n is the number of discards.
///
/// The state is a single u64 advanced by Gosper's hack, so iteration is
/// allocation-free and always proceeds in the same (colexicographic) order.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// C(52 - |mask|, n)
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || (64 - 52) > self.next.leading_zeros()
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.exhausted() || self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction.
/// n = 0 yields nothing; the empty draw is handled by the caller.
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while !this.exhausted() && this.next & this.mask > 0 {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1010_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1011_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1100_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1101_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1110_00_0)));
    }

    #[test]
    fn draws_avoid_mask() {
        let mask = Hand::try_from("As Ks Qs Js Ts").unwrap();
        let iter = HandIterator::from((2, mask));
        assert_eq!(iter.combinations(), 1081);
        assert_eq!(
            HandIterator::from((2, mask))
                .inspect(|draw| assert!(u64::from(*draw) & u64::from(mask) == 0))
                .count(),
            1081
        );
    }

    #[test]
    fn empty_draw_is_empty() {
        assert_eq!(HandIterator::from((0, Hand::empty())).count(), 0);
    }

    #[test]
    fn exhaust_deals() {
        let iter = HandIterator::from((5, Hand::empty()));
        assert_eq!(iter.combinations(), crate::N_DEALS);
        assert_eq!(iter.count(), crate::N_DEALS);
    }

    #[test]
    fn exhaust_full_draw() {
        let mask = Hand::try_from("2h 7d 9c Jh Ks").unwrap();
        assert_eq!(HandIterator::from((5, mask)).count(), 1_533_939);
    }
}
