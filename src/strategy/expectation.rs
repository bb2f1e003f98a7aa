use crate::Payout;
use crate::Utility;
use std::cmp::Ordering;

/// Exact expected payout as a ratio of integers.
///
/// Every outcome of a draw is equally likely, so the expectation is the
/// summed payout over the outcome count. Comparisons cross-multiply, so
/// ties are detected exactly rather than through floating point.
#[derive(Debug, Default, Clone, Copy)]
pub struct Expectation {
    total: u64,
    count: u64,
}

impl Expectation {
    pub fn new(total: u64, count: u64) -> Self {
        Self { total, count }
    }
    /// a single deterministic outcome
    pub fn certain(payout: Payout) -> Self {
        Self::new(payout as u64, 1)
    }
    /// fold in one more equally-weighted outcome
    pub fn observe(self, payout: Payout) -> Self {
        Self::new(self.total + payout as u64, self.count + 1)
    }
    pub fn total(&self) -> u64 {
        self.total
    }
    pub fn count(&self) -> u64 {
        self.count
    }
    pub fn value(&self) -> Utility {
        match self.count {
            0 => 0.,
            n => self.total as Utility / n as Utility,
        }
    }
    /// the persisted fixed-precision value
    pub fn rounded(&self) -> Utility {
        round(self.value())
    }
}

pub fn round(ev: Utility) -> Utility {
    let scale = (10 as Utility).powi(crate::EV_DECIMALS);
    (ev * scale).round() / scale
}

impl Ord for Expectation {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.total as u128 * other.count.max(1) as u128;
        let rhs = other.total as u128 * self.count.max(1) as u128;
        lhs.cmp(&rhs)
    }
}
impl PartialOrd for Expectation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Expectation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Expectation {}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.6}", self.value())
    }
}
