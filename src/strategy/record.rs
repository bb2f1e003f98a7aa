use super::analysis::Analysis;
use super::expectation::round;
use super::hold::Hold;
use crate::N_HOLDS;
use crate::Utility;
use crate::cards::canonical::CanonicalKey;

/// One persisted row: the solved strategy of a canonical hand under one
/// pay schedule. Hold positions index the deck-ordered representative.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub paytable: String,
    pub key: CanonicalKey,
    pub hold: Hold,
    pub ev: Utility,
    pub evs: [Utility; N_HOLDS],
}

impl From<(&str, CanonicalKey, &Analysis)> for Record {
    fn from((paytable, key, analysis): (&str, CanonicalKey, &Analysis)) -> Self {
        Self {
            paytable: paytable.to_string(),
            key,
            hold: analysis.best(),
            ev: analysis.best_ev().rounded(),
            evs: analysis.evs().map(|e| e.rounded()),
        }
    }
}

impl Record {
    /// rebuild from stored columns at the persisted precision
    pub fn decode(
        paytable: String,
        key: &str,
        hold: i16,
        ev: Utility,
        evs: Vec<Utility>,
    ) -> anyhow::Result<Self> {
        let key = CanonicalKey::try_from(key).map_err(anyhow::Error::msg)?;
        let hold = u8::try_from(hold)
            .map_err(anyhow::Error::from)
            .and_then(|h| Hold::try_from(h).map_err(anyhow::Error::msg))?;
        let evs = <[Utility; N_HOLDS]>::try_from(evs)
            .map_err(|v| anyhow::anyhow!("expected {} hold evs, found {}", N_HOLDS, v.len()))?;
        Ok(Self {
            paytable,
            key,
            hold,
            ev: round(ev),
            evs: evs.map(round),
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<28}{:<12}{:>4}{:>14.6}", self.paytable, self.key, self.hold, self.ev)
    }
}
