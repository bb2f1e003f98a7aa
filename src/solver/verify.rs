use crate::N_CANONICAL;
use crate::Utility;
use crate::cards::CanonicalKey;
use crate::paytable::Paytable;
use crate::sink::Source;
use crate::strategy::Engine;
use crate::strategy::Record;
use anyhow::Context;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use std::sync::Arc;

/// stored values are rounded to EV_DECIMALS places
const TOLERANCE: Utility = 1e-6;

/// Stored strategies checked against a fresh computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub paytable: String,
    pub stored: usize,
    pub checked: usize,
    pub mismatches: Vec<CanonicalKey>,
}

impl Verification {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
    pub fn is_complete(&self) -> bool {
        self.stored == N_CANONICAL
    }
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {} of {} keys stored, {} checked, {} mismatched",
            self.paytable,
            self.stored,
            N_CANONICAL,
            self.checked,
            self.mismatches.len()
        )
    }
}

/// recompute `sample` random stored records, or all of them, and compare.
/// each key is decoded back into a deal, so nothing is trusted but the key.
pub async fn verify<S>(store: &S, paytable: Arc<Paytable>, sample: Option<usize>) -> anyhow::Result<Verification>
where
    S: Source + ?Sized,
{
    let id = paytable.id().to_string();
    let stored = store.count(&id).await?;
    let records = match sample {
        None => store.export(&id).await?,
        Some(n) => {
            use rand::seq::IndexedRandom;
            let keys = store.keys(&id).await?.into_iter().collect::<Vec<_>>();
            let picked = keys
                .choose_multiple(&mut rand::rng(), n)
                .copied()
                .collect::<Vec<_>>();
            let mut records = Vec::with_capacity(picked.len());
            for key in picked {
                records.extend(store.lookup(&id, key).await?);
            }
            records
        }
    };
    log::info!("verifying {} of {} stored records for {}", records.len(), stored, id);
    let checked = records.len();
    let mismatches = tokio::task::spawn_blocking(move || {
        let engine = Engine::from(paytable.as_ref());
        let mut mismatches = records
            .par_iter()
            .filter(|record| !agrees(&engine, record))
            .map(|record| record.key)
            .collect::<Vec<_>>();
        mismatches.sort();
        mismatches
    })
    .await
    .context("verification task")?;
    for key in mismatches.iter() {
        log::warn!("{} disagrees with a fresh computation for {}", key, id);
    }
    Ok(Verification {
        paytable: id,
        stored,
        checked,
        mismatches,
    })
}

fn agrees(engine: &Engine, stored: &Record) -> bool {
    match stored.key.deal() {
        None => false,
        Some(deal) => {
            let fresh = Record::from((stored.paytable.as_str(), stored.key, &engine.analyze(&deal)));
            fresh.hold == stored.hold
                && (fresh.ev - stored.ev).abs() <= TOLERANCE
                && fresh
                    .evs
                    .iter()
                    .zip(stored.evs.iter())
                    .all(|(a, b)| (a - b).abs() <= TOLERANCE)
        }
    }
}
