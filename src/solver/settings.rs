use crate::BATCH_SIZE;
use crate::CHANNEL_CAPACITY;
use crate::MAX_INFLIGHT;
use crate::MAX_WORKERS;
use crate::UPSERT_ATTEMPTS;
use crate::UPSERT_BACKOFF;
use std::time::Duration;

/// Runtime knobs of a solve, fixed for the lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub workers: usize,
    pub batch: usize,
    pub channel: usize,
    pub inflight: usize,
    pub attempts: usize,
    pub backoff: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workers: num_cpus::get().clamp(1, MAX_WORKERS),
            batch: BATCH_SIZE,
            channel: CHANNEL_CAPACITY,
            inflight: MAX_INFLIGHT,
            attempts: UPSERT_ATTEMPTS,
            backoff: UPSERT_BACKOFF,
        }
    }
}

impl Settings {
    /// explicit worker count, still capped at MAX_WORKERS
    pub fn workers(self, n: usize) -> Self {
        Self {
            workers: n.clamp(1, MAX_WORKERS),
            ..self
        }
    }
    pub fn batch(self, n: usize) -> Self {
        Self {
            batch: n.max(1),
            ..self
        }
    }
    pub fn retries(self, attempts: usize, backoff: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            backoff,
            ..self
        }
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "workers={} batch={} inflight={} attempts={} backoff={:?}",
            self.workers, self.batch, self.inflight, self.attempts, self.backoff
        )
    }
}
