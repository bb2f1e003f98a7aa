//! Persistence of solved strategies, keyed by (paytable, canonical key).
mod memory;
pub use memory::*;

#[cfg(feature = "database")]
pub mod postgres;

use crate::cards::CanonicalKey;
use crate::strategy::Record;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Sink defines the write interface of the strategy store.
/// Upserts are idempotent: a repeated key overwrites, never duplicates.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    async fn upsert(&self, records: &[Record]) -> anyhow::Result<()>;
}

/// Source defines the read interface used by lookups, exports and resumption.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn lookup(&self, paytable: &str, key: CanonicalKey) -> anyhow::Result<Option<Record>>;
    /// every record of a paytable, ordered by key
    async fn export(&self, paytable: &str) -> anyhow::Result<Vec<Record>>;
    async fn count(&self, paytable: &str) -> anyhow::Result<usize>;
    async fn keys(&self, paytable: &str) -> anyhow::Result<BTreeSet<CanonicalKey>>;
}

#[async_trait::async_trait]
impl<T: Sink + ?Sized> Sink for Arc<T> {
    async fn upsert(&self, records: &[Record]) -> anyhow::Result<()> {
        self.as_ref().upsert(records).await
    }
}

#[async_trait::async_trait]
impl<T: Source + ?Sized> Source for Arc<T> {
    async fn lookup(&self, paytable: &str, key: CanonicalKey) -> anyhow::Result<Option<Record>> {
        self.as_ref().lookup(paytable, key).await
    }
    async fn export(&self, paytable: &str) -> anyhow::Result<Vec<Record>> {
        self.as_ref().export(paytable).await
    }
    async fn count(&self, paytable: &str) -> anyhow::Result<usize> {
        self.as_ref().count(paytable).await
    }
    async fn keys(&self, paytable: &str) -> anyhow::Result<BTreeSet<CanonicalKey>> {
        self.as_ref().keys(paytable).await
    }
}
