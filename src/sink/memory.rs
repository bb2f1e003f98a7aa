use super::Sink;
use super::Source;
use crate::cards::CanonicalKey;
use crate::strategy::Record;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// In-process strategy store for dry runs and tests.
#[derive(Debug, Default)]
pub struct Memory {
    rows: Mutex<BTreeMap<(String, CanonicalKey), Record>>,
    writes: AtomicUsize,
}

impl Memory {
    /// distinct rows currently stored
    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or_default()
    }
    /// records received across all upserts, duplicates included
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
    fn rows(
        &self,
    ) -> anyhow::Result<std::sync::MutexGuard<'_, BTreeMap<(String, CanonicalKey), Record>>> {
        self.rows
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))
    }
}

#[async_trait::async_trait]
impl Sink for Memory {
    async fn upsert(&self, records: &[Record]) -> anyhow::Result<()> {
        let mut rows = self.rows()?;
        for record in records {
            rows.insert((record.paytable.clone(), record.key), record.clone());
        }
        self.writes.fetch_add(records.len(), Ordering::Relaxed);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Source for Memory {
    async fn lookup(&self, paytable: &str, key: CanonicalKey) -> anyhow::Result<Option<Record>> {
        Ok(self.rows()?.get(&(paytable.to_string(), key)).cloned())
    }
    async fn export(&self, paytable: &str) -> anyhow::Result<Vec<Record>> {
        Ok(self
            .rows()?
            .values()
            .filter(|r| r.paytable == paytable)
            .cloned()
            .collect())
    }
    async fn count(&self, paytable: &str) -> anyhow::Result<usize> {
        Ok(self.rows()?.keys().filter(|(p, _)| p == paytable).count())
    }
    async fn keys(&self, paytable: &str) -> anyhow::Result<BTreeSet<CanonicalKey>> {
        Ok(self
            .rows()?
            .keys()
            .filter(|(p, _)| p == paytable)
            .map(|(_, k)| *k)
            .collect())
    }
}
