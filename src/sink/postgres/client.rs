use super::schema::*;
use crate::cards::CanonicalKey;
use crate::sink::Sink;
use crate::sink::Source;
use crate::strategy::Record;
use anyhow::Context;
use std::collections::BTreeSet;
use tokio_postgres::Client;
use tokio_postgres::Row;

#[async_trait::async_trait]
impl Sink for Client {
    /// statements are pipelined over the one connection
    async fn upsert(&self, records: &[Record]) -> anyhow::Result<()> {
        let ref statement = self.prepare(UPSERT).await.context("prepare upsert")?;
        futures::future::try_join_all(records.iter().map(|record| {
            let evs = record.evs.to_vec();
            async move {
                self.execute(
                    statement,
                    &[
                        &record.paytable,
                        &record.key.as_str(),
                        &(u8::from(record.hold) as i16),
                        &record.ev,
                        &evs,
                    ],
                )
                .await
            }
        }))
        .await
        .context("strategy upsert")?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Source for Client {
    async fn lookup(&self, paytable: &str, key: CanonicalKey) -> anyhow::Result<Option<Record>> {
        self.query_opt(LOOKUP, &[&paytable, &key.as_str()])
            .await
            .context("strategy lookup")?
            .map(decode)
            .transpose()
    }
    async fn export(&self, paytable: &str) -> anyhow::Result<Vec<Record>> {
        self.query(EXPORT, &[&paytable])
            .await
            .context("strategy export")?
            .into_iter()
            .map(decode)
            .collect()
    }
    async fn count(&self, paytable: &str) -> anyhow::Result<usize> {
        Ok(self
            .query_one(COUNT, &[&paytable])
            .await
            .context("strategy count")?
            .get::<_, i64>(0) as usize)
    }
    async fn keys(&self, paytable: &str) -> anyhow::Result<BTreeSet<CanonicalKey>> {
        self.query(KEYS, &[&paytable])
            .await
            .context("strategy keys")?
            .into_iter()
            .map(|row| {
                CanonicalKey::try_from(row.get::<_, &str>(0)).map_err(anyhow::Error::msg)
            })
            .collect()
    }
}

fn decode(row: Row) -> anyhow::Result<Record> {
    Record::decode(
        row.get::<_, String>(0),
        row.get::<_, &str>(1),
        row.get::<_, i16>(2),
        row.get::<_, f64>(3),
        row.get::<_, Vec<f64>>(4),
    )
}
