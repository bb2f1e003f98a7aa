use crate::sink::Sink;
use crate::strategy::Record;
use std::time::Duration;

/// upsert with exponential backoff: backoff, 2 backoff, 4 backoff, ...
/// the last error is returned once all attempts are spent.
pub async fn upsert<S>(sink: &S, records: &[Record], attempts: usize, backoff: Duration) -> anyhow::Result<()>
where
    S: Sink + ?Sized,
{
    let mut attempt = 1;
    loop {
        match sink.upsert(records).await {
            Ok(()) => return Ok(()),
            Err(e) if attempt < attempts => {
                let delay = backoff.saturating_mul(1 << (attempt - 1).min(16));
                log::warn!(
                    "upsert of {} records failed (attempt {}/{}), retrying in {:?}: {:#}",
                    records.len(),
                    attempt,
                    attempts,
                    delay,
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                return Err(e.context(format!(
                    "upsert of {} records failed after {} attempts",
                    records.len(),
                    attempts
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    /// fails the first n calls
    struct Flaky(usize, AtomicUsize);

    #[async_trait::async_trait]
    impl Sink for Flaky {
        async fn upsert(&self, _: &[Record]) -> anyhow::Result<()> {
            match self.1.fetch_add(1, Ordering::SeqCst) < self.0 {
                true => anyhow::bail!("connection reset"),
                false => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn recovers_within_budget() {
        let sink = Flaky(2, AtomicUsize::new(0));
        assert!(upsert(&sink, &[], 3, Duration::from_millis(1)).await.is_ok());
        assert_eq!(sink.1.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let sink = Flaky(usize::MAX, AtomicUsize::new(0));
        let err = upsert(&sink, &[], 3, Duration::from_millis(1)).await.unwrap_err();
        assert_eq!(sink.1.load(Ordering::SeqCst), 3);
        assert!(format!("{:#}", err).contains("connection reset"));
    }
}
