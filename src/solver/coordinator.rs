use super::batch::Batch;
use super::interrupt::Interrupt;
use super::progress::Progress;
use super::report::Failure;
use super::report::Report;
use super::retry;
use super::settings::Settings;
use super::space::Space;
use super::worker::Worker;
use crate::paytable::Paytable;
use crate::sink::Sink;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::sync::mpsc;
use tokio::task::JoinError;
use tokio::task::JoinSet;

type Upload = Result<anyhow::Result<usize>, JoinError>;
type Joined = Result<(Range<usize>, anyhow::Result<usize>), JoinError>;

/// Drives one paytable through the hand space.
///
/// Blocking workers stream batches over a bounded channel; each batch is
/// forwarded to the sink as its own task, with at most `inflight` uploads
/// outstanding. When uploads lag, the coordinator stops receiving and the
/// full channel parks the workers. A batch that exhausts its retries halts
/// the run, which then drains whatever is still in flight and reports.
pub struct Solver<S: ?Sized> {
    sink: Arc<S>,
    settings: Settings,
    interrupt: Interrupt,
}

impl<S> Solver<S>
where
    S: Sink + ?Sized + 'static,
{
    pub fn new(sink: Arc<S>, settings: Settings, interrupt: Interrupt) -> Self {
        Self {
            sink,
            settings,
            interrupt,
        }
    }

    pub async fn solve(&self, paytable: Arc<Paytable>, space: Arc<Space>) -> Result<Report, Failure> {
        let begin = Instant::now();
        let halt = self.interrupt.child();
        let mut report = Report::new(paytable.id(), space.n_hands());
        let mut progress = Progress::new(space.n_hands());
        let mut cause = None::<anyhow::Error>;
        log::info!("solving {} ({} hands, {})", paytable, space.n_hands(), self.settings);

        let chunks = space.chunks(self.settings.workers);
        let mut counts = vec![0; chunks.len()];
        let (tx, mut rx) = mpsc::channel::<Batch>(self.settings.channel.max(1));
        let mut workers = JoinSet::new();
        for (index, range) in chunks.into_iter().enumerate() {
            let worker = Worker::new(
                index,
                range.clone(),
                self.settings.batch,
                space.clone(),
                paytable.clone(),
                halt.clone(),
                tx.clone(),
            );
            workers.spawn_blocking(move || {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| worker.run()))
                    .unwrap_or_else(|panic| Err(anyhow::anyhow!("worker panicked: {}", describe(&panic))));
                (range, result)
            });
        }
        drop(tx);

        let semaphore = Arc::new(Semaphore::new(self.settings.inflight.max(1)));
        let mut uploads = JoinSet::<anyhow::Result<usize>>::new();
        while cause.is_none() {
            tokio::select! {
                batch = rx.recv() => match batch {
                    None => break,
                    Some(batch) => {
                        counts[batch.worker] = batch.progress;
                        progress.compute(counts.iter().sum());
                        match semaphore.clone().acquire_owned().await {
                            Err(e) => cause = Some(e.into()),
                            Ok(permit) => {
                                let sink = self.sink.clone();
                                let attempts = self.settings.attempts;
                                let backoff = self.settings.backoff;
                                uploads.spawn(async move {
                                    let _permit = permit;
                                    retry::upsert(sink.as_ref(), &batch.records, attempts, backoff)
                                        .await
                                        .map(|()| batch.len())
                                });
                            }
                        }
                    }
                },
                Some(done) = uploads.join_next() => Self::settle(done, &mut progress, &mut cause),
            }
            if cause.is_some() {
                halt.trip();
            }
        }
        drop(rx);

        while let Some(done) = uploads.join_next().await {
            Self::settle(done, &mut progress, &mut cause);
        }
        while let Some(joined) = workers.join_next().await {
            Self::reap(joined, &mut report, &mut cause);
        }

        report.computed = counts.iter().sum();
        report.persisted = progress.persisted();
        report.interrupted = self.interrupt.tripped();
        report.elapsed = begin.elapsed();
        progress.log();
        if cause.is_none() && report.interrupted {
            cause = Some(anyhow::anyhow!("interrupted"));
        }
        if cause.is_none() && report.persisted != report.expected {
            cause = Some(anyhow::anyhow!(
                "persisted {} of {} hands",
                report.persisted,
                report.expected
            ));
        }
        match cause {
            None => {
                log::info!("{}", report);
                Ok(report)
            }
            Some(cause) => {
                let failure = Failure { report, cause };
                log::error!("{}", failure);
                Err(failure)
            }
        }
    }

    fn settle(done: Upload, progress: &mut Progress, cause: &mut Option<anyhow::Error>) {
        match done {
            Ok(Ok(n)) => progress.persist(n),
            Ok(Err(e)) => {
                cause.get_or_insert(e);
            }
            Err(e) => {
                cause.get_or_insert(anyhow::Error::from(e).context("upload task"));
            }
        }
    }

    fn reap(joined: Joined, report: &mut Report, cause: &mut Option<anyhow::Error>) {
        match joined {
            Ok((_, Ok(_))) => {}
            Ok((range, Err(e))) => {
                log::error!("worker on classes {}..{} failed: {:#}", range.start, range.end, e);
                cause.get_or_insert(e.context(format!("worker on classes {}..{}", range.start, range.end)));
                report.failed.push(range);
            }
            Err(e) => {
                cause.get_or_insert(anyhow::Error::from(e).context("worker task"));
            }
        }
    }
}

fn describe(panic: &Box<dyn std::any::Any + Send>) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default()
}
