use super::batch::Batch;
use super::interrupt::Interrupt;
use super::space::Space;
use crate::cards::Permutation;
use crate::paytable::Paytable;
use crate::strategy::Engine;
use crate::strategy::Record;
use std::ops::Range;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

/// One blocking compute loop over a contiguous range of classes.
///
/// Hands are solved and emitted in range order. The worker holds no state
/// shared with its siblings beyond the read-only space.
pub struct Worker {
    index: usize,
    range: Range<usize>,
    batch: usize,
    space: Arc<Space>,
    paytable: Arc<Paytable>,
    interrupt: Interrupt,
    tx: Sender<Batch>,
}

impl Worker {
    pub fn new(
        index: usize,
        range: Range<usize>,
        batch: usize,
        space: Arc<Space>,
        paytable: Arc<Paytable>,
        interrupt: Interrupt,
        tx: Sender<Batch>,
    ) -> Self {
        Self {
            index,
            range,
            batch,
            space,
            paytable,
            interrupt,
            tx,
        }
    }

    /// solve every class in range, returning the number of hands emitted.
    /// stops early, without error, on interrupt or if the receiver is gone.
    pub fn run(self) -> anyhow::Result<usize> {
        let engine = Engine::from(self.paytable.as_ref());
        let mut records = Vec::with_capacity(self.batch);
        let mut progress = 0;
        for class in self.space.classes(self.range.clone()) {
            if self.interrupt.tripped() {
                log::debug!("worker {} interrupted after {} hands", self.index, progress);
                break;
            }
            let Some((_, representative)) = class.first() else {
                continue;
            };
            let analysis = engine.analyze(representative);
            for (key, deal) in class {
                let align = Permutation::align(deal, representative).ok_or_else(|| {
                    anyhow::anyhow!("{} is not isomorphic to {}", deal, representative)
                })?;
                records.push(Record::from((self.paytable.id(), *key, &analysis.remap(&align))));
                progress += 1;
                if records.len() >= self.batch && !self.flush(&mut records, progress) {
                    return Ok(progress);
                }
            }
        }
        if !records.is_empty() {
            self.flush(&mut records, progress);
        }
        Ok(progress)
    }

    /// false once the coordinator has hung up
    fn flush(&self, records: &mut Vec<Record>, progress: usize) -> bool {
        let batch = Batch {
            worker: self.index,
            progress,
            records: std::mem::replace(records, Vec::with_capacity(self.batch)),
        };
        self.tx.blocking_send(batch).is_ok()
    }
}
