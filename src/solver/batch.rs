use crate::strategy::Record;

/// Records shipped from a worker to the coordinator in one message.
#[derive(Debug)]
pub struct Batch {
    pub worker: usize,
    /// hands this worker has finished so far, this batch included
    pub progress: usize,
    pub records: Vec<Record>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
