use crate::PROGRESS_LOG_INTERVAL;
use std::time::Instant;

/// Tracks computed and persisted hands of one run, logging at most once
/// per interval.
pub struct Progress {
    total: usize,
    computed: usize,
    persisted: usize,
    last: usize,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        let now = Instant::now();
        Self {
            total,
            computed: 0,
            persisted: 0,
            last: 0,
            begin: now,
            delta: now,
        }
    }
    pub fn compute(&mut self, computed: usize) {
        self.computed = computed;
        self.check();
    }
    pub fn persist(&mut self, n: usize) {
        self.persisted += n;
        self.check();
    }
    pub fn computed(&self) -> usize {
        self.computed
    }
    pub fn persisted(&self) -> usize {
        self.persisted
    }
    fn check(&mut self) {
        if self.delta.elapsed() >= PROGRESS_LOG_INTERVAL {
            self.log();
        }
    }
    pub fn log(&mut self) {
        let now = Instant::now();
        let total_t = now.duration_since(self.begin);
        let delta_t = now.duration_since(self.delta);
        log::info!(
            "progress: {:8.0?} computed {:>7} persisted {:>7} {:6.2}%   mean {:6.0}/s   last {:6.0}/s",
            total_t,
            self.computed,
            self.persisted,
            self.persisted as f32 / self.total.max(1) as f32 * 100f32,
            self.computed as f32 / total_t.as_secs_f32(),
            (self.computed - self.last) as f32 / delta_t.as_secs_f32(),
        );
        self.last = self.computed;
        self.delta = now;
    }
}
