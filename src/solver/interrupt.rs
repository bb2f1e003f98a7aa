use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Cooperative cancellation token.
///
/// Workers poll it between hands. A child trips independently of its
/// parent but also observes the parent, so one failed run can halt its own
/// workers without cancelling the whole session.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
    parent: Option<Arc<AtomicBool>>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn child(&self) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            parent: Some(self.flag.clone()),
        }
    }
    pub fn trip(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
    pub fn tripped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self
                .parent
                .as_ref()
                .is_some_and(|p| p.load(Ordering::Relaxed))
    }
}
