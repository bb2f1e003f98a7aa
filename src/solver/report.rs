use std::ops::Range;
use std::time::Duration;

/// Outcome of solving one paytable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub paytable: String,
    /// canonical keys this run was asked to solve
    pub expected: usize,
    pub computed: usize,
    pub persisted: usize,
    /// class ranges whose worker died, for a targeted re-run
    pub failed: Vec<Range<usize>>,
    pub interrupted: bool,
    pub elapsed: Duration,
}

impl Report {
    pub fn new(paytable: &str, expected: usize) -> Self {
        Self {
            paytable: paytable.to_string(),
            expected,
            ..Self::default()
        }
    }
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && !self.interrupted && self.persisted == self.expected
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: persisted {} of {} ({} computed) in {:.1?}",
            self.paytable, self.persisted, self.expected, self.computed, self.elapsed
        )?;
        if self.interrupted {
            write!(f, ", interrupted")?;
        }
        for range in self.failed.iter() {
            write!(f, ", failed classes {}..{}", range.start, range.end)?;
        }
        Ok(())
    }
}

/// A run that did not persist its whole space, with what it did persist.
#[derive(Debug)]
pub struct Failure {
    pub report: Report,
    pub cause: anyhow::Error,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.report, self.cause)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}
