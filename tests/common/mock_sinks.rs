//! Sinks with controlled behavior for integration tests

use advdiff_rs::error::{Result, TransportError};
use advdiff_rs::physics::Field;
use advdiff_rs::solver::SnapshotSink;

/// Counts accepts and finishes without storing anything
#[derive(Debug, Default)]
pub struct CountingSink {
    pub accepted: usize,
    pub finished: usize,
}

impl SnapshotSink for CountingSink {
    fn accept(&mut self, _field: &Field) -> Result<()> {
        self.accepted += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished += 1;
        Ok(())
    }
}

/// Refuses the `fail_at`-th snapshot (1-based)
#[derive(Debug)]
pub struct FailingSink {
    pub fail_at: usize,
    pub seen: usize,
}

impl FailingSink {
    pub fn new(fail_at: usize) -> Self {
        Self { fail_at, seen: 0 }
    }
}

impl SnapshotSink for FailingSink {
    fn accept(&mut self, _field: &Field) -> Result<()> {
        self.seen += 1;
        if self.seen == self.fail_at {
            return Err(TransportError::sink(format!("refused snapshot {}", self.seen)));
        }
        Ok(())
    }
}
