//! In-memory sinks
//!
//! [`SnapshotRecorder`] keeps every snapshot, for tests and post-run
//! analysis. [`NullSink`] throws them away, for runs where only the final
//! field matters.

use crate::error::Result;
use crate::physics::Field;
use crate::solver::SnapshotSink;

/// Keeps a copy of every accepted field
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<Field>,
    finished: bool,
}

impl SnapshotRecorder {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots in step order (index 0 is step 1)
    pub fn snapshots(&self) -> &[Field] {
        &self.snapshots
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&Field> {
        self.snapshots.last()
    }

    /// True once `finish` has been called
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Time series of one cell across all snapshots
    pub fn cell_history(&self, index: usize) -> Vec<f64> {
        self.snapshots
            .iter()
            .filter_map(|field| field.as_slice().get(index).copied())
            .collect()
    }

    /// Take the snapshots out
    pub fn into_snapshots(self) -> Vec<Field> {
        self.snapshots
    }
}

impl SnapshotSink for SnapshotRecorder {
    fn accept(&mut self, field: &Field) -> Result<()> {
        self.snapshots.push(field.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Discards every snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn accept(&mut self, _field: &Field) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = SnapshotRecorder::new();
        assert!(recorder.is_empty());

        recorder.accept(&Field::from_vec(vec![0.0, 1.0, 2.0])).unwrap();
        recorder.accept(&Field::from_vec(vec![0.0, 1.5, 2.0])).unwrap();

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.last().unwrap()[1], 1.5);
        assert_eq!(recorder.cell_history(1), vec![1.0, 1.5]);
        assert!(recorder.cell_history(5).is_empty());
    }

    #[test]
    fn test_recorder_finish() {
        let mut recorder = SnapshotRecorder::new();
        assert!(!recorder.is_finished());

        recorder.finish().unwrap();
        assert!(recorder.is_finished());
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NullSink;
        assert!(sink.accept(&Field::uniform(4, 1.0)).is_ok());
        assert!(sink.finish().is_ok());
    }
}
