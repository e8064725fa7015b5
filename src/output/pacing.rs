//! Paced sink wrapper
//!
//! Sleeps a fixed pause after every snapshot handed to the inner sink, so an
//! animation-style consumer can be watched step by step. The pause never
//! applies to `finish`.

use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::physics::Field;
use crate::solver::SnapshotSink;

/// Wraps a sink and pauses after each accepted field
#[derive(Debug, Clone)]
pub struct Paced<S> {
    inner: S,
    pause: Duration,
}

impl<S: SnapshotSink> Paced<S> {
    /// Wrap `inner`, pausing `pause` after each snapshot
    pub fn new(inner: S, pause: Duration) -> Self {
        Self { inner, pause }
    }

    /// Pause between snapshots
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Wrapped sink
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SnapshotSink> SnapshotSink for Paced<S> {
    fn accept(&mut self, field: &Field) -> Result<()> {
        self.inner.accept(field)?;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SnapshotRecorder;
    use std::time::Instant;

    #[test]
    fn test_forwards_to_inner() {
        let mut paced = Paced::new(SnapshotRecorder::new(), Duration::ZERO);

        paced.accept(&Field::uniform(3, 1.0)).unwrap();
        paced.accept(&Field::uniform(3, 2.0)).unwrap();
        paced.finish().unwrap();

        let recorder = paced.into_inner();
        assert_eq!(recorder.len(), 2);
        assert!(recorder.is_finished());
    }

    #[test]
    fn test_pauses_after_accept() {
        let pause = Duration::from_millis(5);
        let mut paced = Paced::new(SnapshotRecorder::new(), pause);

        let start = Instant::now();
        for _ in 0..3 {
            paced.accept(&Field::uniform(3, 0.0)).unwrap();
        }

        assert!(start.elapsed() >= pause * 3);
        assert_eq!(paced.pause(), pause);
        assert_eq!(paced.inner().len(), 3);
    }
}
