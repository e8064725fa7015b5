//! Snapshot sinks
//!
//! Every sink implements [`SnapshotSink`](crate::solver::SnapshotSink) and
//! receives the field after each completed step.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── recorder.rs         ← In-memory (SnapshotRecorder, NullSink)
//! ├── pacing.rs           ← Paced<S>: pause after each snapshot
//! ├── visualization/      ← PNG/SVG profile charts
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use advdiff_rs::output::{CsvConfig, CsvSink, Paced, ProfilePlotter, PlotConfig};
//! use std::time::Duration;
//!
//! let plotter = ProfilePlotter::new("ftcs.png", &grid, &initial, PlotConfig::profile("FTCS"));
//! let mut sink = Paced::new(plotter, Duration::from_millis(1));
//! stepper.run(&mut sink)?;
//! sink.finish()?;
//! ```

pub mod export;
pub mod pacing;
pub mod recorder;
pub mod visualization;

pub use export::{CsvConfig, CsvMetadata, CsvSink};
pub use pacing::Paced;
pub use recorder::{NullSink, SnapshotRecorder};
pub use visualization::{plot_profile, PlotConfig, ProfilePlotter};
