//! Data export
//!
//! Export formats are snapshot sinks: they receive the field after every step
//! and stream it to their destination.
//!
//! | Format | Module    |
//! |--------|-----------|
//! | CSV    | [`csv`]   |

pub mod csv;

pub use csv::{CsvConfig, CsvMetadata, CsvSink};
