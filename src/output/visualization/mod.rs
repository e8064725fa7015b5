//! Visualization of field profiles using the `plotters` library
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Initial vs evolved spatial profile (`plot_profile`, `ProfilePlotter`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use advdiff_rs::output::visualization::{plot_profile, PlotConfig};
//!
//! plot_profile(&grid.positions(), initial.as_slice(), evolved.as_slice(), "profile.png", &PlotConfig::profile("FTCS"))?;
//! ```

pub mod config;
pub mod profile;

pub use config::{IntoOptionalTitle, NO_TITLE, PlotConfig};

pub use profile::{plot_profile, ProfilePlotter};
