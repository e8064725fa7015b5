//! Spatial profile charts
//!
//! The chart shows the initial condition as a line in the background and the
//! evolved field as markers on top, so translation and smoothing read
//! directly off the picture.
//!
//! # Usage
//!
//! ```rust,ignore
//! use advdiff_rs::output::visualization::{PlotConfig, ProfilePlotter};
//!
//! let mut plotter = ProfilePlotter::new("lf.png", &grid, &initial, PlotConfig::profile("Lax-Friedrichs"));
//! stepper.run(&mut plotter)?;
//! plotter.finish()?;
//! ```
//!
//! The backend is chosen from the file extension: `.svg` renders an SVG,
//! anything else a bitmap.

use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

use super::config::PlotConfig;
use crate::error::{Result, TransportError};
use crate::physics::{Field, Grid};
use crate::solver::SnapshotSink;

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot an initial and an evolved profile on the same axes
///
/// # Errors
///
/// `Sink` when the inputs have mismatched lengths or the backend fails.
pub fn plot_profile(
    positions: &[f64],
    initial: &[f64],
    evolved: &[f64],
    output_path: impl AsRef<Path>,
    config: &PlotConfig,
) -> Result<()> {
    if positions.is_empty() {
        return Err(TransportError::sink("cannot plot an empty profile"));
    }

    if initial.len() != positions.len() || evolved.len() != positions.len() {
        return Err(TransportError::sink(format!(
            "profile length mismatch: {} positions, {} initial, {} evolved",
            positions.len(),
            initial.len(),
            evolved.len()
        )));
    }

    let output_path = output_path.as_ref();
    let spacing = if positions.len() > 1 { positions[1] - positions[0] } else { 1.0 };
    let x_max = positions[positions.len() - 1] + spacing;
    let y_bounds = config.y_bounds(initial.iter().chain(evolved.iter()));

    let ext = output_path.extension().and_then(|s| s.to_str()).unwrap_or("png");

    let rendered = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, positions, initial, evolved, config, x_max, y_bounds)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, positions, initial, evolved, config, x_max, y_bounds)
        }
    };

    rendered.map_err(|e| {
        TransportError::sink(format!("cannot render {}: {}", output_path.display(), e))
    })
}

/// Implementation for profile plotting with concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    positions: &[f64],
    initial: &[f64],
    evolved: &[f64],
    config: &PlotConfig,
    x_max: f64,
    (y_min, y_max): (f64, f64),
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    let initial_color = config.initial_color;
    chart
        .draw_series(LineSeries::new(
            positions.iter().zip(initial.iter()).map(|(x, f)| (*x, *f)),
            ShapeStyle::from(&initial_color).stroke_width(config.line_width),
        ))?
        .label("Initial")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], initial_color));

    let evolved_color = config.evolved_color;
    chart
        .draw_series(
            positions
                .iter()
                .zip(evolved.iter())
                .filter(|(_, f)| f.is_finite())
                .map(|(x, f)| Circle::new((*x, *f), config.point_size, evolved_color.filled())),
        )?
        .label("Evolved")
        .legend(move |(x, y)| Circle::new((x + 10, y), 3, evolved_color.filled()));

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Profile Plotter Sink
// =================================================================================================

/// Sink rendering the latest snapshot against the initial condition
///
/// Snapshots only update the in-memory profile; the image is written by
/// [`finish`](SnapshotSink::finish), or earlier with
/// [`render`](ProfilePlotter::render).
pub struct ProfilePlotter {
    output_path: PathBuf,
    config: PlotConfig,
    positions: Vec<f64>,
    initial: Vec<f64>,
    latest: Vec<f64>,
    frames: usize,
}

impl ProfilePlotter {
    /// Plot to `output_path` on `grid`, starting from `initial`
    pub fn new(output_path: impl Into<PathBuf>, grid: &Grid, initial: &Field, config: PlotConfig) -> Self {
        Self {
            output_path: output_path.into(),
            config,
            positions: grid.positions(),
            initial: initial.to_vec(),
            latest: initial.to_vec(),
            frames: 0,
        }
    }

    /// Snapshots received so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Latest profile
    pub fn latest(&self) -> &[f64] {
        &self.latest
    }

    /// Output file
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write the image now
    pub fn render(&self) -> Result<()> {
        plot_profile(&self.positions, &self.initial, &self.latest, &self.output_path, &self.config)?;
        log::debug!("Profile written to {} after {} frames", self.output_path.display(), self.frames);
        Ok(())
    }
}

impl SnapshotSink for ProfilePlotter {
    fn accept(&mut self, field: &Field) -> Result<()> {
        if field.len() != self.positions.len() {
            return Err(TransportError::sink(format!(
                "snapshot has {} cells, plot has {} positions",
                field.len(),
                self.positions.len()
            )));
        }

        self.latest.copy_from_slice(field.as_slice());
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.render()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
