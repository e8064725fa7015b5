//! CSV snapshot sink
//!
//! Streams one row per completed step to any `std::io::Write`, which makes
//! the output readable from Excel, pandas or gnuplot without keeping the run
//! in memory.
//!
//! # Format
//!
//! ```csv
//! # Advection-Diffusion Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Scenario: Lax-Friedrichs, D = 1
//! # Scheme: Lax-Friedrichs
//! # Cells: 3
//! # Advection factor: -0.05
//! # Diffusion factor: 1
//! #
//! step,x_0,x_1,x_2
//! 1,0.000000,1.100000,2.000000
//! ```
//!
//! The metadata block is only written when enabled in [`CsvConfig`]. The
//! column header is written lazily with the first snapshot, once the field
//! length is known.
//!
//! # Example
//!
//! ```rust,ignore
//! use advdiff_rs::output::export::{CsvConfig, CsvMetadata, CsvSink};
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_scenario(&scenario, &grid));
//! let mut sink = CsvSink::create("run.csv", config)?;
//! stepper.run(&mut sink)?;
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TransportError};
use crate::physics::{Field, Grid};
use crate::solver::{Scenario, SnapshotSink};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV output
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Write the `#` comment block before the header (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the comment block
    pub metadata: Option<CsvMetadata>,

    /// Header of the step column (default: "step")
    pub step_header: String,

    /// Prefix of the cell columns (default: "x_", giving `x_0`, `x_1`, ...)
    pub cell_prefix: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            step_header: "step".to_string(),
            cell_prefix: "x_".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV: semicolon delimiter, comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for the CSV comment block
///
/// Only fields that are set are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Scenario label
    pub scenario: Option<String>,

    /// Advection scheme name
    pub scheme: Option<String>,

    /// Number of cells
    pub cell_count: Option<usize>,

    /// Cell spacing Δx
    pub spacing: Option<f64>,

    /// Time step Δt
    pub time_step: Option<f64>,

    /// Velocity u
    pub velocity: Option<f64>,

    /// Diffusion coefficient D
    pub diffusion_coefficient: Option<f64>,

    /// u·Δt / (2·Δx)
    pub advection_factor: Option<f64>,

    /// β = D·Δt / Δx²
    pub diffusion_factor: Option<f64>,

    /// Additional key/value lines
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Everything known about a scenario on a grid
    pub fn from_scenario(scenario: &Scenario, grid: &Grid) -> Self {
        let parameters = scenario.parameters();

        Self {
            scenario: Some(scenario.label().to_string()),
            scheme: Some(scenario.advection_scheme().name().to_string()),
            cell_count: Some(grid.cell_count()),
            spacing: Some(grid.spacing()),
            time_step: Some(parameters.time_step),
            velocity: Some(parameters.velocity),
            diffusion_coefficient: Some(parameters.diffusion_coefficient),
            advection_factor: Some(scenario.advection_factor(grid)),
            diffusion_factor: Some(scenario.diffusion_factor(grid)),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(writer, "# Advection-Diffusion Simulation Data")?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(scenario) = &metadata.scenario {
        writeln!(writer, "# Scenario: {}", scenario)?;
    }
    if let Some(scheme) = &metadata.scheme {
        writeln!(writer, "# Scheme: {}", scheme)?;
    }
    if let Some(cells) = metadata.cell_count {
        writeln!(writer, "# Cells: {}", cells)?;
    }
    if let Some(dx) = metadata.spacing {
        writeln!(writer, "# Spacing: {}", dx)?;
    }
    if let Some(dt) = metadata.time_step {
        writeln!(writer, "# Time step: {}", dt)?;
    }
    if let Some(u) = metadata.velocity {
        writeln!(writer, "# Velocity: {}", u)?;
    }
    if let Some(d) = metadata.diffusion_coefficient {
        writeln!(writer, "# Diffusion coefficient: {}", d)?;
    }
    if let Some(factor) = metadata.advection_factor {
        writeln!(writer, "# Advection factor: {}", factor)?;
    }
    if let Some(beta) = metadata.diffusion_factor {
        writeln!(writer, "# Diffusion factor: {}", beta)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn write_failed(error: std::io::Error) -> TransportError {
    TransportError::sink(format!("CSV write failed: {}", error))
}

// =============================================================================
// CSV Sink
// =============================================================================

/// Writes one CSV row per snapshot
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
    config: CsvConfig,
    rows: usize,
    columns: Option<usize>,
}

impl CsvSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write to it
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be created. Nothing has been written yet, so
    /// this is not a sink failure.
    pub fn create(path: impl AsRef<Path>, config: CsvConfig) -> Result<Self> {
        let file = File::create(path)?;

        Ok(Self::new(BufWriter::new(file), config))
    }
}

impl<W: Write> CsvSink<W> {
    /// Write to an arbitrary writer
    pub fn new(writer: W, config: CsvConfig) -> Self {
        Self { writer, config, rows: 0, columns: None }
    }

    /// Rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_preamble(&mut self, cells: usize) -> std::io::Result<()> {
        if self.config.include_metadata
            && let Some(metadata) = &self.config.metadata
        {
            write_metadata_header(&mut self.writer, metadata)?;
        }

        write!(self.writer, "{}", self.config.step_header)?;
        for i in 0..cells {
            write!(self.writer, "{}{}{}", self.config.delimiter, self.config.cell_prefix, i)?;
        }
        writeln!(self.writer)
    }

    fn write_row(&mut self, field: &Field) -> std::io::Result<()> {
        write!(self.writer, "{}", self.rows + 1)?;
        for value in field.as_slice() {
            write!(self.writer, "{}{}", self.config.delimiter, format_number(*value, &self.config))?;
        }
        writeln!(self.writer)
    }
}

impl<W: Write> SnapshotSink for CsvSink<W> {
    fn accept(&mut self, field: &Field) -> Result<()> {
        match self.columns {
            None => {
                self.write_preamble(field.len()).map_err(write_failed)?;
                self.columns = Some(field.len());
            }
            Some(columns) if columns != field.len() => {
                return Err(TransportError::sink(format!(
                    "snapshot has {} cells, CSV has {} columns",
                    field.len(),
                    columns
                )));
            }
            Some(_) => {}
        }

        self.write_row(field).map_err(write_failed)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(write_failed)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::TransportParameters;
    use crate::solver::SchemeKind;
    use std::fs;
    use tempfile::NamedTempFile;

    fn output(sink: CsvSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_rows_and_header() {
        let mut sink = CsvSink::new(Vec::new(), CsvConfig::default().precision(1));

        sink.accept(&Field::from_vec(vec![0.0, 1.1, 2.0])).unwrap();
        sink.accept(&Field::from_vec(vec![0.0, 1.2, 2.0])).unwrap();
        sink.finish().unwrap();

        assert_eq!(sink.rows(), 2);
        assert_eq!(output(sink), "step,x_0,x_1,x_2\n1,0.0,1.1,2.0\n2,0.0,1.2,2.0\n");
    }

    #[test]
    fn test_european_format() {
        let mut sink = CsvSink::new(Vec::new(), CsvConfig::european().precision(2));

        sink.accept(&Field::from_vec(vec![0.5, 1.25, 2.0])).unwrap();

        assert_eq!(output(sink), "step;x_0;x_1;x_2\n1;0,50;1,25;2,00\n");
    }

    #[test]
    fn test_metadata_block() {
        let grid = Grid::new(3, 1.0).unwrap();
        let parameters = TransportParameters::new(-0.1, 1.0, 1.0).unwrap();
        let scenario = Scenario::new(parameters, SchemeKind::LaxFriedrichs);
        let mut metadata = CsvMetadata::from_scenario(&scenario, &grid);
        metadata.add_custom("Run", "unit test");

        let mut sink = CsvSink::new(Vec::new(), CsvConfig::default().with_metadata(metadata));
        sink.accept(&Field::from_vec(vec![0.0, 1.0, 2.0])).unwrap();
        let text = output(sink);

        assert!(text.starts_with("# Advection-Diffusion Simulation Data\n# Generated: "));
        assert!(text.contains("# Scheme: Lax-Friedrichs\n"));
        assert!(text.contains("# Advection factor: -0.05\n"));
        assert!(text.contains("# Diffusion factor: 1\n"));
        assert!(text.contains("# Run: unit test\n"));
        assert!(text.contains("#\nstep,x_0,x_1,x_2\n"));
    }

    #[test]
    fn test_length_change_rejected() {
        let mut sink = CsvSink::new(Vec::new(), CsvConfig::default());
        sink.accept(&Field::uniform(3, 0.0)).unwrap();

        let error = sink.accept(&Field::uniform(4, 0.0)).unwrap_err();
        assert!(matches!(error, TransportError::Sink(_)));
    }

    #[test]
    fn test_file_output() {
        let temp = NamedTempFile::new().unwrap();

        let mut sink = CsvSink::create(temp.path(), CsvConfig::high_precision()).unwrap();
        for step in 0..4 {
            sink.accept(&Field::uniform(5, step as f64)).unwrap();
        }
        sink.finish().unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "step,x_0,x_1,x_2,x_3,x_4");
        assert!(lines[4].starts_with("4,3.000000000000,"));
    }

    #[test]
    fn test_create_in_missing_directory() {
        let result = CsvSink::create("/nonexistent/dir/run.csv", CsvConfig::default());
        assert!(matches!(result.unwrap_err(), TransportError::Io(_)));
    }
}
