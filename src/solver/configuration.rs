//! Simulation configuration
//!
//! # Design
//!
//! `SimulationConfiguration` is the single construction-time input of a run.
//! It is a plain serde structure, so it can be built in code or read from a
//! JSON document, and [`validate`](SimulationConfiguration::validate) turns
//! every malformed value into a `Configuration` error before a single step is
//! taken.
//!
//! # Scenarios
//!
//! By default one scenario is created per entry of `diffusion_coefficients`,
//! all using `scheme`. An explicit `scenarios` list replaces that product and
//! lets each scenario pick its own coefficient, scheme and label.
//!
//! # Example
//!
//! ```rust
//! use advdiff_rs::solver::SimulationConfiguration;
//!
//! let configuration = SimulationConfiguration::from_json_str(r#"{
//!     "cell_count": 100,
//!     "spacing": 1.0,
//!     "time_step": 10.0,
//!     "velocity": -0.1,
//!     "diffusion_coefficients": [1.0, 5.0],
//!     "iteration_count": 100,
//!     "scheme": "lax-friedrichs"
//! }"#).unwrap();
//!
//! assert_eq!(configuration.scenario_list().unwrap().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TransportError};
use crate::physics::{Field, Grid, TransportParameters};
use crate::solver::diffusion::LinearSolverKind;
use crate::solver::scenario::Scenario;
use crate::solver::traits::SchemeKind;

// =================================================================================================
// Initial condition
// =================================================================================================

/// Field at step 0, shared by every scenario
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialCondition {
    /// `f_i = x_i / cell_count`
    #[default]
    LinearRamp,

    /// Explicit values, one per cell
    Profile(Vec<f64>),
}

impl InitialCondition {
    /// Materialize on a grid
    pub fn field(&self, grid: &Grid) -> Result<Field> {
        match self {
            InitialCondition::LinearRamp => Ok(Field::linear_ramp(grid)),
            InitialCondition::Profile(values) => Field::from_profile(grid, values),
        }
    }
}

// =================================================================================================
// Scenario configuration
// =================================================================================================

/// One entry of an explicit scenario list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfiguration {
    /// Diffusion coefficient of this scenario
    pub diffusion_coefficient: f64,

    /// Scheme identifier; falls back to the top-level `scheme`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Display label; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScenarioConfiguration {
    /// Scenario with the top-level scheme and a generated label
    pub fn new(diffusion_coefficient: f64) -> Self {
        Self { diffusion_coefficient, scheme: None, label: None }
    }

    /// Builder pattern: set the scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Builder pattern: set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// =================================================================================================
// Simulation configuration
// =================================================================================================

/// Complete configuration of a multi-scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfiguration {
    /// Number of grid cells (≥ 3)
    pub cell_count: usize,

    /// Distance between adjacent cells (> 0)
    pub spacing: f64,

    /// Δt shared by advection and diffusion (> 0)
    pub time_step: f64,

    /// Advection speed; sign gives the direction
    pub velocity: f64,

    /// One scenario per coefficient (≥ 0) unless `scenarios` is set
    #[serde(default)]
    pub diffusion_coefficients: Vec<f64>,

    /// Number of steps per scenario
    pub iteration_count: usize,

    /// Advection scheme identifier (`ftcs`, `lax-friedrichs`, ...)
    pub scheme: String,

    /// Explicit scenario list, overriding `diffusion_coefficients`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<ScenarioConfiguration>,

    /// Field at step 0
    #[serde(default)]
    pub initial_condition: InitialCondition,

    /// Factorization used by the diffusion operators
    #[serde(default)]
    pub linear_solver: LinearSolverKind,
}

impl SimulationConfiguration {
    /// Create a configuration with the default initial condition and solver
    pub fn new(
        cell_count: usize,
        spacing: f64,
        time_step: f64,
        velocity: f64,
        diffusion_coefficients: Vec<f64>,
        iteration_count: usize,
        scheme: impl Into<String>,
    ) -> Self {
        Self {
            cell_count,
            spacing,
            time_step,
            velocity,
            diffusion_coefficients,
            iteration_count,
            scheme: scheme.into(),
            scenarios: Vec::new(),
            initial_condition: InitialCondition::default(),
            linear_solver: LinearSolverKind::default(),
        }
    }

    /// Builder pattern: explicit scenario list
    pub fn with_scenarios(mut self, scenarios: Vec<ScenarioConfiguration>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Builder pattern: initial condition
    pub fn with_initial_condition(mut self, initial_condition: InitialCondition) -> Self {
        self.initial_condition = initial_condition;
        self
    }

    /// Builder pattern: factorization strategy
    pub fn with_linear_solver(mut self, linear_solver: LinearSolverKind) -> Self {
        self.linear_solver = linear_solver;
        self
    }

    // ====================================== Loading ======================================

    /// Parse a JSON document
    ///
    /// Parsing failures are reported as `Configuration` errors. The result is
    /// not validated yet.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TransportError::configuration(format!("invalid configuration: {}", e)))
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TransportError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_json_str(&content)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TransportError::configuration(format!("cannot serialize configuration: {}", e)))
    }

    // ====================================== Derived objects ======================================

    /// Grid described by this configuration
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.cell_count, self.spacing)
    }

    /// Top-level scheme
    pub fn scheme_kind(&self) -> Result<SchemeKind> {
        self.scheme.parse()
    }

    /// Scenarios in run order
    ///
    /// # Errors
    ///
    /// `Configuration` when the list would be empty, a coefficient is
    /// negative or not finite, or a scheme identifier is unknown.
    pub fn scenario_list(&self) -> Result<Vec<Scenario>> {
        let default_scheme = self.scheme_kind()?;

        let entries: Vec<ScenarioConfiguration> = if self.scenarios.is_empty() {
            self.diffusion_coefficients
                .iter()
                .map(|&coefficient| ScenarioConfiguration::new(coefficient))
                .collect()
        } else {
            self.scenarios.clone()
        };

        if entries.is_empty() {
            return Err(TransportError::configuration(
                "at least one diffusion coefficient or scenario is required",
            ));
        }

        entries
            .into_iter()
            .map(|entry| -> Result<Scenario> {
                let scheme = match &entry.scheme {
                    Some(identifier) => identifier.parse()?,
                    None => default_scheme,
                };

                let parameters = TransportParameters::new(
                    self.velocity,
                    entry.diffusion_coefficient,
                    self.time_step,
                )?;

                Ok(match entry.label {
                    Some(label) => Scenario::with_label(label, parameters, scheme),
                    None => Scenario::new(parameters, scheme),
                })
            })
            .collect()
    }

    /// Initial field on `grid`
    pub fn initial_field(&self, grid: &Grid) -> Result<Field> {
        self.initial_condition.field(grid)
    }

    /// Validate every value
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid()?;
        self.scenario_list()?;
        self.initial_field(&grid)?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> SimulationConfiguration {
        SimulationConfiguration::new(100, 1.0, 10.0, -0.1, vec![1.0, 5.0], 100, "lax-friedrichs")
    }

    #[test]
    fn test_reference_is_valid() {
        let configuration = reference();

        assert!(configuration.validate().is_ok());
        assert_eq!(configuration.scheme_kind().unwrap(), SchemeKind::LaxFriedrichs);
        assert_eq!(configuration.linear_solver, LinearSolverKind::DenseLu);
        assert_eq!(configuration.initial_condition, InitialCondition::LinearRamp);
    }

    #[test]
    fn test_scenarios_from_coefficients() {
        let scenarios = reference().scenario_list().unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].parameters().diffusion_coefficient, 1.0);
        assert_eq!(scenarios[1].parameters().diffusion_coefficient, 5.0);
        assert!(scenarios.iter().all(|s| s.scheme() == SchemeKind::LaxFriedrichs));
    }

    #[test]
    fn test_explicit_scenarios_override() {
        let configuration = reference().with_scenarios(vec![
            ScenarioConfiguration::new(0.0).scheme("ftcs").label("pure FTCS"),
            ScenarioConfiguration::new(0.0),
            ScenarioConfiguration::new(2.0).scheme("lf"),
        ]);

        let scenarios = configuration.scenario_list().unwrap();

        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].label(), "pure FTCS");
        assert_eq!(scenarios[0].scheme(), SchemeKind::Ftcs);
        assert_eq!(scenarios[1].scheme(), SchemeKind::LaxFriedrichs);
        assert_eq!(scenarios[2].parameters().diffusion_coefficient, 2.0);
    }

    #[test]
    fn test_two_cells_rejected() {
        let mut configuration = reference();
        configuration.cell_count = 2;

        assert!(configuration.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut spacing = reference();
        spacing.spacing = 0.0;
        assert!(spacing.validate().unwrap_err().is_configuration());

        let mut time_step = reference();
        time_step.time_step = -1.0;
        assert!(time_step.validate().unwrap_err().is_configuration());

        let mut scheme = reference();
        scheme.scheme = "upwind".to_string();
        assert!(scheme.validate().unwrap_err().is_configuration());

        let mut coefficient = reference();
        coefficient.diffusion_coefficients = vec![1.0, -3.0];
        assert!(coefficient.validate().unwrap_err().is_configuration());

        let mut empty = reference();
        empty.diffusion_coefficients.clear();
        assert!(empty.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_unknown_scenario_scheme_rejected() {
        let configuration =
            reference().with_scenarios(vec![ScenarioConfiguration::new(1.0).scheme("crank-nicolson")]);

        let error = configuration.validate().unwrap_err();
        assert!(error.to_string().contains("crank-nicolson"));
    }

    #[test]
    fn test_profile_length_checked() {
        let configuration = SimulationConfiguration::new(3, 1.0, 1.0, 0.0, vec![1.0], 1, "ftcs")
            .with_initial_condition(InitialCondition::Profile(vec![0.0, 1.0]));

        assert!(configuration.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_initial_field() {
        let configuration = SimulationConfiguration::new(3, 1.0, 1.0, 0.0, vec![1.0], 1, "ftcs")
            .with_initial_condition(InitialCondition::Profile(vec![0.0, 1.0, 2.0]));
        let grid = configuration.grid().unwrap();

        assert_eq!(configuration.initial_field(&grid).unwrap().to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_json_defaults() {
        let configuration = SimulationConfiguration::from_json_str(
            r#"{
                "cell_count": 10,
                "spacing": 0.5,
                "time_step": 0.1,
                "velocity": 1.0,
                "diffusion_coefficients": [0.0],
                "iteration_count": 5,
                "scheme": "ftcs"
            }"#,
        )
        .unwrap();

        assert_eq!(configuration.cell_count, 10);
        assert_eq!(configuration.initial_condition, InitialCondition::LinearRamp);
        assert_eq!(configuration.linear_solver, LinearSolverKind::DenseLu);
        assert!(configuration.scenarios.is_empty());
    }

    #[test]
    fn test_json_full() {
        let configuration = SimulationConfiguration::from_json_str(
            r#"{
                "cell_count": 3,
                "spacing": 1.0,
                "time_step": 1.0,
                "velocity": -0.1,
                "iteration_count": 1,
                "scheme": "ftcs",
                "scenarios": [
                    { "diffusion_coefficient": 1.0, "label": "steady" },
                    { "diffusion_coefficient": 0.0, "scheme": "lax-friedrichs" }
                ],
                "initial_condition": { "profile": [0.0, 1.0, 2.0] },
                "linear_solver": "tridiagonal"
            }"#,
        )
        .unwrap();

        assert!(configuration.validate().is_ok());
        assert_eq!(configuration.linear_solver, LinearSolverKind::Tridiagonal);
        assert_eq!(configuration.scenario_list().unwrap()[0].label(), "steady");
    }

    #[test]
    fn test_json_round_trip() {
        let configuration = reference().with_linear_solver(LinearSolverKind::Tridiagonal);
        let json = configuration.to_json_string().unwrap();

        assert_eq!(SimulationConfiguration::from_json_str(&json).unwrap(), configuration);
    }

    #[test]
    fn test_json_malformed() {
        let error = SimulationConfiguration::from_json_str("{ \"cell_count\": 3 }").unwrap_err();
        assert!(error.is_configuration());
    }

    #[test]
    fn test_missing_file() {
        let error = SimulationConfiguration::from_path("/nonexistent/advdiff.json").unwrap_err();
        assert!(error.is_configuration());
    }
}
