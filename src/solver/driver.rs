//! Time-stepping driver
//!
//! # Operator splitting
//!
//! Every iteration of a scenario performs, in order:
//!
//! 1. the implicit diffusion solve `A·f_new = f_old`, replacing the field,
//! 2. the explicit advection update of the interior cells,
//! 3. the increment of the iteration counter and one push to the sink.
//!
//! # State machine
//!
//! ```text
//! Idle ──step──▶ Stepping ──step──▶ ... ──▶ Done
//!   │                                        ▲
//!   └──────────── total == 0 ────────────────┘
//! ```
//!
//! A stepper never goes back to `Idle`. Any error moves it to `Failed`, which
//! is terminal as well.

use std::fmt;

use crate::error::{Result, TransportError};
use crate::physics::{Field, Grid};
use crate::solver::configuration::SimulationConfiguration;
use crate::solver::diffusion::{DiffusionOperator, LinearSolverKind};
use crate::solver::scenario::Scenario;
use crate::solver::traits::{AdvectionScheme, SnapshotSink};

// =================================================================================================
// Driver State
// =================================================================================================

/// Lifecycle of a [`TimeStepper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Built, no step taken yet
    Idle,

    /// At least one step taken, more to go
    Stepping,

    /// All iterations completed
    Done,

    /// A step returned an error; no further stepping
    Failed,
}

impl DriverState {
    /// True for `Done` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, DriverState::Done | DriverState::Failed)
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DriverState::Idle => write!(f, "Idle"),
            DriverState::Stepping => write!(f, "Stepping"),
            DriverState::Done => write!(f, "Done"),
            DriverState::Failed => write!(f, "Failed"),
        }
    }
}

// =================================================================================================
// Time Stepper
// =================================================================================================

/// Runs one scenario for a fixed number of iterations
///
/// The stepper owns its field and its diffusion operator; the matrix is
/// factorized once in [`new`](TimeStepper::new) and reused every step.
///
/// # Example
///
/// ```rust
/// use advdiff_rs::physics::{Field, Grid, TransportParameters};
/// use advdiff_rs::solver::{LinearSolverKind, Scenario, SchemeKind, TimeStepper};
/// use advdiff_rs::output::SnapshotRecorder;
///
/// let grid = Grid::new(3, 1.0).unwrap();
/// let parameters = TransportParameters::new(-0.1, 1.0, 1.0).unwrap();
/// let scenario = Scenario::new(parameters, SchemeKind::LaxFriedrichs);
/// let initial = Field::from_vec(vec![0.0, 1.0, 2.0]);
///
/// let mut stepper = TimeStepper::new(&grid, &scenario, initial, 1, LinearSolverKind::DenseLu).unwrap();
/// let mut recorder = SnapshotRecorder::new();
/// stepper.run(&mut recorder).unwrap();
///
/// assert!((stepper.field()[1] - 1.1).abs() < 1e-12);
/// ```
pub struct TimeStepper {
    label: String,
    scheme: &'static dyn AdvectionScheme,
    advection_factor: f64,
    diffusion: DiffusionOperator,
    field: Field,
    count: usize,
    total: usize,
    state: DriverState,
}

impl TimeStepper {
    /// Prepare a scenario run
    ///
    /// # Errors
    ///
    /// - `Configuration` when the field does not match the grid
    /// - `LinearSystem` when the diffusion matrix cannot be factorized
    pub fn new(
        grid: &Grid,
        scenario: &Scenario,
        initial_field: Field,
        iteration_count: usize,
        solver_kind: LinearSolverKind,
    ) -> Result<Self> {
        if initial_field.len() != grid.cell_count() {
            return Err(TransportError::configuration(format!(
                "initial field has {} cells, grid has {}",
                initial_field.len(),
                grid.cell_count()
            )));
        }

        let parameters = scenario.parameters();
        let diffusion = DiffusionOperator::build_with(
            grid,
            parameters.diffusion_coefficient,
            parameters.time_step,
            solver_kind,
        )?;
        let advection_factor = scenario.advection_factor(grid);

        log::debug!(
            "{}: scheme = {}, advection factor = {}, β = {}",
            scenario.label(),
            scenario.scheme(),
            advection_factor,
            diffusion.diffusion_factor()
        );

        Ok(Self {
            label: scenario.label().to_string(),
            scheme: scenario.advection_scheme(),
            advection_factor,
            diffusion,
            field: initial_field,
            count: 0,
            total: iteration_count,
            state: DriverState::Idle,
        })
    }

    /// Perform one iteration and push the result to `sink`
    ///
    /// On a `Done` stepper this is a no-op returning `Done`.
    ///
    /// # Errors
    ///
    /// Errors from the diffusion solve, the advection update or the sink.
    /// The stepper is `Failed` afterwards and every later call errors.
    pub fn step<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> Result<DriverState> {
        match self.state {
            DriverState::Done => return Ok(DriverState::Done),
            DriverState::Failed => {
                return Err(TransportError::configuration(format!(
                    "{}: stepper failed at step {} and cannot continue",
                    self.label,
                    self.count + 1
                )));
            }
            DriverState::Idle if self.total == 0 => {
                self.state = DriverState::Done;
                return Ok(DriverState::Done);
            }
            _ => {}
        }

        match self.advance(sink) {
            Ok(()) => {
                self.state = if self.count == self.total {
                    DriverState::Done
                } else {
                    DriverState::Stepping
                };
                Ok(self.state)
            }
            Err(error) => {
                self.state = DriverState::Failed;
                Err(error)
            }
        }
    }

    fn advance<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let step = self.count + 1;

        self.field = self.diffusion.solve(&self.field).map_err(|e| e.at_step(step))?;
        self.scheme.advance(&mut self.field, self.advection_factor)?;
        self.count = step;

        log::trace!("{}: step {}/{} done", self.label, self.count, self.total);

        sink.accept(&self.field)
    }

    /// Step until `Done`
    pub fn run<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        while !self.step(sink)?.is_terminal() {}
        Ok(())
    }

    /// Current state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Completed iterations
    pub fn count(&self) -> usize {
        self.count
    }

    /// Requested iterations
    pub fn total(&self) -> usize {
        self.total
    }

    /// Current field
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Consume the stepper, keeping the field
    pub fn into_field(self) -> Field {
        self.field
    }

    /// Scenario label
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for TimeStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeStepper")
            .field("label", &self.label)
            .field("scheme", &self.scheme.name())
            .field("state", &self.state)
            .field("count", &self.count)
            .field("total", &self.total)
            .finish()
    }
}

// =================================================================================================
// Simulation
// =================================================================================================

/// Result of one scenario of a [`Simulation`]
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Scenario label
    pub label: String,

    /// Iterations completed before the end or the failure
    pub steps_completed: usize,

    /// Final field, or the error that stopped the scenario
    pub result: Result<Field>,
}

impl ScenarioOutcome {
    /// True if the scenario ran to completion
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Final field when successful
    pub fn field(&self) -> Option<&Field> {
        self.result.as_ref().ok()
    }
}

/// Validated multi-scenario run
///
/// # Example
///
/// ```rust
/// use advdiff_rs::solver::{Simulation, SimulationConfiguration};
/// use advdiff_rs::output::SnapshotRecorder;
///
/// let configuration =
///     SimulationConfiguration::new(10, 1.0, 1.0, -0.1, vec![0.0, 1.0], 10, "lax-friedrichs");
/// let simulation = Simulation::new(configuration).unwrap();
///
/// let mut sinks = vec![SnapshotRecorder::new(), SnapshotRecorder::new()];
/// let outcomes = simulation.run(&mut sinks).unwrap();
///
/// assert!(outcomes.iter().all(|o| o.is_success()));
/// assert_eq!(sinks[1].len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    configuration: SimulationConfiguration,
    grid: Grid,
    scenarios: Vec<Scenario>,
    initial_field: Field,
}

impl Simulation {
    /// Validate `configuration` and derive the grid, scenarios and initial field
    ///
    /// # Errors
    ///
    /// Every `Configuration` error surfaces here, before any stepping.
    pub fn new(configuration: SimulationConfiguration) -> Result<Self> {
        configuration.validate()?;

        let grid = configuration.grid()?;
        let scenarios = configuration.scenario_list()?;
        let initial_field = configuration.initial_field(&grid)?;

        Ok(Self { configuration, grid, scenarios, initial_field })
    }

    /// Scenarios in run order
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Shared grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared initial field
    pub fn initial_field(&self) -> &Field {
        &self.initial_field
    }

    /// Validated configuration
    pub fn configuration(&self) -> &SimulationConfiguration {
        &self.configuration
    }

    /// Stepper for scenario `index`, positioned at step 0
    pub fn stepper(&self, index: usize) -> Result<TimeStepper> {
        let scenario = self.scenarios.get(index).ok_or_else(|| {
            TransportError::configuration(format!(
                "scenario index {} out of range ({} scenarios)",
                index,
                self.scenarios.len()
            ))
        })?;

        TimeStepper::new(
            &self.grid,
            scenario,
            self.initial_field.clone(),
            self.configuration.iteration_count,
            self.configuration.linear_solver,
        )
    }

    /// Run every scenario in order, scenario `i` feeding `sinks[i]`
    ///
    /// A failing scenario is recorded in its outcome and the next one still
    /// runs. `finish` is called on each sink after its scenario ends.
    ///
    /// # Errors
    ///
    /// `Configuration` when the number of sinks differs from the number of
    /// scenarios. Nothing has run in that case.
    pub fn run<S: SnapshotSink>(&self, sinks: &mut [S]) -> Result<Vec<ScenarioOutcome>> {
        if sinks.len() != self.scenarios.len() {
            return Err(TransportError::configuration(format!(
                "{} sinks for {} scenarios",
                sinks.len(),
                self.scenarios.len()
            )));
        }

        log::info!(
            "Simulation started: {} scenario(s), {} cells, {} iterations",
            self.scenarios.len(),
            self.grid.cell_count(),
            self.configuration.iteration_count
        );

        let outcomes: Vec<ScenarioOutcome> = self
            .scenarios
            .iter()
            .enumerate()
            .zip(sinks.iter_mut())
            .map(|((index, scenario), sink)| self.run_scenario(index, scenario, sink))
            .collect();

        let failures = outcomes.iter().filter(|o| !o.is_success()).count();
        log::info!(
            "Simulation finished: {} succeeded, {} failed",
            outcomes.len() - failures,
            failures
        );

        Ok(outcomes)
    }

    fn run_scenario<S: SnapshotSink>(&self, index: usize, scenario: &Scenario, sink: &mut S) -> ScenarioOutcome {
        log::info!("Scenario '{}' started", scenario.label());

        let (steps_completed, result) = match self.stepper(index) {
            Ok(mut stepper) => {
                let run = stepper.run(sink);
                let finish = sink.finish();
                let steps = stepper.count();
                (steps, run.and(finish).map(|()| stepper.into_field()))
            }
            Err(error) => {
                if let Err(finish_error) = sink.finish() {
                    log::warn!("Scenario '{}': sink finish failed: {}", scenario.label(), finish_error);
                }
                (0, Err(error))
            }
        };

        match &result {
            Ok(_) => log::info!("Scenario '{}' finished after {} steps", scenario.label(), steps_completed),
            Err(error) => log::warn!(
                "Scenario '{}' aborted after {} steps: {}",
                scenario.label(),
                steps_completed,
                error
            ),
        }

        ScenarioOutcome { label: scenario.label().to_string(), steps_completed, result }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
