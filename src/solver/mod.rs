//! Numerical solver
//!
//! Evolves a [`Field`](crate::physics::Field) under advection and diffusion by
//! operator splitting: an implicit diffusion solve followed by an explicit
//! advection update, once per iteration.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Velocity, diffusion coefficient, time step
//!    - Advection scheme
//!
//! 2. **Configuration** (`SimulationConfiguration`) - HOW to run it
//!    - Grid, iteration count, initial condition
//!    - Scenario list and factorization strategy
//!
//! 3. **Driver** (`TimeStepper`, `Simulation`) - The loop
//!    - Owns the field and the factorized diffusion matrix
//!    - Pushes every step to a `SnapshotSink`
//!
//! # Module Organization
//!
//! - **`traits`**: `AdvectionScheme`, `SchemeKind`, `SnapshotSink`
//! - **`methods`**: `Ftcs`, `LaxFriedrichs`
//! - **`diffusion`**: `DiffusionOperator`, `LinearSolverKind`
//! - **`boundary`**: fixed-value rows of the diffusion matrix
//! - **`tridiagonal`**: Thomas factorization
//! - **`scenario`**: `Scenario`
//! - **`configuration`**: `SimulationConfiguration` and its serde types
//! - **`driver`**: `TimeStepper`, `Simulation`, `ScenarioOutcome`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────────────┐
//! │ SimulationConfiguration  │  (JSON or code)
//! └────────────┬─────────────┘
//!              │ validate
//!     ┌────────▼────────┐
//!     │   Simulation    │  grid + scenarios + initial field
//!     └────────┬────────┘
//!              │ one per scenario
//!     ┌────────▼────────┐      ┌──────────────────┐
//!     │   TimeStepper   │─────▶│   SnapshotSink   │
//!     │ diffuse, advect │      │ (plot, CSV, ...) │
//!     └─────────────────┘      └──────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use advdiff_rs::solver::{Simulation, SimulationConfiguration};
//! use advdiff_rs::output::NullSink;
//!
//! let configuration = SimulationConfiguration::new(100, 1.0, 3.0, -0.1, vec![0.0], 100, "ftcs");
//! let simulation = Simulation::new(configuration)?;
//!
//! let outcomes = simulation.run(&mut [NullSink])?;
//! assert_eq!(outcomes[0].steps_completed, 100);
//! # Ok::<(), advdiff_rs::error::TransportError>(())
//! ```
//!
//! # Error Handling
//!
//! Every operation returns [`crate::error::Result`]. Configuration errors
//! surface from `Simulation::new`, before any step. Linear system and sink
//! errors end only the scenario they occur in.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod boundary;
pub mod configuration;
pub mod diffusion;
pub mod driver;
pub mod methods;
pub mod scenario;
pub mod traits;
pub mod tridiagonal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{AdvectionScheme, SchemeKind, SnapshotSink};

pub use boundary::{BoundarySide, FixedBoundaries};
pub use configuration::{InitialCondition, ScenarioConfiguration, SimulationConfiguration};
pub use diffusion::{DiffusionOperator, LinearSolverKind};
pub use driver::{DriverState, ScenarioOutcome, Simulation, TimeStepper};
pub use methods::{Ftcs, LaxFriedrichs};
pub use scenario::Scenario;
pub use tridiagonal::TridiagonalFactorization;
