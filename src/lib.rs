//! advdiff-rs: 1D Advection-Diffusion Kernel
//!
//! Evolves a scalar field on a uniform one-dimensional grid under advection
//! and diffusion, and pushes every step to a pluggable sink.
//!
//! # Architecture
//!
//! advdiff-rs is built on two principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - `physics` holds the grid, the field and the transport parameters
//!    - `solver` holds the schemes, the diffusion operator and the driver
//!
//! 2. **Push-based Output**
//!    - The driver never renders anything itself
//!    - `output` provides plot, CSV, in-memory and pacing sinks
//!
//! # Quick Start
//!
//! ```rust
//! use advdiff_rs::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // 1. Configure the grid and the scenarios
//! let configuration = SimulationConfiguration::new(
//!     100,            // cells
//!     1.0,            // spacing
//!     10.0,           // time step
//!     -0.1,           // velocity
//!     vec![1.0, 5.0], // one scenario per diffusion coefficient
//!     100,            // iterations
//!     "lax-friedrichs",
//! );
//!
//! // 2. Validate and run, one sink per scenario
//! let simulation = Simulation::new(configuration)?;
//! let mut sinks = vec![SnapshotRecorder::new(), SnapshotRecorder::new()];
//! let outcomes = simulation.run(&mut sinks)?;
//!
//! // 3. Inspect the results
//! for outcome in &outcomes {
//!     println!("{}: {} steps", outcome.label, outcome.steps_completed);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Grid, field and transport parameters
//! - [`solver`]: Schemes, diffusion operator and time-stepping driver
//! - [`output`]: Snapshot sinks (plots, CSV, recording, pacing)
//! - [`error`]: Error type

pub mod error;
pub mod output;
pub mod physics;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use advdiff_rs::prelude::*;
    //! ```
    pub use crate::error::{Result, TransportError};
    pub use crate::output::{CsvConfig, CsvSink, NullSink, Paced, PlotConfig, ProfilePlotter, SnapshotRecorder};
    pub use crate::physics::{Field, Grid, TransportParameters};
    pub use crate::solver::{
        AdvectionScheme,
        DiffusionOperator,
        DriverState,
        LinearSolverKind,
        Scenario,
        SchemeKind,
        Simulation,
        SimulationConfiguration,
        SnapshotSink,
        TimeStepper,
    };
}
