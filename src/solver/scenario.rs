//! Simulation scenario definition
//!
//! A scenario is one independently evolved copy of the field: a set of
//! transport parameters plus the advection scheme used for the explicit
//! half-step.

use std::fmt;

use crate::physics::{Grid, TransportParameters};
use crate::solver::traits::{AdvectionScheme, SchemeKind};

/// One diffusion-coefficient × scheme combination
///
/// # Design
///
/// Scenarios share the grid and the initial condition but own nothing
/// mutable: the field and the diffusion operator live in the
/// [`TimeStepper`](crate::solver::TimeStepper) that runs the scenario.
///
/// # Example
///
/// ```rust
/// use advdiff_rs::physics::TransportParameters;
/// use advdiff_rs::solver::{Scenario, SchemeKind};
///
/// let parameters = TransportParameters::new(-0.1, 5.0, 10.0).unwrap();
/// let scenario = Scenario::new(parameters, SchemeKind::LaxFriedrichs);
///
/// assert_eq!(scenario.label(), "Lax-Friedrichs, D = 5");
/// ```
#[derive(Clone, PartialEq)]
pub struct Scenario {
    /// Display label
    label: String,

    /// Velocity, diffusion coefficient and time step
    parameters: TransportParameters,

    /// Explicit scheme for the advection half-step
    scheme: SchemeKind,
}

impl Scenario {
    /// Create a scenario with a generated label
    pub fn new(parameters: TransportParameters, scheme: SchemeKind) -> Self {
        let label = format!("{}, D = {}", scheme, parameters.diffusion_coefficient);
        Self::with_label(label, parameters, scheme)
    }

    /// Create a scenario with an explicit label
    pub fn with_label(label: impl Into<String>, parameters: TransportParameters, scheme: SchemeKind) -> Self {
        Self { label: label.into(), parameters, scheme }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Transport parameters
    pub fn parameters(&self) -> &TransportParameters {
        &self.parameters
    }

    /// Scheme identifier
    pub fn scheme(&self) -> SchemeKind {
        self.scheme
    }

    /// Scheme implementation
    pub fn advection_scheme(&self) -> &'static dyn AdvectionScheme {
        self.scheme.scheme()
    }

    /// `u·Δt / (2·Δx)` on `grid`
    pub fn advection_factor(&self, grid: &Grid) -> f64 {
        self.parameters.advection_factor(grid)
    }

    /// `D·Δt / Δx²` on `grid`
    pub fn diffusion_factor(&self, grid: &Grid) -> f64 {
        self.parameters.diffusion_factor(grid)
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("label", &self.label)
            .field("scheme", &self.scheme.identifier())
            .field("velocity", &self.parameters.velocity)
            .field("diffusion coefficient", &self.parameters.diffusion_coefficient)
            .field("time step", &self.parameters.time_step)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
