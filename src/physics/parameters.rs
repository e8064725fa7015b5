//! Per-scenario transport parameters and the dimensionless factors derived from them

use crate::error::{Result, TransportError};
use crate::physics::Grid;

/// Physical parameters of one scenario
///
/// # Derived factors
///
/// - advection factor `c = u·Δt / (2·Δx)`, used by both explicit stencils
/// - diffusion factor `β = D·Δt / Δx²`, used by the implicit matrix
///
/// Nothing here checks that `c` is small enough for the explicit step to be
/// stable. Choosing `Δt` is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportParameters {
    /// Advection speed; its sign gives the transport direction
    pub velocity: f64,

    /// Diffusion coefficient D (≥ 0)
    pub diffusion_coefficient: f64,

    /// Time step Δt (> 0)
    pub time_step: f64,
}

impl TransportParameters {
    /// Create and validate parameters
    ///
    /// # Errors
    ///
    /// `Configuration` when `time_step` is not positive, when the coefficient
    /// is negative, or when any value is not finite.
    pub fn new(velocity: f64, diffusion_coefficient: f64, time_step: f64) -> Result<Self> {
        let parameters = Self { velocity, diffusion_coefficient, time_step };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(TransportError::configuration(format!(
                "time_step must be positive and finite, got {}",
                self.time_step
            )));
        }

        if !self.velocity.is_finite() {
            return Err(TransportError::configuration(format!(
                "velocity must be finite, got {}",
                self.velocity
            )));
        }

        if !self.diffusion_coefficient.is_finite() || self.diffusion_coefficient < 0.0 {
            return Err(TransportError::configuration(format!(
                "diffusion coefficient must be non-negative and finite, got {}",
                self.diffusion_coefficient
            )));
        }

        Ok(())
    }

    /// Advection factor `u·Δt / (2·Δx)`
    #[inline]
    pub fn advection_factor(&self, grid: &Grid) -> f64 {
        self.velocity * self.time_step / (2.0 * grid.spacing())
    }

    /// Diffusion factor `β = D·Δt / Δx²`
    #[inline]
    pub fn diffusion_factor(&self, grid: &Grid) -> f64 {
        self.diffusion_coefficient * self.time_step / (grid.spacing() * grid.spacing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factors_unit_grid() {
        let grid = Grid::new(3, 1.0).unwrap();
        let parameters = TransportParameters::new(-0.1, 1.0, 1.0).unwrap();

        assert_relative_eq!(parameters.advection_factor(&grid), -0.05);
        assert_relative_eq!(parameters.diffusion_factor(&grid), 1.0);
    }

    #[test]
    fn test_factors_scaled_grid() {
        let grid = Grid::new(10, 0.5).unwrap();
        let parameters = TransportParameters::new(2.0, 5.0, 0.1).unwrap();

        // 2 * 0.1 / (2 * 0.5)
        assert_relative_eq!(parameters.advection_factor(&grid), 0.2);
        // 5 * 0.1 / 0.25
        assert_relative_eq!(parameters.diffusion_factor(&grid), 2.0);
    }

    #[test]
    fn test_zero_coefficient_allowed() {
        let grid = Grid::new(3, 1.0).unwrap();
        let parameters = TransportParameters::new(1.0, 0.0, 3.0).unwrap();

        assert_eq!(parameters.diffusion_factor(&grid), 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(TransportParameters::new(1.0, 1.0, 0.0).unwrap_err().is_configuration());
        assert!(TransportParameters::new(1.0, 1.0, -1.0).unwrap_err().is_configuration());
        assert!(TransportParameters::new(1.0, -0.5, 1.0).unwrap_err().is_configuration());
        assert!(TransportParameters::new(f64::NAN, 1.0, 1.0).unwrap_err().is_configuration());
        assert!(TransportParameters::new(1.0, f64::INFINITY, 1.0).unwrap_err().is_configuration());
    }
}
