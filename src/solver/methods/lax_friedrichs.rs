//! Lax-Friedrichs advection scheme
//!
//! # Mathematical Background
//!
//! Lax-Friedrichs replaces the centre value of FTCS by the average of its
//! neighbours:
//!
//! ```text
//! f_i^{n+1} = ½·(f_{i+1}^n + f_{i−1}^n) − c·(f_{i+1}^n − f_{i−1}^n),    c = u·Δt / (2·Δx)
//! ```
//!
//! The averaging adds numerical diffusion `Δx²/(2Δt)·∂²f/∂x²`, which is what
//! makes the scheme stable where FTCS is not.
//!
//! # Characteristics
//!
//! - **Order**: first order in time and space
//! - **Stability**: stable when `|u|·Δt/Δx ≤ 1` (i.e. `|2c| ≤ 1`), not checked here
//! - **Behaviour**: smears sharp fronts; exact on linear profiles (same result
//!   as FTCS when `f_i` is the mean of its neighbours)
//!
//! # Example
//!
//! ```rust
//! use advdiff_rs::physics::Field;
//! use advdiff_rs::solver::{AdvectionScheme, LaxFriedrichs};
//!
//! let mut field = Field::from_vec(vec![0.0, 1.0, 2.0]);
//! LaxFriedrichs.advance(&mut field, -0.05).unwrap();
//!
//! assert!((field[1] - 1.1).abs() < 1e-12);
//! ```

use crate::solver::AdvectionScheme;

/// Lax-Friedrichs stencil
#[derive(Debug, Clone, Copy, Default)]
pub struct LaxFriedrichs;

impl LaxFriedrichs {
    /// Create the scheme
    pub fn new() -> Self {
        Self
    }
}

impl AdvectionScheme for LaxFriedrichs {
    #[inline]
    fn stencil(&self, left: f64, _centre: f64, right: f64, factor: f64) -> f64 {
        0.5 * (right + left) - factor * (right - left)
    }

    fn name(&self) -> &'static str {
        "Lax-Friedrichs"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
