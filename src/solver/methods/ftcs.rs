//! Forward-Time Central-Space advection scheme
//!
//! # Mathematical Background
//!
//! For the linear advection equation
//!
//! ```text
//! ∂f/∂t + u·∂f/∂x = 0
//! ```
//!
//! FTCS takes a forward difference in time and a central difference in space:
//!
//! ```text
//! f_i^{n+1} = f_i^n − c·(f_{i+1}^n − f_{i−1}^n),    c = u·Δt / (2·Δx)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: unconditionally unstable for pure advection (von Neumann
//!   amplification factor `|g|² = 1 + 4c²·sin²(kΔx) > 1`). Short runs or runs
//!   where implicit diffusion damps the growth remain usable.
//! - **Cost**: one stencil evaluation per interior cell
//!
//! # Example
//!
//! ```rust
//! use advdiff_rs::physics::Field;
//! use advdiff_rs::solver::{AdvectionScheme, Ftcs};
//!
//! let mut field = Field::from_vec(vec![0.0, 1.0, 2.0]);
//! Ftcs.advance(&mut field, -0.05).unwrap();
//!
//! assert!((field[1] - 1.1).abs() < 1e-12);
//! ```

use crate::solver::AdvectionScheme;

/// Forward-Time Central-Space stencil
#[derive(Debug, Clone, Copy, Default)]
pub struct Ftcs;

impl Ftcs {
    /// Create the scheme
    pub fn new() -> Self {
        Self
    }
}

impl AdvectionScheme for Ftcs {
    #[inline]
    fn stencil(&self, left: f64, centre: f64, right: f64, factor: f64) -> f64 {
        centre - factor * (right - left)
    }

    fn name(&self) -> &'static str {
        "FTCS"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
