//! Explicit advection schemes
//!
//! This module contains concrete implementations of the
//! [`AdvectionScheme`](crate::solver::AdvectionScheme) trait.
//!
//! # Architecture
//!
//! The separation between the abstract scheme interface (`solver::traits`) and
//! the concrete stencils (`solver::methods`) keeps the driver closed for
//! modification: a new stencil is a new file implementing one method.
//!
//! # Available Methods
//!
//! - **[`Ftcs`]**: Forward-Time Central-Space
//!   - Order: first in time, second in space
//!   - Stability: unstable for pure advection
//!   - Use: reference / teaching, short runs, runs damped by implicit diffusion
//!
//! - **[`LaxFriedrichs`]**: neighbour-averaged FTCS
//!   - Order: first in time and space
//!   - Stability: `|u|·Δt/Δx ≤ 1`
//!   - Use: default choice for the advection half-step
//!
//! # Example
//!
//! ```rust
//! use advdiff_rs::physics::{Field, Grid};
//! use advdiff_rs::solver::{AdvectionScheme, Ftcs, LaxFriedrichs};
//!
//! let grid = Grid::new(10, 1.0).unwrap();
//!
//! let mut a = Field::linear_ramp(&grid);
//! let mut b = a.clone();
//!
//! Ftcs.advance(&mut a, -0.15).unwrap();
//! LaxFriedrichs.advance(&mut b, -0.15).unwrap();
//!
//! // Both schemes agree on linear profiles
//! assert!(a.max_abs_difference(&b).unwrap() < 1e-12);
//! ```

pub mod ftcs;
pub mod lax_friedrichs;

// Re-exports for convenience
pub use ftcs::Ftcs;
pub use lax_friedrichs::LaxFriedrichs;
