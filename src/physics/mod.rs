//! Physical description of the problem
//!
//! This module holds what is being transported and where:
//!
//! - **Grid**: uniform 1D discretization (cell count, spacing, coordinates)
//! - **Field**: the transported scalar sampled at every cell
//! - **TransportParameters**: velocity, diffusion coefficient and time step of
//!   one scenario, with the dimensionless factors derived from them
//!
//! # Architecture
//!
//! Physics is **separate from numerics**: nothing in here knows how a step
//! is computed. The advection stencils, the implicit diffusion solve and the
//! splitting driver all live in [`crate::solver`].
//!
//! # Example
//!
//! ```rust
//! use advdiff_rs::physics::{Grid, Field, TransportParameters};
//!
//! let grid = Grid::new(100, 1.0).unwrap();
//! let field = Field::linear_ramp(&grid);
//! let parameters = TransportParameters::new(-0.1, 1.0, 10.0).unwrap();
//!
//! assert_eq!(field.len(), 100);
//! assert_eq!(parameters.diffusion_factor(&grid), 10.0);
//! ```

pub mod grid;
pub mod field;
pub mod parameters;

pub use field::Field;
pub use grid::{Grid, MIN_CELL_COUNT};
pub use parameters::TransportParameters;
