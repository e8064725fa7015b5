//! Fixed-value (Dirichlet) boundaries of the implicit diffusion system
//!
//! # Design
//!
//! Boundary handling is expressed on the matrix, not on the field: the first
//! and last rows of the diffusion matrix are overwritten with identity rows,
//! so that solving `A·f_new = f_old` returns `f_new[0] = f_old[0]` and
//! `f_new[n-1] = f_old[n-1]` exactly. No diffusive flux crosses either end.
//!
//! The explicit advection schemes never write boundary cells, so together
//! the two half-steps keep the end values of the initial condition for the
//! whole run.

use nalgebra::DMatrix;

/// Side of the 1D domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySide {
    /// Cell 0
    Left,

    /// Cell n-1
    Right,
}

impl BoundarySide {
    /// Both sides, left first
    pub const BOTH: [BoundarySide; 2] = [BoundarySide::Left, BoundarySide::Right];

    /// Row / cell index of this side for a system of size `n`
    pub fn index(&self, n: usize) -> usize {
        match self {
            BoundarySide::Left => 0,
            BoundarySide::Right => n - 1,
        }
    }
}

/// Fixed boundaries on both ends of the domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedBoundaries;

impl FixedBoundaries {
    /// Create the boundary set
    pub fn new() -> Self {
        Self
    }

    /// Overwrite the boundary rows of `matrix` with identity rows
    pub fn impose(&self, matrix: &mut DMatrix<f64>) {
        debug_assert_eq!(matrix.nrows(), matrix.ncols(), "boundary rows need a square matrix");
        let n = matrix.nrows();

        for side in BoundarySide::BOTH {
            let row = side.index(n);
            matrix.row_mut(row).fill(0.0);
            matrix[(row, row)] = 1.0;
        }
    }

    /// Same treatment on the band representation `(sub, main, super)`
    ///
    /// `sub[i]` multiplies `x[i-1]` and `sup[i]` multiplies `x[i+1]` in row `i`.
    pub fn impose_bands(&self, sub: &mut [f64], main: &mut [f64], sup: &mut [f64]) {
        let n = main.len();

        for side in BoundarySide::BOTH {
            let row = side.index(n);
            sub[row] = 0.0;
            main[row] = 1.0;
            sup[row] = 0.0;
        }
    }

    /// Copy the boundary values of `rhs` into `solution`
    ///
    /// The identity rows make `rhs[0]` and `rhs[n-1]` the exact solution of
    /// the two boundary equations. A pivoted dense solve only reproduces them
    /// up to round-off, so they are written back after it.
    pub fn restore(&self, rhs: &[f64], solution: &mut [f64]) {
        let n = solution.len();

        for side in BoundarySide::BOTH {
            let row = side.index(n);
            solution[row] = rhs[row];
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
