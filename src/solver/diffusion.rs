//! Implicit diffusion operator
//!
//! # Mathematical Background
//!
//! Backward Euler on `∂f/∂t = D·∂²f/∂x²` with a central second difference gives,
//! for every interior cell,
//!
//! ```text
//! −β·f_{i−1}^{n+1} + (1 + 2β)·f_i^{n+1} − β·f_{i+1}^{n+1} = f_i^n,    β = D·Δt / Δx²
//! ```
//!
//! i.e. the linear system `A·f^{n+1} = f^n` with a symmetric tridiagonal `A`.
//! The first and last rows are then replaced by identity rows
//! ([`FixedBoundaries`]) so both end values are carried over unchanged.
//!
//! # Characteristics
//!
//! - **Stability**: unconditionally stable for `β ≥ 0`
//! - **Structure**: strictly diagonally dominant for `β ≥ 0`, hence non-singular
//! - **Steady states**: any linear profile is a fixed point
//!
//! # Caching
//!
//! `β` is constant for a run, so the matrix is built and factorized once in
//! [`DiffusionOperator::build_with`]. A new coefficient or time step needs a new
//! operator.
//!
//! # Example
//!
//! ```rust
//! use advdiff_rs::physics::{Field, Grid};
//! use advdiff_rs::solver::DiffusionOperator;
//!
//! let grid = Grid::new(3, 1.0).unwrap();
//! let operator = DiffusionOperator::build(&grid, 1.0, 1.0).unwrap();
//!
//! let solved = operator.solve(&Field::from_vec(vec![0.0, 1.0, 2.0])).unwrap();
//! assert!((solved[1] - 1.0).abs() < 1e-12);
//! ```

use nalgebra::linalg::LU;
use nalgebra::{DMatrix, DVector, Dyn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TransportError};
use crate::physics::{Field, Grid};
use crate::solver::boundary::FixedBoundaries;
use crate::solver::tridiagonal::TridiagonalFactorization;

// =================================================================================================
// Factorization strategy
// =================================================================================================

/// How the diffusion system is factorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearSolverKind {
    /// Dense LU decomposition (nalgebra), O(n³) once, O(n²) per solve
    #[default]
    DenseLu,

    /// Thomas algorithm on the three bands, O(n) once and per solve
    Tridiagonal,
}

impl fmt::Display for LinearSolverKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearSolverKind::DenseLu => write!(f, "Dense LU"),
            LinearSolverKind::Tridiagonal => write!(f, "Tridiagonal (Thomas)"),
        }
    }
}

#[derive(Debug, Clone)]
enum Factorization {
    DenseLu(LU<f64, Dyn, Dyn>),
    Tridiagonal(TridiagonalFactorization),
}

// =================================================================================================
// Diffusion Operator
// =================================================================================================

/// Implicit diffusion half-step `A·f_new = f_old`
#[derive(Debug, Clone)]
pub struct DiffusionOperator {
    /// System matrix after boundary rows were imposed
    matrix: DMatrix<f64>,

    /// β = D·Δt / Δx²
    beta: f64,

    /// Factorization strategy
    kind: LinearSolverKind,

    /// Cached factorization of `matrix`
    factorization: Factorization,
}

impl DiffusionOperator {
    /// Build with the default (dense LU) factorization
    pub fn build(grid: &Grid, coefficient: f64, time_step: f64) -> Result<Self> {
        Self::build_with(grid, coefficient, time_step, LinearSolverKind::default())
    }

    /// Build the matrix, impose the boundary rows and factorize
    ///
    /// The coefficient is not range-checked here (configuration does that);
    /// a malformed `β` shows up as a `LinearSystem` error from the
    /// factorization.
    ///
    /// # Errors
    ///
    /// - `Configuration` when `time_step` is not positive and finite
    /// - `LinearSystem` (step 0) when `β` is not finite or the matrix is singular
    pub fn build_with(
        grid: &Grid,
        coefficient: f64,
        time_step: f64,
        kind: LinearSolverKind,
    ) -> Result<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(TransportError::configuration(format!(
                "time_step must be positive and finite, got {}",
                time_step
            )));
        }

        let beta = coefficient * time_step / (grid.spacing() * grid.spacing());
        if !beta.is_finite() {
            return Err(TransportError::LinearSystem {
                step: 0,
                reason: format!("diffusion factor is not finite (coefficient {})", coefficient),
            });
        }

        let n = grid.cell_count();
        let boundaries = FixedBoundaries::new();

        let mut matrix = Self::tridiagonal_matrix(n, beta);
        boundaries.impose(&mut matrix);

        let factorization = match kind {
            LinearSolverKind::DenseLu => {
                let lu = matrix.clone().lu();
                if !lu.is_invertible() {
                    return Err(TransportError::LinearSystem {
                        step: 0,
                        reason: format!("diffusion matrix is singular (β = {})", beta),
                    });
                }
                Factorization::DenseLu(lu)
            }
            LinearSolverKind::Tridiagonal => {
                let mut sub = vec![-beta; n];
                let mut main = vec![1.0 + 2.0 * beta; n];
                let mut sup = vec![-beta; n];
                boundaries.impose_bands(&mut sub, &mut main, &mut sup);

                Factorization::Tridiagonal(TridiagonalFactorization::new(&sub, &main, &sup)?)
            }
        };

        log::debug!(
            "Diffusion operator built: n = {}, β = {}, factorization = {}",
            n,
            beta,
            kind
        );

        Ok(Self { matrix, beta, kind, factorization })
    }

    /// Symmetric tridiagonal matrix with `1+2β` on the diagonal and `−β` beside it
    fn tridiagonal_matrix(n: usize, beta: f64) -> DMatrix<f64> {
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                1.0 + 2.0 * beta
            } else if i.abs_diff(j) == 1 {
                -beta
            } else {
                0.0
            }
        })
    }

    /// Solve `A·result = field`
    ///
    /// # Errors
    ///
    /// - `Configuration` when the field does not match the system size
    /// - `LinearSystem` when the solve fails or produces non-finite values
    pub fn solve(&self, field: &Field) -> Result<Field> {
        let n = self.size();
        if field.len() != n {
            return Err(TransportError::configuration(format!(
                "field has {} cells, diffusion system has {}",
                field.len(),
                n
            )));
        }

        let solution: DVector<f64> = match &self.factorization {
            Factorization::DenseLu(lu) => {
                let mut solution = lu.solve(field.as_vector()).ok_or_else(|| TransportError::LinearSystem {
                    step: 0,
                    reason: "LU solve failed on a singular matrix".to_string(),
                })?;
                // Pivoting for β > 1 routes the identity rows through elimination
                FixedBoundaries::new().restore(field.as_slice(), solution.as_mut_slice());
                solution
            }
            Factorization::Tridiagonal(thomas) => DVector::from_vec(thomas.solve(field.as_slice())?),
        };

        if let Some(index) = solution.iter().position(|v| !v.is_finite()) {
            return Err(TransportError::LinearSystem {
                step: 0,
                reason: format!("non-finite solution value at cell {}", index),
            });
        }

        Ok(Field::from_vector(solution))
    }

    /// The system matrix (boundary rows included)
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// β = D·Δt / Δx²
    pub fn diffusion_factor(&self) -> f64 {
        self.beta
    }

    /// Factorization strategy in use
    pub fn solver_kind(&self) -> LinearSolverKind {
        self.kind
    }

    /// System size
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn both_kinds() -> [LinearSolverKind; 2] {
        [LinearSolverKind::DenseLu, LinearSolverKind::Tridiagonal]
    }

    // ====== Matrix structure ======

    #[test]
    fn test_matrix_structure() {
        for &n in &[3usize, 4, 7, 20] {
            for &beta in &[0.0, 0.25, 1.0, 5.0] {
                let grid = Grid::new(n, 1.0).unwrap();
                let operator = DiffusionOperator::build(&grid, beta, 1.0).unwrap();
                let matrix = operator.matrix();

                assert_eq!(matrix.nrows(), n);
                assert_eq!(matrix.ncols(), n);

                for i in 0..n {
                    for j in 0..n {
                        let expected = if i == 0 || i == n - 1 {
                            if i == j { 1.0 } else { 0.0 }
                        } else if i == j {
                            1.0 + 2.0 * beta
                        } else if i.abs_diff(j) == 1 {
                            -beta
                        } else {
                            0.0
                        };

                        assert_eq!(matrix[(i, j)], expected, "n={} β={} entry ({}, {})", n, beta, i, j);
                    }
                }
            }
        }
    }

    #[test]
    fn test_diffusion_factor() {
        let grid = Grid::new(10, 0.5).unwrap();
        let operator = DiffusionOperator::build(&grid, 1.0, 10.0).unwrap();

        assert_relative_eq!(operator.diffusion_factor(), 40.0);
        assert_eq!(operator.size(), 10);
        assert_eq!(operator.solver_kind(), LinearSolverKind::DenseLu);
    }

    // ====== Solve ======

    #[test]
    fn test_linear_profile_is_steady() {
        for kind in both_kinds() {
            let grid = Grid::new(3, 1.0).unwrap();
            let operator = DiffusionOperator::build_with(&grid, 1.0, 1.0, kind).unwrap();

            let solved = operator.solve(&Field::from_vec(vec![0.0, 1.0, 2.0])).unwrap();

            assert_relative_eq!(solved[0], 0.0);
            assert_relative_eq!(solved[1], 1.0, epsilon = 1e-12);
            assert_relative_eq!(solved[2], 2.0);
        }
    }

    #[test]
    fn test_long_linear_profile_is_steady() {
        for kind in both_kinds() {
            let grid = Grid::new(100, 1.0).unwrap();
            let operator = DiffusionOperator::build_with(&grid, 5.0, 10.0, kind).unwrap();
            let ramp = Field::linear_ramp(&grid);

            let solved = operator.solve(&ramp).unwrap();

            assert!(solved.max_abs_difference(&ramp).unwrap() < 1e-10);
        }
    }

    #[test]
    fn test_boundaries_preserved() {
        for kind in both_kinds() {
            let grid = Grid::new(9, 1.0).unwrap();
            let operator = DiffusionOperator::build_with(&grid, 2.0, 1.0, kind).unwrap();
            let field = Field::from_vec(vec![3.0, 0.0, 5.0, -1.0, 8.0, 0.0, 2.0, 4.0, -7.0]);

            let solved = operator.solve(&field).unwrap();

            assert_eq!(solved[0], 3.0);
            assert_eq!(solved[8], -7.0);
        }
    }

    #[test]
    fn test_boundaries_exact_when_pivoting() {
        // β = 3 and β = 50 make |−β| > 1 in column 0, so partial pivoting swaps rows
        for kind in both_kinds() {
            for &(cells, coefficient, time_step) in &[(5usize, 3.0, 1.0), (100, 5.0, 10.0)] {
                let grid = Grid::new(cells, 1.0).unwrap();
                let operator = DiffusionOperator::build_with(&grid, coefficient, time_step, kind).unwrap();
                let values: Vec<f64> = (0..cells).map(|i| 0.1 + 0.37 * (i as f64).sin()).collect();
                let field = Field::from_vec(values);

                let solved = operator.solve(&field).unwrap();

                assert_eq!(solved[0], field[0], "{:?} n={} left", kind, cells);
                assert_eq!(solved[cells - 1], field[cells - 1], "{:?} n={} right", kind, cells);
            }
        }
    }

    #[test]
    fn test_spike_is_smoothed() {
        let grid = Grid::new(11, 1.0).unwrap();
        let operator = DiffusionOperator::build(&grid, 1.0, 1.0).unwrap();
        let mut values = vec![0.0; 11];
        values[5] = 1.0;

        let solved = operator.solve(&Field::from_vec(values)).unwrap();

        assert!(solved[5] < 1.0);
        assert!(solved[4] > 0.0 && solved[6] > 0.0);
        assert_relative_eq!(solved[4], solved[6], epsilon = 1e-14);
    }

    #[test]
    fn test_zero_coefficient_is_identity() {
        let grid = Grid::new(6, 1.0).unwrap();
        let operator = DiffusionOperator::build(&grid, 0.0, 3.0).unwrap();
        let field = Field::from_vec(vec![1.0, -2.0, 3.0, 0.5, 9.0, 4.0]);

        let solved = operator.solve(&field).unwrap();

        assert!(solved.max_abs_difference(&field).unwrap() < 1e-15);
    }

    #[test]
    fn test_dense_and_tridiagonal_agree() {
        let grid = Grid::new(40, 0.5).unwrap();
        let dense = DiffusionOperator::build_with(&grid, 0.3, 0.2, LinearSolverKind::DenseLu).unwrap();
        let thomas = DiffusionOperator::build_with(&grid, 0.3, 0.2, LinearSolverKind::Tridiagonal).unwrap();
        let field = Field::from_vec((0..40).map(|i| (i as f64 * 0.3).cos()).collect());

        let a = dense.solve(&field).unwrap();
        let b = thomas.solve(&field).unwrap();

        assert!(a.max_abs_difference(&b).unwrap() < 1e-12);
    }

    // ====== Errors ======

    #[test]
    fn test_singular_matrix_detected() {
        // β = −0.5 zeroes the only interior pivot of a 3×3 system
        for kind in both_kinds() {
            let grid = Grid::new(3, 1.0).unwrap();
            let result = DiffusionOperator::build_with(&grid, -0.5, 1.0, kind);

            assert!(result.unwrap_err().is_linear_system(), "{:?}", kind);
        }
    }

    #[test]
    fn test_non_finite_coefficient() {
        let grid = Grid::new(5, 1.0).unwrap();
        let result = DiffusionOperator::build(&grid, f64::NAN, 1.0);

        assert!(result.unwrap_err().is_linear_system());
    }

    #[test]
    fn test_bad_time_step() {
        let grid = Grid::new(5, 1.0).unwrap();

        assert!(DiffusionOperator::build(&grid, 1.0, 0.0).unwrap_err().is_configuration());
        assert!(DiffusionOperator::build(&grid, 1.0, -2.0).unwrap_err().is_configuration());
    }

    #[test]
    fn test_size_mismatch() {
        let grid = Grid::new(5, 1.0).unwrap();
        let operator = DiffusionOperator::build(&grid, 1.0, 1.0).unwrap();

        let result = operator.solve(&Field::uniform(4, 1.0));
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_solver_kind_serde_names() {
        assert_eq!(serde_json::to_string(&LinearSolverKind::DenseLu).unwrap(), "\"dense_lu\"");
        let kind: LinearSolverKind = serde_json::from_str("\"tridiagonal\"").unwrap();
        assert_eq!(kind, LinearSolverKind::Tridiagonal);
    }
}
