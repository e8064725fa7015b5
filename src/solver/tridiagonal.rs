//! Thomas algorithm for tridiagonal systems, factorized once
//!
//! The diffusion matrix never changes during a run, so the forward-sweep
//! coefficients that only depend on the matrix are computed once in
//! [`TridiagonalFactorization::new`] and every solve is a single O(n)
//! forward/backward pass over the right-hand side.
//!
//! Band convention for row `i`:
//!
//! ```text
//! sub[i]·x[i-1] + main[i]·x[i] + sup[i]·x[i+1] = d[i]
//! ```
//!
//! `sub[0]` and `sup[n-1]` are ignored.
//!
//! No pivoting is done. The systems built here are diagonally dominant for
//! `β ≥ 0`; a pivot below [`PIVOT_TOLERANCE`] is reported as singular.

use crate::error::{Result, TransportError};

/// Smallest pivot magnitude accepted during factorization
pub const PIVOT_TOLERANCE: f64 = 1e-300;

/// Cached forward-sweep of a tridiagonal matrix
#[derive(Debug, Clone)]
pub struct TridiagonalFactorization {
    /// Sub-diagonal, as given
    sub: Vec<f64>,
    /// Modified super-diagonal c'_i = sup_i / pivot_i
    modified_sup: Vec<f64>,
    /// Pivots pivot_i = main_i − sub_i·c'_{i-1}
    pivots: Vec<f64>,
}

impl TridiagonalFactorization {
    /// Factorize the bands
    ///
    /// # Errors
    ///
    /// `LinearSystem` (step 0) when the bands have inconsistent lengths, are
    /// empty, or a pivot vanishes or is not finite.
    pub fn new(sub: &[f64], main: &[f64], sup: &[f64]) -> Result<Self> {
        let n = main.len();

        if n == 0 || sub.len() != n || sup.len() != n {
            return Err(TransportError::LinearSystem {
                step: 0,
                reason: format!(
                    "inconsistent band lengths (sub {}, main {}, super {})",
                    sub.len(),
                    n,
                    sup.len()
                ),
            });
        }

        let mut modified_sup = vec![0.0; n];
        let mut pivots = vec![0.0; n];

        for i in 0..n {
            let pivot = if i == 0 {
                main[0]
            } else {
                main[i] - sub[i] * modified_sup[i - 1]
            };

            if !pivot.is_finite() || pivot.abs() < PIVOT_TOLERANCE {
                return Err(TransportError::LinearSystem {
                    step: 0,
                    reason: format!("zero or non-finite pivot {} in row {}", pivot, i),
                });
            }

            pivots[i] = pivot;
            if i + 1 < n {
                modified_sup[i] = sup[i] / pivot;
            }
        }

        Ok(Self { sub: sub.to_vec(), modified_sup, pivots })
    }

    /// System size
    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    /// Check emptiness (never true for a built factorization)
    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// Solve `A·x = rhs`
    ///
    /// # Errors
    ///
    /// `LinearSystem` (step 0) on a size mismatch. The caller relabels the
    /// step.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let n = self.len();
        if rhs.len() != n {
            return Err(TransportError::LinearSystem {
                step: 0,
                reason: format!("right-hand side has {} values, system has {}", rhs.len(), n),
            });
        }

        // Forward sweep
        let mut x = vec![0.0; n];
        x[0] = rhs[0] / self.pivots[0];
        for i in 1..n {
            x[i] = (rhs[i] - self.sub[i] * x[i - 1]) / self.pivots[i];
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            x[i] -= self.modified_sup[i] * x[i + 1];
        }

        Ok(x)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
