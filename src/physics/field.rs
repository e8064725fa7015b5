//! Scalar field carried by the grid
//!
//! A `Field` is the transported quantity sampled at every grid cell. It wraps
//! a `DVector<f64>` so that the implicit solve can hand its result back
//! without copying, and it never changes length once created.

use nalgebra::DVector;
use std::fmt;
use std::ops::Index;

use crate::error::{Result, TransportError};
use crate::physics::Grid;

/// Transported quantity at each grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: DVector<f64>,
}

impl Field {
    // ======================================= constructors =======================================

    /// Wrap an existing vector
    pub fn from_vector(values: DVector<f64>) -> Self {
        Self { values }
    }

    /// Build from a `Vec<f64>`
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::from_vector(DVector::from_vec(values))
    }

    /// Uniform field
    pub fn uniform(cell_count: usize, value: f64) -> Self {
        Self::from_vector(DVector::from_element(cell_count, value))
    }

    /// Linear ramp `f_i = x_i / cell_count`
    ///
    /// Goes from 0 toward `spacing` (≈ 1 on a unit grid).
    pub fn linear_ramp(grid: &Grid) -> Self {
        let n = grid.cell_count() as f64;
        Self::from_vector(DVector::from_fn(grid.cell_count(), |i, _| grid.position(i) / n))
    }

    /// Build from a profile that must match the grid
    ///
    /// # Errors
    ///
    /// `Configuration` on a length mismatch or a non-finite value.
    pub fn from_profile(grid: &Grid, profile: &[f64]) -> Result<Self> {
        if profile.len() != grid.cell_count() {
            return Err(TransportError::configuration(format!(
                "initial profile has {} values but the grid has {} cells",
                profile.len(),
                grid.cell_count()
            )));
        }

        if let Some(index) = profile.iter().position(|v| !v.is_finite()) {
            return Err(TransportError::configuration(format!(
                "initial profile value at index {} is not finite",
                index
            )));
        }

        Ok(Self::from_vec(profile.to_vec()))
    }

    // ========================================== Queries ==========================================

    /// Number of cells
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Underlying vector
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.values
    }

    /// Consume into the underlying vector
    pub fn into_vector(self) -> DVector<f64> {
        self.values
    }

    /// Copy of the values
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Value at the left boundary
    pub fn first(&self) -> Option<f64> {
        self.as_slice().first().copied()
    }

    /// Value at the right boundary
    pub fn last(&self) -> Option<f64> {
        self.as_slice().last().copied()
    }

    /// Sum of all cell values
    pub fn total(&self) -> f64 {
        self.values.sum()
    }

    /// Largest absolute difference with another field of the same length
    pub fn max_abs_difference(&self, other: &Field) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }

    // ========================================= Mutation =========================================

    /// Mutable access to the values; the length cannot change through a slice
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        self.values.as_mut_slice()
    }
}

impl Index<usize> for Field {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<f64>> for Field {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl From<DVector<f64>> for Field {
    fn from(values: DVector<f64>) -> Self {
        Self::from_vector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_ramp() {
        let grid = Grid::new(4, 1.0).unwrap();
        let field = Field::linear_ramp(&grid);

        assert_eq!(field.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_linear_ramp_scales_with_spacing() {
        let grid = Grid::new(5, 2.0).unwrap();
        let field = Field::linear_ramp(&grid);

        assert_relative_eq!(field[4], 8.0 / 5.0);
    }

    #[test]
    fn test_boundaries() {
        let field = Field::from_vec(vec![3.0, 1.0, 2.0, 7.0]);

        assert_eq!(field.first(), Some(3.0));
        assert_eq!(field.last(), Some(7.0));
        assert_eq!(field.len(), 4);
        assert_relative_eq!(field.total(), 13.0);
    }

    #[test]
    fn test_from_profile_length_mismatch() {
        let grid = Grid::new(5, 1.0).unwrap();
        let result = Field::from_profile(&grid, &[0.0, 1.0, 2.0]);

        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_from_profile_rejects_nan() {
        let grid = Grid::new(3, 1.0).unwrap();
        let result = Field::from_profile(&grid, &[0.0, f64::NAN, 2.0]);

        let error = result.unwrap_err();
        assert!(error.to_string().contains("index 1"));
    }

    #[test]
    fn test_max_abs_difference() {
        let a = Field::from_vec(vec![0.0, 1.0, 2.0]);
        let b = Field::from_vec(vec![0.0, 1.5, 1.0]);

        assert_eq!(a.max_abs_difference(&b), Some(1.0));
        assert_eq!(a.max_abs_difference(&Field::uniform(2, 0.0)), None);
    }

    #[test]
    fn test_display() {
        let field = Field::from_vec(vec![0.0, 1.1, 2.0]);
        assert_eq!(format!("{}", field), "[0, 1.1, 2]");
    }
}
