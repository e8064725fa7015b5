//! Uniform one-dimensional grid

use crate::error::{Result, TransportError};

/// Smallest grid that still has an interior cell
pub const MIN_CELL_COUNT: usize = 3;

/// Immutable uniform spatial discretization
///
/// Cell `i` sits at `x_i = i * spacing`. The grid is shared read-only by all
/// scenarios of a simulation.
///
/// # Example
///
/// ```rust
/// use advdiff_rs::physics::Grid;
///
/// let grid = Grid::new(5, 0.5).unwrap();
/// assert_eq!(grid.cell_count(), 5);
/// assert_eq!(grid.position(4), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cell_count: usize,
    spacing: f64,
}

impl Grid {
    /// Create a grid
    ///
    /// # Errors
    ///
    /// `Configuration` when `cell_count < 3` or when `spacing` is not a
    /// strictly positive finite number.
    pub fn new(cell_count: usize, spacing: f64) -> Result<Self> {
        if cell_count < MIN_CELL_COUNT {
            return Err(TransportError::configuration(format!(
                "cell_count must be at least {}, got {}",
                MIN_CELL_COUNT, cell_count
            )));
        }

        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(TransportError::configuration(format!(
                "spacing must be positive and finite, got {}",
                spacing
            )));
        }

        Ok(Self { cell_count, spacing })
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Distance between adjacent cells
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Index of the last cell
    pub fn last_index(&self) -> usize {
        self.cell_count - 1
    }

    /// Number of interior cells (all but the two boundaries)
    pub fn interior_count(&self) -> usize {
        self.cell_count - 2
    }

    /// Coordinate of cell `index`
    pub fn position(&self, index: usize) -> f64 {
        index as f64 * self.spacing
    }

    /// All cell coordinates
    pub fn positions(&self) -> Vec<f64> {
        (0..self.cell_count).map(|i| self.position(i)).collect()
    }

    /// Distance from the first to the last cell
    pub fn length(&self) -> f64 {
        self.position(self.last_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_positions() {
        let grid = Grid::new(4, 0.25).unwrap();

        assert_eq!(grid.positions(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(grid.last_index(), 3);
        assert_eq!(grid.interior_count(), 2);
        assert!((grid.length() - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_minimum_grid() {
        let grid = Grid::new(3, 1.0).unwrap();
        assert_eq!(grid.interior_count(), 1);
    }

    #[test]
    fn test_two_cells_rejected() {
        let result = Grid::new(2, 1.0);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.is_configuration());
        assert!(error.to_string().contains("at least 3"));
    }

    #[test]
    fn test_bad_spacing_rejected() {
        assert!(Grid::new(10, 0.0).unwrap_err().is_configuration());
        assert!(Grid::new(10, -1.0).unwrap_err().is_configuration());
        assert!(Grid::new(10, f64::NAN).unwrap_err().is_configuration());
        assert!(Grid::new(10, f64::INFINITY).unwrap_err().is_configuration());
    }
}
