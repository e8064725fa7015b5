//! Helper functions for integration tests

use advdiff_rs::physics::{Field, Grid};

/// Assert that two fields are close (within tolerance)
pub fn assert_fields_close(actual: &Field, expected: &Field, tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &e)) in actual.as_slice().iter().zip(expected.as_slice()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: Cell {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Root-mean-square difference between two fields
pub fn compute_l2_error(a: &Field, b: &Field) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let sum: f64 = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).powi(2))
        .sum();

    (sum / n as f64).sqrt()
}

/// Gaussian bump of unit height centered on `center`
pub fn gaussian_profile(grid: &Grid, center: f64, width: f64) -> Vec<f64> {
    grid.positions()
        .iter()
        .map(|x| (-(x - center).powi(2) / (2.0 * width * width)).exp())
        .collect()
}

/// First moment of a field over the grid coordinates
pub fn center_of_mass(grid: &Grid, field: &Field) -> f64 {
    let mass = field.total();
    grid.positions()
        .iter()
        .zip(field.as_slice())
        .map(|(x, f)| x * f)
        .sum::<f64>()
        / mass
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
