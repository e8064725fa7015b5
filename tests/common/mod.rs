//! Common utilities for integration tests

pub mod mock_sinks;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_sinks::{CountingSink, FailingSink};
pub use test_helpers::{
    assert_fields_close,
    center_of_mass,
    compute_l2_error,
    gaussian_profile,
    relative_error,
};
