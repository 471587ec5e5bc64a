//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{WallCase, reference_dictionary, reference_kinetics, stiff_kinetics};
pub use test_helpers::{assert_vectors_close, random_concentrations, relative_error};
