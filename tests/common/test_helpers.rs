//! Helper functions for integration tests

use nalgebra::DVector;
use rand::{Rng, rngs::StdRng};

/// Assert that two vectors are close element by element
pub fn assert_vectors_close(v1: &DVector<f64>, v2: &DVector<f64>, tolerance: f64, message: &str) {
    assert_eq!(v1.len(), v2.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &b)) in v1.iter().zip(v2.iter()).enumerate() {
        let diff = (a - b).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// `n` bulk concentrations uniform in `[0, max)`
pub fn random_concentrations(rng: &mut StdRng, n: usize, max: f64) -> DVector<f64> {
    DVector::from_fn(n, |_, _| rng.gen_range(0.0..max))
}
