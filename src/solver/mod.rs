//! Time integration of the surface state
//!
//! This module provides everything the boundary kernel needs from the
//! "numerics" side, kept apart from the rate law in [`physics`](crate::physics):
//!
//! - **`time`**: contracts with the outer time loop
//!   - `TimeControl`: total time and step count of a run
//!   - `TimeState`: current time index, value and step size
//!
//! - **`methods`**: per-face integration schemes
//!   - `ForwardEuler`: explicit first-order update
//!   - `Exponential`: exact update for constant bulk concentration
//!   - `IntegrationScheme`: dictionary-selectable dispatcher
//!
//! - **Face-parallel execution**: [`map_faces`] runs a per-face kernel
//!   sequentially or with Rayon depending on the face count and
//!   [`parallel_threshold()`].
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Outer loop     │  advances TimeState
//! └────────┬────────┘
//!          │ update_coeffs
//! ┌────────▼────────┐      ┌────────────────────┐
//! │ Boundary kernel │─────►│ IntegrationScheme  │ per face (map_faces)
//! └────────┬────────┘      └────────────────────┘
//!          │
//! ┌────────▼────────┐
//! │ Fixed gradient  │  consumed by the discretisation engine
//! └─────────────────┘
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
pub mod methods;
mod time;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the face loop off to Rayon is a numerical-execution
// concern, not a physics concern, so it lives here rather than in the kernel.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on every
// update. Relaxed ordering is sufficient: the value is a performance hint,
// not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of faces above which [`map_faces`] switches to parallel
/// iteration.
///
/// Below roughly a thousand faces the per-face work (a handful of flops)
/// is cheaper than Rayon's thread-pool dispatch.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// # Example
///
/// ```rust
/// use wall_adsorb::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use wall_adsorb::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Face Loop
// =================================================================================================

/// Evaluate `kernel(face)` for every face index in `0..n_faces`
///
/// Results are returned in face order. Faces carry no cross-face
/// dependencies, so above [`parallel_threshold()`] (and with the `parallel`
/// feature) the calls are distributed over the Rayon pool.
pub fn map_faces<T, F>(n_faces: usize, kernel: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if n_faces > parallel_threshold() {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return (0..n_faces).into_par_iter().map(&kernel).collect();
        }
    }

    (0..n_faces).map(kernel).collect()
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::{Exponential, ForwardEuler, IntegrationScheme, SurfaceIntegrator};
pub use time::{TimeControl, TimeState};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_map_faces_keeps_order_sequential() {
        let out = map_faces(5, |i| i * 2);
        assert_eq!(out, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_map_faces_keeps_order_parallel() {
        let _guard = ThresholdGuard::save(8);
        let out = map_faces(2000, |i| i as f64);
        assert_eq!(out.len(), 2000);
        assert!(out.iter().enumerate().all(|(i, &v)| v == i as f64));
    }
}
