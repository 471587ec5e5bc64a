//! Forward Euler surface integrator
//!
//! # Mathematical Background
//!
//! The adsorbed concentration at a face obeys
//!
//! ```text
//! dY/dt = f(C, Y) = Kads · C · (Γ - Y) - Kdes · Y
//! ```
//!
//! The explicit update over one step of the outer time loop is
//!
//! ```text
//! Y_{n+1} = Y_n + dt · f(C_n, Y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: monotone while `dt · (Kads·C + Kdes) <= 1`, oscillating
//!   and eventually divergent beyond `2 / (Kads·C + Kdes)`
//! - **Complexity**: 1 rate evaluation per face and step
//!
//! # Limitations
//!
//! ⚠️ Overshoots the `[0, Γ]` range for large `dt` or stiff parameters.
//! The boundary kernel clamps the result; use the exponential
//! integrator when the outer time step is much larger than the
//! kinetic time scale.

use crate::physics::SurfaceKinetics;
use crate::solver::methods::SurfaceIntegrator;

// =================================================================================================
// Forward Euler Integrator
// =================================================================================================

/// Forward Euler update of the surface concentration
///
/// Returns the raw (unclamped) value `y + dt · f(c, y)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl ForwardEuler {
    /// Create a new Forward Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceIntegrator for ForwardEuler {
    #[inline]
    fn advance<K: SurfaceKinetics + ?Sized>(&self, kinetics: &K, c: f64, y: f64, dt: f64) -> f64 {
        y + dt * kinetics.rate(c, y)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
