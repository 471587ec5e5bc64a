//! Surface kinetics trait
//!
//! This module defines the contract between the boundary kernel and the
//! surface reaction model:
//! - `SurfaceKinetics`: rate law dY/dt = f(C, Y) of the adsorbed phase

// =================================================================================================
// Surface Kinetics Trait
// =================================================================================================

/// Trait for adsorbed-phase rate laws
///
/// # Responsibility
/// Evaluates the rate equation of the surface species at one face.
/// Does NOT integrate it (that's the job of the integration scheme in
/// [`solver::methods`](crate::solver::methods)).
///
/// The kinetics provide the "physics" (rate law), the scheme provides the
/// "numerics" (how to advance it over one time step).
///
/// # Linear structure
///
/// Every implementation must be affine in `Y` for fixed `C`:
///
/// ```text
/// dY/dt = source(C) - relaxation_rate(C) * Y
/// ```
///
/// which is what lets the exponential scheme integrate it exactly.
pub trait SurfaceKinetics: Send + Sync {
    /// Net adsorption rate dY/dt at bulk concentration `c` and surface
    /// concentration `y`
    fn rate(&self, c: f64, y: f64) -> f64 {
        self.source(c) - self.relaxation_rate(c) * y
    }

    /// Part of the rate independent of `Y`
    fn source(&self, c: f64) -> f64;

    /// Coefficient of `-Y` in the rate law (non-negative for `C >= 0`)
    fn relaxation_rate(&self, c: f64) -> f64;

    /// Saturation capacity of the surface
    fn capacity(&self) -> f64;

    /// Steady-state surface concentration for a constant bulk concentration
    ///
    /// Returns `None` when the relaxation rate is not positive (no restoring
    /// force toward a steady state).
    fn equilibrium(&self, c: f64) -> Option<f64> {
        let lambda = self.relaxation_rate(c);
        if lambda > 0.0 {
            Some(self.source(c) / lambda)
        } else {
            None
        }
    }

    /// Name of the rate law (used for logging)
    fn name(&self) -> &str;
}
