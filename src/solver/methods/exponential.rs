//! Exponential surface integrator
//!
//! # Mathematical Background
//!
//! For a bulk concentration held constant over the step, the rate law is
//! affine in `Y`:
//!
//! ```text
//! dY/dt = s - λ · Y,     s = Kads · C · Γ,   λ = Kads · C + Kdes
//! ```
//!
//! and has the closed-form solution
//!
//! ```text
//! Y(t + dt) = Y_eq + (Y(t) - Y_eq) · exp(-λ · dt),   Y_eq = s / λ
//! ```
//!
//! # Characteristics
//!
//! - **Exact** for piecewise-constant `C` (no truncation error in time)
//! - **Unconditionally stable** for `C >= 0`: the result always lies
//!   between `Y(t)` and `Y_eq`, hence inside `[0, Γ]` whenever `Y(t)` is.
//!   A negative bulk value gives `λ` below `Kdes` and the kernel clamp
//!   bounds the result
//! - **Complexity**: one `exp` per face and step
//!
//! # When to Use
//!
//! - Outer time steps much larger than `1 / λ` (fast kinetics)
//! - Stiff parameter regimes where Forward Euler would only survive
//!   through clamping

use crate::physics::SurfaceKinetics;
use crate::solver::methods::SurfaceIntegrator;

/// Exact exponential update for piecewise-constant bulk concentration
#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl Exponential {
    /// Create a new exponential integrator
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceIntegrator for Exponential {
    fn advance<K: SurfaceKinetics + ?Sized>(&self, kinetics: &K, c: f64, y: f64, dt: f64) -> f64 {
        let lambda = kinetics.relaxation_rate(c);
        if lambda == 0.0 {
            return y + dt * kinetics.source(c);
        }

        let y_eq = kinetics.source(c) / lambda;
        // exp_m1 keeps precision when λ·dt is tiny
        y - (y - y_eq) * -(-lambda * dt).exp_m1()
    }

    fn name(&self) -> &'static str {
        "Exponential"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
