//! First-order Langmuir adsorption/desorption kinetics
//!
//! # Rate Law
//!
//! ```text
//! dY/dt = Kads · C · (Γ - Y) - Kdes · Y
//! ```
//!
//! - `C`: bulk concentration adjacent to the wall
//! - `Y`: adsorbed concentration (per unit area)
//! - `Γ`: saturation capacity
//!
//! # Langmuir Equilibrium
//!
//! Setting dY/dt = 0 for constant `C*`:
//!
//! ```text
//! Y_eq = Γ · Kads · C* / (Kads · C* + Kdes)
//! ```
//!
//! # Example
//!
//! ```rust
//! use wall_adsorb::physics::{KineticParameters, SurfaceKinetics};
//!
//! let kinetics = KineticParameters::new(1e-3, 1e-4, 1.0).unwrap();
//! let y_eq = kinetics.equilibrium(10.0).unwrap();
//! assert!((y_eq - 0.990099).abs() < 1e-6);
//! ```

use crate::error::{AdsorptionError, Result};
use crate::physics::traits::SurfaceKinetics;

/// Kinetic constants of the Langmuir surface model
///
/// Immutable once built: the boundary condition reads them from its
/// dictionary at construction and never changes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticParameters {
    /// Adsorption rate constant Kads \[1/(s·concentration)\]
    kads: f64,
    /// Desorption rate constant Kdes \[1/s\]
    kdes: f64,
    /// Maximum surface concentration Γ
    gamma: f64,
}

impl KineticParameters {
    /// Create validated kinetic parameters
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when a value is non-finite, a rate constant is
    /// negative or the capacity is not strictly positive.
    pub fn new(kads: f64, kdes: f64, gamma: f64) -> Result<Self> {
        check_rate("Kads", kads)?;
        check_rate("Kdes", kdes)?;

        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(AdsorptionError::InvalidParameter {
                name: "Gamma",
                value: gamma,
                reason: "capacity must be finite and strictly positive",
            });
        }

        Ok(Self { kads, kdes, gamma })
    }

    /// Adsorption rate constant
    pub fn kads(&self) -> f64 {
        self.kads
    }

    /// Desorption rate constant
    pub fn kdes(&self) -> f64 {
        self.kdes
    }

    /// Saturation capacity Γ
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Largest forward Euler step that does not overshoot equilibrium
    ///
    /// For the affine rate law the explicit update is monotone as long as
    /// `dt · (Kads·C + Kdes) <= 1`. Returns `None` when the relaxation rate
    /// vanishes (any step is stable).
    pub fn stable_time_step(&self, c: f64) -> Option<f64> {
        let lambda = self.relaxation_rate(c);
        (lambda > 0.0).then(|| 1.0 / lambda)
    }

    /// Clamp a surface concentration into `[0, Γ]`
    #[inline]
    pub fn clamp(&self, y: f64) -> f64 {
        y.clamp(0.0, self.gamma)
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AdsorptionError::InvalidParameter {
            name,
            value,
            reason: "rate constant must be finite and non-negative",
        });
    }
    Ok(())
}

impl SurfaceKinetics for KineticParameters {
    // Applied as written for any C; the kernel clamp bounds the result.
    #[inline]
    fn source(&self, c: f64) -> f64 {
        self.kads * c * self.gamma
    }

    #[inline]
    fn relaxation_rate(&self, c: f64) -> f64 {
        self.kads * c + self.kdes
    }

    fn capacity(&self) -> f64 {
        self.gamma
    }

    fn name(&self) -> &str {
        "First-order Langmuir"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
