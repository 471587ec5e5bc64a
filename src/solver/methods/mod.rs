//! Integration schemes for the adsorbed phase
//!
//! This module contains concrete implementations of the [`SurfaceIntegrator`]
//! trait, and the [`IntegrationScheme`] selector read from the boundary
//! dictionary.
//!
//! # Available Methods
//!
//! - **[`ForwardEuler`]**: explicit first-order update
//!   - Cost: 1 rate evaluation per face
//!   - Default; result clamped to `[0, Γ]` by the boundary kernel
//!
//! - **[`Exponential`]**: exact solution for constant bulk concentration
//!   over the step
//!   - Cost: 1 exponential per face
//!   - Unconditionally stable, recommended for stiff kinetics
//!
//! # Example
//!
//! ```rust
//! use wall_adsorb::physics::KineticParameters;
//! use wall_adsorb::solver::IntegrationScheme;
//!
//! let kinetics = KineticParameters::new(1e-3, 1e-4, 1.0).unwrap();
//!
//! let scheme: IntegrationScheme = "exponential".parse().unwrap();
//! let y = scheme.advance(&kinetics, 10.0, 0.0, 1.0);
//! assert!(y > 0.0 && y < 0.01);
//! ```

pub mod euler;
pub mod exponential;

pub use euler::ForwardEuler;
pub use exponential::Exponential;

use std::fmt;
use std::str::FromStr;

use crate::error::AdsorptionError;
use crate::physics::SurfaceKinetics;

/// Advances one face's adsorbed concentration over one step
///
/// Implementations return the raw updated value; clamping to the physical
/// range is applied by the caller so that every scheme shares the same
/// invariant handling.
pub trait SurfaceIntegrator: Send + Sync {
    /// Value of `Y` after a step `dt` at constant bulk concentration `c`
    fn advance<K: SurfaceKinetics + ?Sized>(&self, kinetics: &K, c: f64, y: f64, dt: f64) -> f64;

    /// Name of the scheme
    fn name(&self) -> &'static str;
}

/// Scheme selected by the `scheme` dictionary keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationScheme {
    /// Forward Euler (keyword `euler`)
    #[default]
    ForwardEuler,

    /// Exact exponential update (keyword `exponential`)
    Exponential,
}

impl IntegrationScheme {
    /// Dictionary keyword of the scheme
    pub fn keyword(&self) -> &'static str {
        match self {
            IntegrationScheme::ForwardEuler => "euler",
            IntegrationScheme::Exponential => "exponential",
        }
    }

    /// Whether the scheme can leave `[0, Γ]` without clamping
    pub fn is_explicit(&self) -> bool {
        matches!(self, IntegrationScheme::ForwardEuler)
    }

    /// Advance `y` with the selected scheme
    #[inline]
    pub fn advance<K: SurfaceKinetics + ?Sized>(&self, kinetics: &K, c: f64, y: f64, dt: f64) -> f64 {
        match self {
            IntegrationScheme::ForwardEuler => ForwardEuler.advance(kinetics, c, y, dt),
            IntegrationScheme::Exponential => Exponential.advance(kinetics, c, y, dt),
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            IntegrationScheme::ForwardEuler => ForwardEuler.name(),
            IntegrationScheme::Exponential => Exponential.name(),
        }
    }
}

impl FromStr for IntegrationScheme {
    type Err = AdsorptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" | "Euler" => Ok(IntegrationScheme::ForwardEuler),
            "exponential" | "Exponential" => Ok(IntegrationScheme::Exponential),
            other => Err(AdsorptionError::InvalidEntry {
                key: "scheme".to_string(),
                message: format!("unknown scheme '{other}', expected 'euler' or 'exponential'"),
            }),
        }
    }
}

impl fmt::Display for IntegrationScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
