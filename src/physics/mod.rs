//! Surface physics
//!
//! This module provides the rate law of the adsorbed phase that the boundary
//! kernel integrates at each wall face.
//!
//! # Core Concepts
//!
//! - **Surface Kinetics**: rate of change of the adsorbed concentration as a
//!   function of the bulk concentration next to the wall
//! - **Kinetic Parameters**: the three Langmuir constants `Kads`, `Kdes`, `Γ`
//!
//! # Architecture
//!
//! Kinetics are **separate from the time integration**:
//! - The kinetics provide the **rate law** (physics)
//! - The scheme in [`solver::methods`](crate::solver::methods) provides the
//!   **update** over one step (numerics)
//!
//! # Example
//!
//! ```rust
//! use wall_adsorb::physics::{KineticParameters, SurfaceKinetics};
//!
//! let kinetics = KineticParameters::new(1e-3, 1e-4, 1.0).unwrap();
//!
//! // Rate on a clean surface exposed to C = 10
//! let rate = kinetics.rate(10.0, 0.0);
//! assert!((rate - 0.01).abs() < 1e-12);
//! ```

pub mod kinetics;
pub mod traits;

pub use kinetics::KineticParameters;
pub use traits::SurfaceKinetics;
