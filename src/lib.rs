//! wall-adsorb: Adsorbing Wall Boundary Condition
//!
//! A fixed-gradient (Neumann) boundary condition for a transported scalar,
//! coupled to first-order Langmuir adsorption/desorption kinetics of a surface
//! species that lives on the wall faces.
//!
//! # Architecture
//!
//! wall-adsorb is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Surface kinetics define the rate law (what to integrate)
//!    - Integration schemes advance it over a step (how to integrate)
//!
//! 2. **Composition over inheritance**
//!    - Every condition composes a `FixedGradient` capability read by the
//!      discretisation engine
//!    - Conditions are built by `type` name through a registry
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::DVector;
//! use wall_adsorb::prelude::*;
//!
//! # fn main() -> wall_adsorb::error::Result<()> {
//! // 1. Patch geometry and its dictionary
//! let patch = Patch::uniform("wall", 4, 1.0, 1.0);
//! let dict = PatchDictionary::new("wall")
//!     .with("type", "fixedAdsorptionGradient")
//!     .with("Kads", 1e-3)
//!     .with("Kdes", 1e-4)
//!     .with("Gamma", 1.0);
//!
//! // 2. Build the condition by name
//! let mut wall = ConditionRegistry::with_builtins().construct(&patch, "C", &dict)?;
//!
//! // 3. Time loop
//! let control = TimeControl::new(100.0, 100);
//! control.validate()?;
//! let mut time = control.start();
//! let mut registry = FieldRegistry::new();
//! let c = DVector::from_element(4, 10.0);
//! let d = DVector::from_element(4, 1.0);
//!
//! for _ in 0..control.time_steps {
//!     time.advance();
//!     wall.update_coeffs(&mut PatchUpdate::new(&time, &c, &d, &mut registry))?;
//!     wall.evaluate(&c)?;
//! }
//!
//! // 4. Surface state mirrored in the registry
//! let surface = registry.lookup("C_ads")?.patch_values("wall").unwrap();
//! assert!(surface.iter().all(|&y| y > 0.0 && y < 1.0));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Surface kinetics (rate law)
//! - [`solver`]: Integration schemes, time contracts, face-parallel loop
//! - [`boundary`]: Patch conditions and the adsorption kernel
//! - [`mesh`]: Patch geometry and face mapping
//! - [`fields`]: Registry of mirrored surface fields
//! - [`config`]: Patch dictionaries
//! - [`output`]: Surface history and CSV export
//! - [`error`]: Error type

pub mod error;

// Core modules
pub mod physics;
pub mod solver;

pub mod boundary;
pub mod config;
pub mod fields;
pub mod mesh;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use wall_adsorb::prelude::*;
    //! ```
    pub use crate::boundary::{ConditionRegistry,
                              FixedAdsorptionGradient,
                              FixedGradient,
                              PatchCondition,
                              PatchUpdate,
                              SurfaceStateStore,
                              UpdateReport};
    pub use crate::config::PatchDictionary;
    pub use crate::error::AdsorptionError;
    pub use crate::fields::FieldRegistry;
    pub use crate::mesh::{DirectMapper, Patch, PatchMapper};
    pub use crate::physics::{KineticParameters, SurfaceKinetics};
    pub use crate::solver::{IntegrationScheme, TimeControl, TimeState};
}
