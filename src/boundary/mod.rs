//! Patch boundary conditions
//!
//! # Architecture
//!
//! A boundary condition is a [`PatchCondition`] trait object owned by the
//! surrounding engine, one per patch. Each condition composes a
//! [`FixedGradient`] capability: the engine only ever reads the gradient and
//! the assembly coefficients from it, while the condition decides how the
//! gradient is computed each step.
//!
//! ```text
//! TimeState ──► update_coeffs(PatchUpdate) ──► FixedGradient ──► engine assembly
//!                      │                                              │
//!                      └──► FieldRegistry ("<field>_ads")     evaluate() clears "updated"
//! ```
//!
//! - [`FixedGradientCondition`]: constant user-supplied gradient
//! - [`FixedAdsorptionGradient`]: gradient driven by Langmuir surface kinetics
//! - [`ConditionRegistry`]: construction by `type` name from a dictionary

pub mod adsorption;
pub mod fixed_gradient;
pub mod registry;
pub mod surface_state;

use std::fmt;

use nalgebra::DVector;

use crate::config::PatchDictionary;
use crate::error::Result;
use crate::fields::FieldRegistry;
use crate::mesh::{Patch, PatchMapper};
use crate::solver::TimeState;

pub use adsorption::{FIXED_ADSORPTION_GRADIENT_TYPE, FixedAdsorptionGradient, KernelState};
pub use fixed_gradient::{FIXED_GRADIENT_TYPE, FixedGradient, FixedGradientCondition};
pub use registry::{ConditionFactory, ConditionRegistry};
pub use surface_state::SurfaceStateStore;

// =================================================================================================
// Update Context
// =================================================================================================

/// Everything a condition may read or write during one coefficient update
///
/// Per-face arrays are in patch face order and must have the patch size.
pub struct PatchUpdate<'a> {
    /// Current position of the outer time loop
    pub time: &'a TimeState,

    /// Bulk concentration at the boundary faces
    pub concentration: &'a DVector<f64>,

    /// Diffusivity of the bulk species at the boundary faces
    pub diffusivity: &'a DVector<f64>,

    /// Registry holding mirrored output fields
    pub registry: &'a mut FieldRegistry,
}

impl<'a> PatchUpdate<'a> {
    pub fn new(
        time: &'a TimeState,
        concentration: &'a DVector<f64>,
        diffusivity: &'a DVector<f64>,
        registry: &'a mut FieldRegistry,
    ) -> Self {
        Self {
            time,
            concentration,
            diffusivity,
            registry,
        }
    }
}

/// Summary of one performed coefficient update
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateReport {
    /// Time index the update was performed for
    pub time_index: u64,

    /// Whether the kinetics were integrated (false when no step was available)
    pub integrated: bool,

    /// Faces whose inputs were unusable and whose state was held
    pub rejected_faces: usize,

    /// Faces whose integrated value had to be clamped into `[0, Γ]`
    pub clamped_faces: usize,

    /// Area-weighted adsorbed amount after the update
    pub adsorbed_amount: f64,
}

// =================================================================================================
// Patch Condition Trait
// =================================================================================================

/// Boundary condition applied to one patch
///
/// # Responsibility
///
/// - Keep the [`FixedGradient`] current for the time step being assembled
/// - Serialise itself back into a dictionary readable by its factory
/// - Carry its state over when the mesh changes
pub trait PatchCondition: Send + Sync + fmt::Debug {
    /// Registered `type` name
    fn type_name(&self) -> &'static str;

    /// Patch the condition is applied to
    fn patch(&self) -> &Patch;

    /// Gradient capability read by the engine
    fn fixed_gradient(&self) -> &FixedGradient;

    fn fixed_gradient_mut(&mut self) -> &mut FixedGradient;

    /// Make the gradient current for `ctx.time`
    ///
    /// Returns `None` when nothing had to be recomputed.
    fn update_coeffs(&mut self, ctx: &mut PatchUpdate<'_>) -> Result<Option<UpdateReport>>;

    /// Face values from the adjacent cell values; clears the updated flag
    fn evaluate(&mut self, internal: &DVector<f64>) -> Result<DVector<f64>>;

    /// Write the configuration and state entries
    fn write(&self, dictionary: &mut PatchDictionary);

    /// Same condition carried onto `patch` through `mapper`
    fn map_onto(&self, patch: &Patch, mapper: &dyn PatchMapper) -> Result<Box<dyn PatchCondition>>;

    fn clone_box(&self) -> Box<dyn PatchCondition>;

    /// Dictionary holding everything `write` emits, named after the patch
    fn to_dictionary(&self) -> PatchDictionary {
        let mut dictionary = PatchDictionary::new(self.patch().name());
        self.write(&mut dictionary);
        dictionary
    }
}

impl Clone for Box<dyn PatchCondition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
