//! Fixed-gradient (Neumann) capability
//!
//! # Discretisation Contract
//!
//! A fixed-gradient face prescribes the face-normal derivative `g` of the
//! transported field. With `Δ` the inverse face-to-cell distance, the face
//! value follows from the adjacent cell value `C_P`:
//!
//! ```text
//! C_b = C_P + g / Δ
//! ```
//!
//! The engine assembles boundary contributions from four coefficient sets:
//!
//! | Coefficient               | Value   |
//! |---------------------------|---------|
//! | value internal coeffs     | 1       |
//! | value boundary coeffs     | g / Δ   |
//! | gradient internal coeffs  | 0       |
//! | gradient boundary coeffs  | g       |
//!
//! # Update Cycle
//!
//! `updated` is raised by whoever last wrote the gradient (`mark_updated`)
//! and cleared by `evaluate`, so each assembly sees exactly one coefficient
//! update.

use nalgebra::DVector;

use crate::boundary::{PatchCondition, PatchUpdate, UpdateReport};
use crate::config::PatchDictionary;
use crate::error::Result;
use crate::mesh::{Patch, PatchMapper};

// =================================================================================================
// Fixed Gradient Capability
// =================================================================================================

/// Per-face gradient and its "values are current" flag
#[derive(Debug, Clone, PartialEq)]
pub struct FixedGradient {
    gradient: DVector<f64>,
    updated: bool,
}

impl FixedGradient {
    /// Zero gradient on `size` faces
    pub fn zeros(size: usize) -> Self {
        Self::from_gradient(DVector::zeros(size))
    }

    /// Start from given gradient values
    pub fn from_gradient(gradient: DVector<f64>) -> Self {
        Self {
            gradient,
            updated: false,
        }
    }

    /// Read the optional `gradient` entry (zero when absent)
    pub fn from_dictionary(dictionary: &PatchDictionary, size: usize) -> Result<Self> {
        let gradient = dictionary
            .lookup_face_values("gradient", size)?
            .unwrap_or_else(|| DVector::zeros(size));
        Ok(Self::from_gradient(gradient))
    }

    /// Number of faces
    pub fn size(&self) -> usize {
        self.gradient.len()
    }

    /// Prescribed face-normal gradient
    pub fn gradient(&self) -> &DVector<f64> {
        &self.gradient
    }

    /// Replace the gradient values
    ///
    /// # Errors
    ///
    /// `TopologyMismatch` when the face count changes.
    pub fn set_gradient(&mut self, patch: &Patch, gradient: DVector<f64>) -> Result<()> {
        patch.check_size("gradient", gradient.len())?;
        self.gradient = gradient;
        Ok(())
    }

    /// Whether the coefficients are current for this assembly
    pub fn updated(&self) -> bool {
        self.updated
    }

    /// Flag the gradient as current
    pub fn mark_updated(&mut self) {
        self.updated = true;
    }

    /// Face values from the adjacent cell values, clears `updated`
    pub fn evaluate(&mut self, patch: &Patch, internal: &DVector<f64>) -> Result<DVector<f64>> {
        patch.check_size("internal field", internal.len())?;
        patch.check_size("gradient", self.gradient.len())?;

        let values = internal + self.value_boundary_coeffs(patch);
        self.updated = false;
        Ok(values)
    }

    /// Face-normal gradient seen by the engine
    pub fn sn_grad(&self) -> &DVector<f64> {
        &self.gradient
    }

    /// Coefficient of the cell value in the face value
    pub fn value_internal_coeffs(&self) -> DVector<f64> {
        DVector::from_element(self.size(), 1.0)
    }

    /// Explicit part of the face value, `g / Δ`
    pub fn value_boundary_coeffs(&self, patch: &Patch) -> DVector<f64> {
        self.gradient.component_div(patch.delta_coeffs())
    }

    /// Coefficient of the cell value in the face gradient
    pub fn gradient_internal_coeffs(&self) -> DVector<f64> {
        DVector::zeros(self.size())
    }

    /// Explicit part of the face gradient, `g`
    pub fn gradient_boundary_coeffs(&self) -> DVector<f64> {
        self.gradient.clone()
    }

    /// Carry the gradient over to a new patch (new faces get zero)
    pub fn mapped(&self, mapper: &dyn PatchMapper) -> Result<Self> {
        Ok(Self::from_gradient(mapper.map(&self.gradient, 0.0)?))
    }

    /// Emit the `gradient` entry
    pub fn write(&self, dictionary: &mut PatchDictionary) {
        dictionary.insert("gradient", &self.gradient);
    }
}

// =================================================================================================
// Plain Fixed-Gradient Condition
// =================================================================================================

/// Condition type name of [`FixedGradientCondition`]
pub const FIXED_GRADIENT_TYPE: &str = "fixedGradient";

/// Condition holding a constant, user-supplied gradient
#[derive(Debug, Clone)]
pub struct FixedGradientCondition {
    patch: Patch,
    gradient: FixedGradient,
}

impl FixedGradientCondition {
    /// Constant gradient on `patch`
    pub fn new(patch: Patch, gradient: DVector<f64>) -> Result<Self> {
        patch.check_size("gradient", gradient.len())?;
        Ok(Self {
            patch,
            gradient: FixedGradient::from_gradient(gradient),
        })
    }

    /// Construct from the `gradient` entry of `dictionary`
    pub fn from_dictionary(patch: &Patch, dictionary: &PatchDictionary) -> Result<Self> {
        Ok(Self {
            gradient: FixedGradient::from_dictionary(dictionary, patch.size())?,
            patch: patch.clone(),
        })
    }
}

impl PatchCondition for FixedGradientCondition {
    fn type_name(&self) -> &'static str {
        FIXED_GRADIENT_TYPE
    }

    fn patch(&self) -> &Patch {
        &self.patch
    }

    fn fixed_gradient(&self) -> &FixedGradient {
        &self.gradient
    }

    fn fixed_gradient_mut(&mut self) -> &mut FixedGradient {
        &mut self.gradient
    }

    fn update_coeffs(&mut self, _ctx: &mut PatchUpdate<'_>) -> Result<Option<UpdateReport>> {
        self.gradient.mark_updated();
        Ok(None)
    }

    fn evaluate(&mut self, internal: &DVector<f64>) -> Result<DVector<f64>> {
        self.gradient.evaluate(&self.patch, internal)
    }

    fn write(&self, dictionary: &mut PatchDictionary) {
        dictionary.insert("type", FIXED_GRADIENT_TYPE);
        self.gradient.write(dictionary);
    }

    fn map_onto(&self, patch: &Patch, mapper: &dyn PatchMapper) -> Result<Box<dyn PatchCondition>> {
        patch.check_size("mapper", mapper.size())?;
        Ok(Box::new(Self {
            patch: patch.clone(),
            gradient: self.gradient.mapped(mapper)?,
        }))
    }

    fn clone_box(&self) -> Box<dyn PatchCondition> {
        Box::new(self.clone())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
