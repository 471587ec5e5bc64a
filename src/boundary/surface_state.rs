//! Surface-state store
//!
//! Holds the adsorbed concentration `Y` of every face of a patch, in patch
//! face order, for the whole life of the boundary condition. Its lifecycle:
//!
//! - **Construction**: uniform value (fresh case) or explicit values
//!   (restart from a written dictionary)
//! - **Update**: replaced once per time step by the boundary kernel
//! - **Mesh change**: remapped onto the new face set, new faces default to 0
//! - **Output**: mirrored into a registered surface field after each update

use nalgebra::DVector;

use crate::error::Result;
use crate::fields::{FieldRegistry, SurfaceField};
use crate::mesh::{Patch, PatchMapper};

/// Per-face adsorbed concentration
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceStateStore {
    values: DVector<f64>,
}

impl SurfaceStateStore {
    /// Same value on every face
    pub fn uniform(face_count: usize, value: f64) -> Self {
        Self {
            values: DVector::from_element(face_count, value),
        }
    }

    /// Explicit per-face values
    pub fn from_values(values: DVector<f64>) -> Self {
        Self { values }
    }

    /// Number of faces
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store has no faces
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adsorbed concentration at `face`
    pub fn get(&self, face: usize) -> Option<f64> {
        self.values.get(face).copied()
    }

    /// All face values
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Replace every face value at once (kernel only)
    pub(crate) fn commit(&mut self, patch: &Patch, values: DVector<f64>) -> Result<()> {
        patch.check_size("surface state", values.len())?;
        self.values = values;
        Ok(())
    }

    /// Whether every value lies in `[0, capacity]`
    pub fn within_bounds(&self, capacity: f64) -> bool {
        self.values.iter().all(|&y| (0.0..=capacity).contains(&y))
    }

    /// Area-weighted amount adsorbed on the patch, Σ Y·|Sf|
    pub fn adsorbed_amount(&self, patch: &Patch) -> f64 {
        self.values.dot(patch.face_areas())
    }

    /// Remap onto a new face set
    ///
    /// # Errors
    ///
    /// `TopologyMismatch` when the mapper addresses a face this store
    /// does not have.
    pub fn mapped(&self, mapper: &dyn PatchMapper, default: f64) -> Result<Self> {
        Ok(Self::from_values(mapper.map(&self.values, default)?))
    }

    /// Mirror the values into the registered field `name`
    ///
    /// A missing field is a recoverable condition: a zero-initialised field
    /// is registered and then filled. Returns `true` when the field had to
    /// be created.
    pub fn publish(&self, name: &str, patch: &Patch, registry: &mut FieldRegistry) -> Result<bool> {
        let created = match registry.lookup(name) {
            Ok(_) => false,
            Err(err) => {
                log::debug!("{err}, registering a zero-initialised surface field");
                let mut field = SurfaceField::new(name);
                field.set_patch_values(patch, &DVector::zeros(patch.size()))?;
                registry.register(field);
                true
            }
        };

        registry.lookup_mut(name)?.set_patch_values(patch, &self.values)?;
        Ok(created)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
