//! Registry of named surface fields

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use nalgebra::DVector;

use crate::error::{AdsorptionError, Result};
use crate::mesh::Patch;

// =================================================================================================
// Surface Field
// =================================================================================================

/// Face values of one named quantity, stored per boundary patch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceField {
    name: String,
    patches: BTreeMap<String, DVector<f64>>,
}

impl SurfaceField {
    /// Create an empty field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patches: BTreeMap::new(),
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values on a patch, if that patch has been written
    pub fn patch_values(&self, patch: &str) -> Option<&DVector<f64>> {
        self.patches.get(patch)
    }

    /// Overwrite the values on `patch`
    ///
    /// # Errors
    ///
    /// `TopologyMismatch` when `values` does not have one entry per face.
    pub fn set_patch_values(&mut self, patch: &Patch, values: &DVector<f64>) -> Result<()> {
        patch.check_size(&format!("field '{}'", self.name), values.len())?;

        match self.patches.get_mut(patch.name()) {
            // Reuse the storage when the face count is unchanged
            Some(slot) if slot.len() == values.len() => slot.copy_from(values),
            _ => {
                self.patches.insert(patch.name().to_string(), values.clone());
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Field Registry
// =================================================================================================

/// Registry of surface fields keyed by name
///
/// The registry owns the storage; writers hold a `&mut FieldRegistry`
/// only for the duration of an update.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: HashMap<String, SurfaceField>,
}

impl FieldRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a field of that name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Look up a field by name
    pub fn lookup(&self, name: &str) -> Result<&SurfaceField> {
        self.fields
            .get(name)
            .ok_or_else(|| AdsorptionError::RegistryLookupFailure(name.to_string()))
    }

    /// Look up a field by name for writing
    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut SurfaceField> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| AdsorptionError::RegistryLookupFailure(name.to_string()))
    }

    /// Register `field`, replacing any field of the same name
    pub fn register(&mut self, field: SurfaceField) -> &mut SurfaceField {
        match self.fields.entry(field.name().to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(field);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(field),
        }
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Registered field names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// =================================================================================================
// Tests
// =================================================================================================
