//! Boundary patch geometry
//!
//! The finite-volume mesh itself is owned by the surrounding application.
//! This module only describes what a boundary condition needs to know about
//! the faces it is attached to:
//!
//! - `Patch`: name, face areas and face-to-cell delta coefficients
//! - `PatchMapper`: face correspondence used when the patch changes
//!   during a mesh update

mod mapper;

pub use mapper::{DirectMapper, PatchMapper};

use nalgebra::DVector;

use crate::error::{AdsorptionError, Result};

/// A named set of boundary faces
///
/// # Face data
///
/// - `face_areas`: |Sf| of each face, used for area-weighted totals
/// - `delta_coeffs`: 1 / distance between face centre and owner cell
///   centre, used to turn a gradient into a face value
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    name: String,
    face_areas: DVector<f64>,
    delta_coeffs: DVector<f64>,
}

impl Patch {
    /// Create a patch from per-face geometry
    ///
    /// # Errors
    ///
    /// `TopologyMismatch` when the two arrays differ in length.
    pub fn new(
        name: impl Into<String>,
        face_areas: DVector<f64>,
        delta_coeffs: DVector<f64>,
    ) -> Result<Self> {
        let name = name.into();
        if face_areas.len() != delta_coeffs.len() {
            return Err(AdsorptionError::topology(
                format!("delta coefficients of patch '{name}'"),
                face_areas.len(),
                delta_coeffs.len(),
            ));
        }

        Ok(Self {
            name,
            face_areas,
            delta_coeffs,
        })
    }

    /// Patch with `n_faces` identical faces
    pub fn uniform(name: impl Into<String>, n_faces: usize, area: f64, delta_coeff: f64) -> Self {
        Self {
            name: name.into(),
            face_areas: DVector::from_element(n_faces, area),
            delta_coeffs: DVector::from_element(n_faces, delta_coeff),
        }
    }

    /// Patch name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of faces
    pub fn size(&self) -> usize {
        self.face_areas.len()
    }

    /// Face area magnitudes
    pub fn face_areas(&self) -> &DVector<f64> {
        &self.face_areas
    }

    /// Face-to-cell inverse distances
    pub fn delta_coeffs(&self) -> &DVector<f64> {
        &self.delta_coeffs
    }

    /// Total patch area
    pub fn total_area(&self) -> f64 {
        self.face_areas.sum()
    }

    /// Check that a per-face array matches this patch
    pub fn check_size(&self, what: &str, len: usize) -> Result<()> {
        if len != self.size() {
            return Err(AdsorptionError::topology(
                format!("{what} on patch '{}'", self.name),
                self.size(),
                len,
            ));
        }
        Ok(())
    }
}
