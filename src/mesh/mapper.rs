//! Face mapping across mesh changes
//!
//! When the mesh is refined, redistributed or otherwise changed, each
//! boundary condition is rebuilt on the new patch and its per-face state is
//! carried over through a mapper:
//!
//! ```text
//! new face:   0   1   2   3   4     5
//!             │   │   │   │   │     │
//! old face:   0   1   2   3   (new) (new)
//! ```
//!
//! Faces without an old counterpart receive a caller-supplied default.

use nalgebra::DVector;

use crate::error::{AdsorptionError, Result};

/// Correspondence between the faces of a new patch and an old one
pub trait PatchMapper {
    /// Number of faces of the new patch
    fn size(&self) -> usize;

    /// Old face index feeding new face `face`, `None` for newly created faces
    fn source(&self, face: usize) -> Option<usize>;

    /// Map a per-face array onto the new patch
    ///
    /// # Errors
    ///
    /// `TopologyMismatch` when an addressed old face does not exist in
    /// `old`; silently padding or truncating would corrupt the state.
    fn map(&self, old: &DVector<f64>, default: f64) -> Result<DVector<f64>> {
        let mut mapped = DVector::from_element(self.size(), default);

        for face in 0..self.size() {
            if let Some(source) = self.source(face) {
                mapped[face] = *old.get(source).ok_or_else(|| {
                    AdsorptionError::topology(
                        format!("mapping of new face {face} (old face {source})"),
                        source + 1,
                        old.len(),
                    )
                })?;
            }
        }

        Ok(mapped)
    }
}

/// Mapper backed by an explicit per-face address list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMapper {
    addressing: Vec<Option<usize>>,
}

impl DirectMapper {
    /// Build from the address list of the new patch
    pub fn new(addressing: Vec<Option<usize>>) -> Self {
        Self { addressing }
    }

    /// Identity on the first `n_mapped` faces, new faces after that
    ///
    /// # Example
    ///
    /// ```rust
    /// use wall_adsorb::mesh::{DirectMapper, PatchMapper};
    ///
    /// let mapper = DirectMapper::grown(4, 6);
    /// assert_eq!(mapper.source(3), Some(3));
    /// assert_eq!(mapper.source(4), None);
    /// ```
    pub fn grown(n_mapped: usize, n_faces: usize) -> Self {
        Self::new(
            (0..n_faces)
                .map(|face| (face < n_mapped).then_some(face))
                .collect(),
        )
    }

    /// Number of faces with an old counterpart
    pub fn mapped_count(&self) -> usize {
        self.addressing.iter().filter(|a| a.is_some()).count()
    }
}

impl PatchMapper for DirectMapper {
    fn size(&self) -> usize {
        self.addressing.len()
    }

    fn source(&self, face: usize) -> Option<usize> {
        self.addressing.get(face).copied().flatten()
    }
}
