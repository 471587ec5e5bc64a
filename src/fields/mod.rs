//! Named field registry
//!
//! Output and restart are handled by the surrounding application, which
//! writes every field it finds in the registry. Boundary conditions that
//! carry their own state (such as the adsorbed concentration) mirror it
//! into a registered field so it is written alongside the bulk fields.
//!
//! - `FieldRegistry`: lookup-by-name and create-and-register
//! - `SurfaceField`: per-patch face values of one named quantity

mod registry;

pub use registry::{FieldRegistry, SurfaceField};
