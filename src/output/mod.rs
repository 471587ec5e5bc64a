//! Output of surface-state results
//!
//! The mirrored registry field is what the surrounding application writes to
//! disk with the rest of the case. This module covers the diagnostics on top
//! of it:
//!
//! - **History**: patch-integrated quantities recorded step by step
//! - **Export**: CSV files of a history or of a per-face snapshot
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── history.rs     ← SurfaceHistory
//! └── export/
//!     ├── mod.rs     ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wall_adsorb::output::{CsvExporter, Exporter, SurfaceHistory};
//!
//! let history = SurfaceHistory::new();
//! // ... record one row per time step ...
//! CsvExporter::default().export_history(&history, Some(500), "wall_history.csv").unwrap();
//! ```

pub mod export;
mod history;

pub use export::{CsvConfig, CsvError, CsvExporter, CsvMetadata, Exporter};
pub use history::SurfaceHistory;
