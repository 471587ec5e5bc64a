//! Export of surface results.
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format; each format lives in its
//! own sub-module. Adding a format means adding a file.
//!
//! | Format  | Module    |
//! |---------|-----------|
//! | CSV     | [`csv`]   |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use wall_adsorb::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Every recorded step
//! exporter.export_history(&history, None, "wall.csv")?;
//!
//! // Downsampled to 500 rows
//! exporter.export_history(&history, Some(500), "wall_light.csv")?;
//!
//! // Per-face state of one condition
//! exporter.export_snapshot(&condition, "wall_faces.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use std::path::Path;

use crate::boundary::FixedAdsorptionGradient;
use crate::output::SurfaceHistory;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors, so callers can react to the exact
/// failure without downcasting a boxed error.
///
/// # Parameter `n_points`
///
/// - `None`: every recorded step
/// - `Some(n)`: uniformly downsampled to `n` rows, always keeping the first
///   and last rows
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export a history: `time`, mean surface concentration, adsorbed amount.
    ///
    /// # Errors
    ///
    /// - the history is empty or contains NaN/Inf
    /// - the file cannot be written
    fn export_history(
        &self,
        history: &SurfaceHistory,
        n_points: Option<usize>,
        path: impl AsRef<Path>,
    ) -> Result<(), Self::Error>;

    /// Export the per-face state of a condition: `face`, `Yads`, `gradient`.
    fn export_snapshot(
        &self,
        condition: &FixedAdsorptionGradient,
        path: impl AsRef<Path>,
    ) -> Result<(), Self::Error>;
}

/// Row indices of a uniform downsampling of `len` rows to `n_points`
///
/// First and last rows are always included; `None` or `n_points >= len`
/// keeps every row.
pub(crate) fn sample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n < len => {
            if n == 0 {
                return Vec::new();
            }
            if n == 1 {
                return vec![len - 1];
            }
            let step = (len - 1) as f64 / (n - 1) as f64;
            (0..n).map(|k| (k as f64 * step).round() as usize).collect()
        }
        _ => (0..len).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_all() {
        assert_eq!(sample_indices(4, None), vec![0, 1, 2, 3]);
        assert_eq!(sample_indices(4, Some(10)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sample_keeps_end_points() {
        let indices = sample_indices(1001, Some(5));
        assert_eq!(indices, vec![0, 250, 500, 750, 1000]);

        let indices = sample_indices(10, Some(3));
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&9));
    }
}
