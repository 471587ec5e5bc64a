//! CSV export of surface results
//!
//! Output opens in spreadsheets, pandas or MATLAB alike.
//!
//! # History
//!
//! ```csv
//! Time (s),Mean Yads,Adsorbed amount
//! 0.000000,0.000000,0.000000
//! 1.000000,0.010000,0.040000
//! ```
//!
//! # Face snapshot
//!
//! ```csv
//! Face,Yads,Gradient
//! 0,0.010000,0.010000
//! 1,0.010000,0.010000
//! ```
//!
//! # With Metadata
//!
//! ```rust,ignore
//! use wall_adsorb::output::export::{CsvConfig, CsvExporter, CsvMetadata};
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_condition(&wall));
//! CsvExporter::new(config).export_snapshot(&wall, "wall_faces.csv")?;
//! ```
//!
//! ```csv
//! # Surface Adsorption Data
//! # Generated: 2026-02-11T15:30:00Z
//! # Condition: fixedAdsorptionGradient
//! # Patch: wall
//! # Kads: 0.001
//! # Kdes: 0.0001
//! # Gamma: 1
//! # Scheme: euler
//! #
//! Face,Yads,Gradient
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::boundary::{FixedAdsorptionGradient, PatchCondition};
use crate::output::SurfaceHistory;
use crate::output::export::{Exporter, sample_indices};
use crate::physics::SurfaceKinetics;

// =============================================================================
// Errors
// =============================================================================

/// Errors of the CSV exporter
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("empty data: {0} has no rows")]
    Empty(&'static str),

    #[error("data length mismatch: {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: NaN or Inf in {column} at row {row}")]
    NonFinite { column: &'static str, row: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use wall_adsorb::output::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.decimal_separator, '.');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Format a number with the configured precision and decimal separator
    fn format_number(&self, value: f64) -> String {
        let formatted = format!("{:.prec$}", value, prec = self.precision);
        if self.decimal_separator != '.' {
            formatted.replace('.', &self.decimal_separator.to_string())
        } else {
            formatted
        }
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set appear in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Condition type name
    pub condition: Option<String>,

    /// Patch name
    pub patch: Option<String>,

    /// Kinetic constants (Kads, Kdes, Gamma)
    pub kinetics: Option<(f64, f64, f64)>,

    /// Integration scheme keyword
    pub scheme: Option<String>,

    /// Total simulated time (seconds)
    pub total_time: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing `condition`
    pub fn from_condition(condition: &FixedAdsorptionGradient) -> Self {
        let kinetics = condition.kinetics();
        Self {
            condition: Some(condition.type_name().to_string()),
            patch: Some(condition.patch().name().to_string()),
            kinetics: Some((kinetics.kads(), kinetics.kdes(), kinetics.capacity())),
            scheme: Some(condition.scheme().keyword().to_string()),
            ..Default::default()
        }
    }

    /// Builder pattern: run length
    pub fn with_run(mut self, total_time: f64, time_steps: usize) -> Self {
        self.total_time = Some(total_time);
        self.time_steps = Some(time_steps);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }

    fn write_header<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "# Surface Adsorption Data")?;
        writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

        if let Some(condition) = &self.condition {
            writeln!(out, "# Condition: {condition}")?;
        }
        if let Some(patch) = &self.patch {
            writeln!(out, "# Patch: {patch}")?;
        }
        if let Some((kads, kdes, gamma)) = self.kinetics {
            writeln!(out, "# Kads: {kads}")?;
            writeln!(out, "# Kdes: {kdes}")?;
            writeln!(out, "# Gamma: {gamma}")?;
        }
        if let Some(scheme) = &self.scheme {
            writeln!(out, "# Scheme: {scheme}")?;
        }
        if let Some(total_time) = self.total_time {
            writeln!(out, "# Total Time: {total_time} s")?;
        }
        if let Some(time_steps) = self.time_steps {
            writeln!(out, "# Time Steps: {time_steps}")?;
        }
        for (key, value) in &self.custom {
            writeln!(out, "# {key}: {value}")?;
        }

        writeln!(out, "#")
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    fn create(&self, path: &Path) -> Result<BufWriter<File>, CsvError> {
        let mut out = BufWriter::new(File::create(path)?);
        if self.config.include_metadata
            && let Some(metadata) = &self.config.metadata
        {
            metadata.write_header(&mut out)?;
        }
        Ok(out)
    }
}

fn check_column(column: &'static str, values: &[f64], expected: usize) -> Result<(), CsvError> {
    if values.len() != expected {
        return Err(CsvError::LengthMismatch {
            column,
            expected,
            actual: values.len(),
        });
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(row) => Err(CsvError::NonFinite { column, row }),
        None => Ok(()),
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_history(
        &self,
        history: &SurfaceHistory,
        n_points: Option<usize>,
        path: impl AsRef<Path>,
    ) -> Result<(), CsvError> {
        // ============================= Validation =============================

        if history.is_empty() {
            return Err(CsvError::Empty("surface history"));
        }
        let rows = history.len();
        check_column("time", &history.time_points, rows)?;
        check_column("mean surface concentration", &history.mean_surface, rows)?;
        check_column("adsorbed amount", &history.adsorbed_amount, rows)?;

        // ============================= Write ==================================

        let config = &self.config;
        let d = config.delimiter;
        let mut out = self.create(path.as_ref())?;

        writeln!(out, "Time (s){d}Mean Yads{d}Adsorbed amount")?;
        for i in sample_indices(rows, n_points) {
            writeln!(
                out,
                "{}{d}{}{d}{}",
                config.format_number(history.time_points[i]),
                config.format_number(history.mean_surface[i]),
                config.format_number(history.adsorbed_amount[i]),
            )?;
        }

        out.flush()?;
        Ok(())
    }

    fn export_snapshot(
        &self,
        condition: &FixedAdsorptionGradient,
        path: impl AsRef<Path>,
    ) -> Result<(), CsvError> {
        let surface = condition.surface_state().values();
        let gradient = condition.fixed_gradient().gradient();

        if surface.is_empty() {
            return Err(CsvError::Empty("surface state"));
        }
        check_column("Yads", surface.as_slice(), surface.len())?;
        check_column("gradient", gradient.as_slice(), surface.len())?;

        let config = &self.config;
        let d = config.delimiter;
        let mut out = self.create(path.as_ref())?;

        writeln!(out, "Face{d}Yads{d}Gradient")?;
        for (face, (y, g)) in surface.iter().zip(gradient.iter()).enumerate() {
            writeln!(
                out,
                "{face}{d}{}{d}{}",
                config.format_number(*y),
                config.format_number(*g)
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
