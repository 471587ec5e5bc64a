//! Error types for the adsorption boundary kernel
//!
//! Configuration and topology errors are fatal: they abort construction or the
//! current patch update and are propagated with `?`. Per-face numerical problems
//! (`NonFiniteInput`) and a missing mirrored field (`RegistryLookupFailure`) are
//! recoverable; the kernel handles them locally and only reports them through
//! the log and the [`UpdateReport`](crate::boundary::UpdateReport).

use thiserror::Error;

/// Errors raised by the boundary kernel and its collaborators.
#[derive(Debug, Error)]
pub enum AdsorptionError {
    /// A required dictionary entry is absent
    #[error("required entry '{key}' missing from dictionary '{dictionary}'")]
    ConfigurationMissing { key: String, dictionary: String },

    /// An entry exists but holds the wrong kind of value
    #[error("entry '{key}' has invalid value: {message}")]
    InvalidEntry { key: String, message: String },

    /// A kinetic parameter is outside its physical range
    #[error("invalid kinetic parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Bulk concentration or diffusivity is NaN/Inf (or non-physical) at a face
    #[error("unusable {quantity} {value} at face {face}")]
    NonFiniteInput {
        quantity: &'static str,
        face: usize,
        value: f64,
    },

    /// The mirrored output field is not registered yet
    #[error("field '{0}' not found in registry")]
    RegistryLookupFailure(String),

    /// Per-face array length does not match the patch face count
    #[error("topology mismatch on {context}: expected {expected} faces, got {actual}")]
    TopologyMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// No factory registered under the requested condition type
    #[error("unknown patch condition type '{0}'")]
    UnknownConditionType(String),

    /// Time control parameters are not usable
    #[error("invalid time control: {0}")]
    InvalidTimeControl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary (de)serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdsorptionError {
    /// Create a topology mismatch error.
    pub fn topology(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::TopologyMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Whether the error must abort the current construction or update.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AdsorptionError::NonFiniteInput { .. } | AdsorptionError::RegistryLookupFailure(_)
        )
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AdsorptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_message() {
        let err = AdsorptionError::topology("surface state", 6, 4);
        assert_eq!(
            err.to_string(),
            "topology mismatch on surface state: expected 6 faces, got 4"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(!AdsorptionError::RegistryLookupFailure("C_ads".into()).is_fatal());
        let non_finite = AdsorptionError::NonFiniteInput {
            quantity: "concentration",
            face: 2,
            value: f64::NAN,
        };
        assert!(!non_finite.is_fatal());
        assert_eq!(non_finite.to_string(), "unusable concentration NaN at face 2");
        assert!(
            AdsorptionError::ConfigurationMissing {
                key: "Kads".into(),
                dictionary: "wall".into()
            }
            .is_fatal()
        );
    }
}
