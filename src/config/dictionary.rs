//! Key/value patch dictionary
//!
//! A boundary condition is configured from, and writes itself back to, a
//! flat dictionary of entries. Each entry is a scalar, a word, or a list of
//! scalars (one per face):
//!
//! ```json
//! {
//!   "type": "fixedAdsorptionGradient",
//!   "Kads": 0.001,
//!   "Kdes": 0.0001,
//!   "Gamma": 1.0,
//!   "Yads": [0.0, 0.01, 0.02]
//! }
//! ```
//!
//! JSON is the on-disk form; keys are kept sorted so written dictionaries
//! are reproducible.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{AdsorptionError, Result};

// =================================================================================================
// Entry
// =================================================================================================

/// Value of a dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Single number (also read as a uniform per-face value)
    Scalar(f64),

    /// Keyword
    Word(String),

    /// Per-face list
    List(Vec<f64>),
}

impl Entry {
    /// Kind of the entry, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Scalar(_) => "scalar",
            Entry::Word(_) => "word",
            Entry::List(_) => "list",
        }
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Entry::Scalar(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Word(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Word(value)
    }
}

impl From<Vec<f64>> for Entry {
    fn from(value: Vec<f64>) -> Self {
        Entry::List(value)
    }
}

impl From<&DVector<f64>> for Entry {
    fn from(value: &DVector<f64>) -> Self {
        Entry::List(value.as_slice().to_vec())
    }
}

// =================================================================================================
// Patch Dictionary
// =================================================================================================

/// Configuration entries of one boundary patch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchDictionary {
    /// Dictionary name (the patch name), not part of the serialised form
    #[serde(skip)]
    name: String,

    #[serde(flatten)]
    entries: BTreeMap<String, Entry>,
}

impl PatchDictionary {
    /// Create an empty dictionary
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Builder pattern: add an entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Entry>) -> Self {
        self.insert(key, value);
        self
    }

    /// Dictionary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Entry>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw entry access
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Whether an entry is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entry keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ====================================== Typed lookups ========================================

    /// Required scalar entry
    ///
    /// # Errors
    ///
    /// - `ConfigurationMissing` when absent
    /// - `InvalidEntry` when not a scalar
    pub fn lookup_scalar(&self, key: &str) -> Result<f64> {
        match self.require(key)? {
            Entry::Scalar(value) => Ok(*value),
            other => Err(self.wrong_kind(key, "scalar", other)),
        }
    }

    /// Required word entry
    pub fn lookup_word(&self, key: &str) -> Result<&str> {
        match self.require(key)? {
            Entry::Word(word) => Ok(word),
            other => Err(self.wrong_kind(key, "word", other)),
        }
    }

    /// Optional word entry
    pub fn lookup_word_opt(&self, key: &str) -> Result<Option<&str>> {
        if self.contains(key) {
            self.lookup_word(key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Optional per-face entry of length `size`
    ///
    /// A scalar is read as a uniform value on every face.
    ///
    /// # Errors
    ///
    /// - `TopologyMismatch` when a list does not have `size` values
    /// - `InvalidEntry` for a word
    pub fn lookup_face_values(&self, key: &str, size: usize) -> Result<Option<DVector<f64>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Entry::Scalar(value)) => Ok(Some(DVector::from_element(size, *value))),
            Some(Entry::List(values)) => {
                if values.len() != size {
                    return Err(AdsorptionError::topology(
                        format!("entry '{key}' of dictionary '{}'", self.name),
                        size,
                        values.len(),
                    ));
                }
                Ok(Some(DVector::from_column_slice(values)))
            }
            Some(other) => Err(self.wrong_kind(key, "list", other)),
        }
    }

    fn require(&self, key: &str) -> Result<&Entry> {
        self.get(key)
            .ok_or_else(|| AdsorptionError::ConfigurationMissing {
                key: key.to_string(),
                dictionary: self.name.clone(),
            })
    }

    fn wrong_kind(&self, key: &str, expected: &str, found: &Entry) -> AdsorptionError {
        AdsorptionError::InvalidEntry {
            key: key.to_string(),
            message: format!("expected {expected}, found {}", found.kind()),
        }
    }

    // ================================== Serialisation (JSON) =====================================

    /// Serialise the entries to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse entries from JSON
    pub fn from_json_str(name: impl Into<String>, json: &str) -> Result<Self> {
        let mut dictionary: PatchDictionary = serde_json::from_str(json)?;
        dictionary.name = name.into();
        Ok(dictionary)
    }

    /// Write the dictionary to a JSON file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Read a dictionary from a JSON file
    pub fn read_from(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(name, &json)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
