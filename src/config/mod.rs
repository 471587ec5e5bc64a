//! Boundary condition configuration
//!
//! - [`PatchDictionary`]: typed key/value entries read at construction and
//!   written back by `write`, round-trippable through JSON
//! - [`warn_ignored_entries`]: report entries a condition does not use

mod dictionary;

pub use dictionary::{Entry, PatchDictionary};

/// Log a warning for each entry of `dictionary` found in `ignored`
///
/// Returns the number of ignored entries found.
pub fn warn_ignored_entries(dictionary: &PatchDictionary, ignored: &[&str], condition: &str) -> usize {
    let mut found = 0;
    for key in ignored.iter().filter(|key| dictionary.contains(key)) {
        log::warn!(
            "{condition} on patch '{}': entry '{key}' is not used by this condition and is ignored",
            dictionary.name()
        );
        found += 1;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_ignored_entries() {
        let dict = PatchDictionary::new("wall")
            .with("rpm", 100.0)
            .with("axis", vec![0.0, 0.0, 1.0])
            .with("Kads", 1.0);

        assert_eq!(warn_ignored_entries(&dict, &["rpm", "axis", "origin"], "test"), 2);
        assert_eq!(warn_ignored_entries(&dict, &["origin"], "test"), 0);
    }
}
