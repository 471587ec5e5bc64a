//! Construction of patch conditions by `type` name
//!
//! Case setups name their boundary conditions in the `type` entry of each
//! patch dictionary. The registry maps that word to a factory:
//!
//! ```rust
//! use wall_adsorb::boundary::ConditionRegistry;
//! use wall_adsorb::config::PatchDictionary;
//! use wall_adsorb::mesh::Patch;
//!
//! let registry = ConditionRegistry::with_builtins();
//! let patch = Patch::uniform("wall", 8, 1e-4, 200.0);
//! let dict = PatchDictionary::new("wall")
//!     .with("type", "fixedAdsorptionGradient")
//!     .with("Kads", 1e-3)
//!     .with("Kdes", 1e-4)
//!     .with("Gamma", 1.0);
//!
//! let condition = registry.construct(&patch, "C", &dict).unwrap();
//! assert_eq!(condition.type_name(), "fixedAdsorptionGradient");
//! ```

use std::collections::BTreeMap;

use crate::boundary::{
    FIXED_ADSORPTION_GRADIENT_TYPE, FIXED_GRADIENT_TYPE, FixedAdsorptionGradient,
    FixedGradientCondition, PatchCondition,
};
use crate::config::PatchDictionary;
use crate::error::{AdsorptionError, Result};
use crate::mesh::Patch;

/// Builds a condition for `patch` of the bulk field named by the second
/// argument from its dictionary
pub type ConditionFactory =
    fn(&Patch, &str, &PatchDictionary) -> Result<Box<dyn PatchCondition>>;

fn fixed_gradient_factory(
    patch: &Patch,
    _field_name: &str,
    dictionary: &PatchDictionary,
) -> Result<Box<dyn PatchCondition>> {
    Ok(Box::new(FixedGradientCondition::from_dictionary(patch, dictionary)?))
}

fn fixed_adsorption_gradient_factory(
    patch: &Patch,
    field_name: &str,
    dictionary: &PatchDictionary,
) -> Result<Box<dyn PatchCondition>> {
    Ok(Box::new(FixedAdsorptionGradient::from_dictionary(
        patch, field_name, dictionary,
    )?))
}

/// Name-to-factory table of patch conditions
#[derive(Clone, Debug, Default)]
pub struct ConditionRegistry {
    factories: BTreeMap<String, ConditionFactory>,
}

impl ConditionRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `fixedGradient` and `fixedAdsorptionGradient`
    pub fn with_builtins() -> Self {
        Self::new()
            .with(FIXED_GRADIENT_TYPE, fixed_gradient_factory)
            .with(FIXED_ADSORPTION_GRADIENT_TYPE, fixed_adsorption_gradient_factory)
    }

    /// Register `factory` under `type_name`
    ///
    /// Returns `false` (and keeps the existing factory) when the name is
    /// already taken.
    pub fn register(&mut self, type_name: impl Into<String>, factory: ConditionFactory) -> bool {
        let type_name = type_name.into();
        if self.factories.contains_key(&type_name) {
            log::warn!("patch condition type '{type_name}' is already registered, keeping the first factory");
            return false;
        }
        self.factories.insert(type_name, factory);
        true
    }

    /// Builder pattern: register a factory
    pub fn with(mut self, type_name: impl Into<String>, factory: ConditionFactory) -> Self {
        self.register(type_name, factory);
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the condition named by the `type` entry of `dictionary`
    ///
    /// # Errors
    ///
    /// - `ConfigurationMissing` when there is no `type` entry
    /// - `UnknownConditionType` when no factory is registered under it
    /// - any error of the factory itself
    pub fn construct(
        &self,
        patch: &Patch,
        field_name: &str,
        dictionary: &PatchDictionary,
    ) -> Result<Box<dyn PatchCondition>> {
        let type_name = dictionary.lookup_word("type")?;
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| AdsorptionError::UnknownConditionType(type_name.to_string()))?;

        log::debug!("constructing {type_name} on patch '{}' for field '{field_name}'", patch.name());
        factory(patch, field_name, dictionary)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
