//! Test fixtures: reference parameters and a driven wall patch

use nalgebra::DVector;

use wall_adsorb::prelude::*;

/// Kads = 1e-3, Kdes = 1e-4, Gamma = 1 (equilibrium 0.990099 at C = 10)
pub fn reference_kinetics() -> KineticParameters {
    KineticParameters::new(1e-3, 1e-4, 1.0).unwrap()
}

/// Fast kinetics for which forward Euler overshoots at dt >= 1
pub fn stiff_kinetics() -> KineticParameters {
    KineticParameters::new(2.0, 0.5, 3.0).unwrap()
}

/// Dictionary of the reference kinetics
pub fn reference_dictionary(patch: &str) -> PatchDictionary {
    PatchDictionary::new(patch)
        .with("type", "fixedAdsorptionGradient")
        .with("Kads", 1e-3)
        .with("Kdes", 1e-4)
        .with("Gamma", 1.0)
}

/// A boundary condition on a patch, driven by an outer time loop
pub struct WallCase {
    pub condition: Box<dyn PatchCondition>,
    pub time: TimeState,
    pub registry: FieldRegistry,
    pub diffusivity: DVector<f64>,
}

impl WallCase {
    /// Build the condition from `dictionary` by name
    pub fn from_dictionary(patch: &Patch, dictionary: &PatchDictionary, delta_t: f64) -> Self {
        let condition = ConditionRegistry::with_builtins()
            .construct(patch, "C", dictionary)
            .unwrap();
        Self::new(condition, delta_t)
    }

    pub fn new(condition: Box<dyn PatchCondition>, delta_t: f64) -> Self {
        let n_faces = condition.patch().size();
        Self {
            condition,
            time: TimeState::new(0.0, delta_t),
            registry: FieldRegistry::new(),
            diffusivity: DVector::from_element(n_faces, 1.0),
        }
    }

    /// Advance the time loop and run one assembly with bulk values `c`
    pub fn step(&mut self, c: &DVector<f64>) -> Option<UpdateReport> {
        self.time.advance();
        self.assemble(c)
    }

    /// Coefficient update and evaluation at the current time index
    pub fn assemble(&mut self, c: &DVector<f64>) -> Option<UpdateReport> {
        let report = self
            .condition
            .update_coeffs(&mut PatchUpdate::new(&self.time, c, &self.diffusivity, &mut self.registry))
            .unwrap();
        self.condition.evaluate(c).unwrap();
        report
    }

    /// Surface state as mirrored in the registry
    pub fn mirrored_surface(&self) -> DVector<f64> {
        self.registry
            .lookup("C_ads")
            .unwrap()
            .patch_values(self.condition.patch().name())
            .unwrap()
            .clone()
    }

    pub fn gradient(&self) -> &DVector<f64> {
        self.condition.fixed_gradient().gradient()
    }
}
