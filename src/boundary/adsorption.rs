//! Fixed-gradient condition driven by Langmuir surface kinetics
//!
//! # Model
//!
//! Every face of the patch carries an adsorbed concentration `Y` that
//! exchanges mass with the bulk species `C` next to the wall:
//!
//! ```text
//! dY/dt = Kads · C · (Γ - Y) - Kdes · Y
//! ```
//!
//! The amount taken up by the surface over a step leaves the bulk through the
//! wall, so the gradient handed to the engine is
//!
//! ```text
//! g = (Y_new - Y_old) / dt / D
//! ```
//!
//! with `D` the bulk diffusivity at the face. A positive gradient means the
//! species leaves the domain into the surface phase.
//!
//! # Update Gating
//!
//! ```text
//! Uninitialized ──► Stale ──► UpToDate(n) ──► Stale ──► UpToDate(n + 1) ...
//! ```
//!
//! An update request for the time index the kernel is already up to date
//! with does nothing, so outer corrector loops can call `update_coeffs` as
//! often as they like within one step.
//!
//! # Dictionary
//!
//! ```json
//! {
//!   "type": "fixedAdsorptionGradient",
//!   "Kads": 0.001,
//!   "Kdes": 0.0001,
//!   "Gamma": 1.0,
//!   "scheme": "euler",
//!   "Yads": [0.0, 0.0],
//!   "gradient": [0.0, 0.0]
//! }
//! ```
//!
//! `Kads`, `Kdes` and `Gamma` are required. `scheme` defaults to `euler`,
//! `Yads` and `gradient` to zero.

use nalgebra::DVector;

use crate::boundary::{
    FixedGradient, PatchCondition, PatchUpdate, SurfaceStateStore, UpdateReport,
};
use crate::config::{PatchDictionary, warn_ignored_entries};
use crate::error::{AdsorptionError, Result};
use crate::mesh::{Patch, PatchMapper};
use crate::physics::{KineticParameters, SurfaceKinetics};
use crate::solver::{IntegrationScheme, map_faces};

/// Condition type name of [`FixedAdsorptionGradient`]
pub const FIXED_ADSORPTION_GRADIENT_TYPE: &str = "fixedAdsorptionGradient";

/// Suffix of the registered field mirroring the surface state
pub const SURFACE_FIELD_SUFFIX: &str = "_ads";

/// Entries that appear in some case setups for this condition but have no
/// meaning for it
const ROTATING_FRAME_ENTRIES: [&str; 5] = ["axis", "origin", "rpm", "axialVelocity", "radialVelocity"];

// =================================================================================================
// Kernel State
// =================================================================================================

/// Position of the kernel in its update cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KernelState {
    /// Constructed, never updated
    #[default]
    Uninitialized,

    /// Update in progress (or aborted by an error)
    Stale,

    /// Surface state and gradient are current for this time index
    UpToDate(u64),
}

impl KernelState {
    /// Whether the kernel is current for `time_index`
    pub fn is_current(&self, time_index: u64) -> bool {
        *self == KernelState::UpToDate(time_index)
    }
}

// =================================================================================================
// Per-Face Step
// =================================================================================================

#[derive(Clone, Copy, Debug)]
struct FaceStep {
    surface: f64,
    gradient: f64,
    clamped: bool,
}

fn step_face(
    kinetics: &KineticParameters,
    scheme: IntegrationScheme,
    face: usize,
    c: f64,
    d: f64,
    y_old: f64,
    dt: f64,
) -> Result<FaceStep> {
    if !c.is_finite() {
        return Err(AdsorptionError::NonFiniteInput {
            quantity: "bulk concentration",
            face,
            value: c,
        });
    }
    if !d.is_finite() || d <= 0.0 {
        return Err(AdsorptionError::NonFiniteInput {
            quantity: "diffusivity",
            face,
            value: d,
        });
    }

    let raw = scheme.advance(kinetics, c, y_old, dt);
    let surface = kinetics.clamp(raw);
    let gradient = (surface - y_old) / dt / d;

    if !surface.is_finite() || !gradient.is_finite() {
        return Err(AdsorptionError::NonFiniteInput {
            quantity: "adsorption flux",
            face,
            value: gradient,
        });
    }

    Ok(FaceStep {
        surface,
        gradient,
        clamped: surface != raw,
    })
}

// =================================================================================================
// Fixed Adsorption Gradient
// =================================================================================================

/// Wall condition coupling a transported scalar to an adsorbed surface phase
///
/// # Example
///
/// ```rust
/// use nalgebra::DVector;
/// use wall_adsorb::boundary::{FixedAdsorptionGradient, PatchCondition, PatchUpdate};
/// use wall_adsorb::fields::FieldRegistry;
/// use wall_adsorb::mesh::Patch;
/// use wall_adsorb::physics::KineticParameters;
/// use wall_adsorb::solver::TimeState;
///
/// let patch = Patch::uniform("wall", 4, 1.0, 1.0);
/// let kinetics = KineticParameters::new(1e-3, 1e-4, 1.0).unwrap();
/// let mut wall = FixedAdsorptionGradient::new(patch, "C", kinetics);
///
/// let c = DVector::from_element(4, 10.0);
/// let d = DVector::from_element(4, 1.0);
/// let mut registry = FieldRegistry::new();
///
/// let mut time = TimeState::new(0.0, 1.0);
/// time.advance();
/// wall.update_coeffs(&mut PatchUpdate::new(&time, &c, &d, &mut registry)).unwrap();
///
/// assert!((wall.surface_state().values()[0] - 0.01).abs() < 1e-12);
/// assert!(registry.contains("C_ads"));
/// ```
#[derive(Debug, Clone)]
pub struct FixedAdsorptionGradient {
    patch: Patch,
    field_name: String,
    kinetics: KineticParameters,
    scheme: IntegrationScheme,
    surface: SurfaceStateStore,
    gradient: FixedGradient,
    state: KernelState,
    stability_warned: bool,
}

impl FixedAdsorptionGradient {
    /// Fresh condition on `patch` for the bulk field `field_name`
    ///
    /// Surface state and gradient start at zero.
    pub fn new(patch: Patch, field_name: impl Into<String>, kinetics: KineticParameters) -> Self {
        let n_faces = patch.size();
        Self {
            patch,
            field_name: field_name.into(),
            kinetics,
            scheme: IntegrationScheme::default(),
            surface: SurfaceStateStore::uniform(n_faces, 0.0),
            gradient: FixedGradient::zeros(n_faces),
            state: KernelState::Uninitialized,
            stability_warned: false,
        }
    }

    /// Construct from a patch dictionary
    ///
    /// # Errors
    ///
    /// - `ConfigurationMissing` when `Kads`, `Kdes` or `Gamma` is absent
    /// - `InvalidParameter` for non-physical kinetic constants
    /// - `InvalidEntry` for an unknown `scheme` or `Yads` outside `[0, Gamma]`
    /// - `TopologyMismatch` when `Yads` or `gradient` has the wrong length
    pub fn from_dictionary(
        patch: &Patch,
        field_name: impl Into<String>,
        dictionary: &PatchDictionary,
    ) -> Result<Self> {
        let kinetics = KineticParameters::new(
            dictionary.lookup_scalar("Kads")?,
            dictionary.lookup_scalar("Kdes")?,
            dictionary.lookup_scalar("Gamma")?,
        )?;

        let scheme = match dictionary.lookup_word_opt("scheme")? {
            Some(word) => word.parse()?,
            None => IntegrationScheme::default(),
        };

        warn_ignored_entries(dictionary, &ROTATING_FRAME_ENTRIES, FIXED_ADSORPTION_GRADIENT_TYPE);

        let mut condition = Self::new(patch.clone(), field_name, kinetics).with_scheme(scheme);

        if let Some(values) = dictionary.lookup_face_values("Yads", patch.size())? {
            condition = condition.with_surface_state(SurfaceStateStore::from_values(values))?;
        }
        condition.gradient = FixedGradient::from_dictionary(dictionary, patch.size())?;

        log::debug!(
            "{FIXED_ADSORPTION_GRADIENT_TYPE} on patch '{}': {} kinetics (Kads = {}, Kdes = {}, Gamma = {}), {} scheme",
            patch.name(),
            kinetics.name(),
            kinetics.kads(),
            kinetics.kdes(),
            kinetics.gamma(),
            scheme
        );

        Ok(condition)
    }

    /// Builder pattern: select the integration scheme
    pub fn with_scheme(mut self, scheme: IntegrationScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Builder pattern: start from an existing surface state
    ///
    /// # Errors
    ///
    /// - `TopologyMismatch` when the state does not match the patch
    /// - `InvalidEntry` when a value lies outside `[0, Gamma]`
    pub fn with_surface_state(mut self, surface: SurfaceStateStore) -> Result<Self> {
        self.patch.check_size("surface state", surface.len())?;
        if !surface.within_bounds(self.kinetics.gamma()) {
            return Err(AdsorptionError::InvalidEntry {
                key: "Yads".to_string(),
                message: format!("values must lie in [0, {}]", self.kinetics.gamma()),
            });
        }
        self.surface = surface;
        Ok(self)
    }

    pub fn kinetics(&self) -> &KineticParameters {
        &self.kinetics
    }

    pub fn scheme(&self) -> IntegrationScheme {
        self.scheme
    }

    /// Adsorbed concentration per face
    pub fn surface_state(&self) -> &SurfaceStateStore {
        &self.surface
    }

    pub fn state(&self) -> KernelState {
        self.state
    }

    /// Name of the bulk field the condition is applied to
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Name of the registered field mirroring the surface state
    pub fn surface_field_name(&self) -> String {
        format!("{}{SURFACE_FIELD_SUFFIX}", self.field_name)
    }

    /// Carry the condition onto a changed patch
    ///
    /// New faces start with an empty surface and zero gradient. The time
    /// marker is kept, so a remap within a step does not integrate twice.
    pub fn mapped(&self, patch: &Patch, mapper: &dyn PatchMapper) -> Result<Self> {
        patch.check_size("mapper", mapper.size())?;
        Ok(Self {
            patch: patch.clone(),
            field_name: self.field_name.clone(),
            kinetics: self.kinetics,
            scheme: self.scheme,
            surface: self.surface.mapped(mapper, 0.0)?,
            gradient: self.gradient.mapped(mapper)?,
            state: self.state,
            stability_warned: self.stability_warned,
        })
    }

    // ===================================== Integration ==========================================

    fn warn_if_unstable(&mut self, concentration: &DVector<f64>, dt: f64) {
        if self.stability_warned || !self.scheme.is_explicit() {
            return;
        }

        let c_max = concentration
            .iter()
            .copied()
            .filter(|c| c.is_finite())
            .fold(0.0, f64::max);

        if let Some(limit) = self.kinetics.stable_time_step(c_max)
            && dt > limit
        {
            log::warn!(
                "{FIXED_ADSORPTION_GRADIENT_TYPE} on patch '{}': time step {dt} exceeds the forward Euler \
                 limit {limit:.3e} at bulk concentration {c_max}; surface values will be clamped, \
                 consider \"scheme\": \"exponential\"",
                self.patch.name()
            );
            self.stability_warned = true;
        }
    }

    fn integrate(
        &mut self,
        concentration: &DVector<f64>,
        diffusivity: &DVector<f64>,
        dt: f64,
        report: &mut UpdateReport,
    ) -> Result<()> {
        self.warn_if_unstable(concentration, dt);

        let kinetics = &self.kinetics;
        let scheme = self.scheme;
        let y_old = self.surface.values();

        let steps = map_faces(self.patch.size(), |face| {
            step_face(
                kinetics,
                scheme,
                face,
                concentration[face],
                diffusivity[face],
                y_old[face],
                dt,
            )
        });

        let mut surface = y_old.clone();
        let mut gradient = DVector::zeros(self.patch.size());
        let mut first_rejection = None;

        for (face, step) in steps.into_iter().enumerate() {
            match step {
                Ok(step) => {
                    surface[face] = step.surface;
                    gradient[face] = step.gradient;
                    if step.clamped {
                        report.clamped_faces += 1;
                    }
                }
                Err(err) => {
                    report.rejected_faces += 1;
                    first_rejection.get_or_insert(err);
                }
            }
        }

        if let Some(err) = first_rejection {
            log::warn!(
                "{FIXED_ADSORPTION_GRADIENT_TYPE} on patch '{}': {} face(s) held at their previous \
                 surface value ({err})",
                self.patch.name(),
                report.rejected_faces
            );
        }

        self.surface.commit(&self.patch, surface)?;
        self.gradient.set_gradient(&self.patch, gradient)?;
        report.integrated = true;
        Ok(())
    }
}

impl PatchCondition for FixedAdsorptionGradient {
    fn type_name(&self) -> &'static str {
        FIXED_ADSORPTION_GRADIENT_TYPE
    }

    fn patch(&self) -> &Patch {
        &self.patch
    }

    fn fixed_gradient(&self) -> &FixedGradient {
        &self.gradient
    }

    fn fixed_gradient_mut(&mut self) -> &mut FixedGradient {
        &mut self.gradient
    }

    fn update_coeffs(&mut self, ctx: &mut PatchUpdate<'_>) -> Result<Option<UpdateReport>> {
        let time_index = ctx.time.index();
        if self.state.is_current(time_index) {
            self.gradient.mark_updated();
            return Ok(None);
        }

        self.state = KernelState::Stale;
        self.patch.check_size("surface state", self.surface.len())?;
        self.patch.check_size("bulk concentration", ctx.concentration.len())?;
        self.patch.check_size("diffusivity", ctx.diffusivity.len())?;

        let mut report = UpdateReport {
            time_index,
            ..UpdateReport::default()
        };

        let dt = ctx.time.delta_t();
        if ctx.time.has_advanced() && dt.is_finite() && dt > 0.0 {
            self.integrate(ctx.concentration, ctx.diffusivity, dt, &mut report)?;
        } else {
            log::debug!(
                "{FIXED_ADSORPTION_GRADIENT_TYPE} on patch '{}': no elapsed step at time index \
                 {time_index} (dt = {dt}), surface state held",
                self.patch.name()
            );
        }

        self.gradient.mark_updated();
        self.state = KernelState::UpToDate(time_index);

        self.surface
            .publish(&self.surface_field_name(), &self.patch, ctx.registry)?;

        report.adsorbed_amount = self.surface.adsorbed_amount(&self.patch);
        log::debug!(
            "{FIXED_ADSORPTION_GRADIENT_TYPE} on patch '{}' at t = {}: adsorbed amount {:.6e}, \
             {} clamped, {} rejected",
            self.patch.name(),
            ctx.time.value(),
            report.adsorbed_amount,
            report.clamped_faces,
            report.rejected_faces
        );

        Ok(Some(report))
    }

    fn evaluate(&mut self, internal: &DVector<f64>) -> Result<DVector<f64>> {
        self.gradient.evaluate(&self.patch, internal)
    }

    fn write(&self, dictionary: &mut PatchDictionary) {
        dictionary.insert("type", FIXED_ADSORPTION_GRADIENT_TYPE);
        dictionary.insert("Kads", self.kinetics.kads());
        dictionary.insert("Kdes", self.kinetics.kdes());
        dictionary.insert("Gamma", self.kinetics.gamma());
        dictionary.insert("scheme", self.scheme.keyword());
        self.gradient.write(dictionary);
        dictionary.insert("Yads", self.surface.values());
    }

    fn map_onto(&self, patch: &Patch, mapper: &dyn PatchMapper) -> Result<Box<dyn PatchCondition>> {
        Ok(Box::new(self.mapped(patch, mapper)?))
    }

    fn clone_box(&self) -> Box<dyn PatchCondition> {
        Box::new(self.clone())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
