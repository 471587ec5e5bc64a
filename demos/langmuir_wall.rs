//! Demo: Adsorbing Wall under Constant Bulk Concentration
//!
//! ## Structure
//!
//! **Phase 1: Schemes** (forward Euler and exponential, dt = 1 s and 50 s)
//! - Surface uptake toward the Langmuir equilibrium
//! - Accuracy against the exact solution at the final time
//!
//! **Phase 2: Mesh change**
//! - The wall patch grows from 4 to 6 faces halfway through the run
//! - New faces start from an empty surface and catch up
//!
//! **Phase 3: Output**
//! - Written dictionary (restart file) and CSV history/snapshot
//!
//! **Parameters**: Kads = 1e-3, Kdes = 1e-4, Gamma = 1, C = 10, T = 600 s

use nalgebra::DVector;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use wall_adsorb::output::{CsvConfig, CsvExporter, CsvMetadata, Exporter, SurfaceHistory};
use wall_adsorb::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

const KADS: f64 = 1e-3;
const KDES: f64 = 1e-4;
const GAMMA: f64 = 1.0;
const BULK: f64 = 10.0;
const TOTAL_TIME: f64 = 600.0;

/// Prints a titled section banner to stdout.
fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn wall_dictionary(scheme: IntegrationScheme) -> PatchDictionary {
    PatchDictionary::new("wall")
        .with("type", "fixedAdsorptionGradient")
        .with("Kads", KADS)
        .with("Kdes", KDES)
        .with("Gamma", GAMMA)
        .with("scheme", scheme.keyword())
}

/// Run `time_steps` steps on a 4-face wall, returns the final mean surface
/// concentration and the history
fn run(scheme: IntegrationScheme, time_steps: usize) -> Result<(f64, SurfaceHistory), Box<dyn Error>> {
    let patch = Patch::uniform("wall", 4, 0.25, 100.0);
    let mut wall = FixedAdsorptionGradient::from_dictionary(&patch, "C", &wall_dictionary(scheme))?;

    let control = TimeControl::new(TOTAL_TIME, time_steps);
    control.validate()?;
    let mut time = control.start();
    let mut registry = FieldRegistry::new();
    let mut history = SurfaceHistory::new();
    let c = DVector::from_element(patch.size(), BULK);
    let d = DVector::from_element(patch.size(), 1e-9);

    history.record(time.value(), wall.surface_state(), &patch);
    for _ in 0..control.time_steps {
        time.advance();
        wall.update_coeffs(&mut PatchUpdate::new(&time, &c, &d, &mut registry))?;
        wall.evaluate(&c)?;
        history.record(time.value(), wall.surface_state(), &patch);
    }

    let (_, mean, _) = history.last().ok_or("empty history")?;
    Ok((mean, history))
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    let kinetics = KineticParameters::new(KADS, KDES, GAMMA)?;
    let y_eq = kinetics.equilibrium(BULK).ok_or("no equilibrium")?;
    let exact = y_eq * (1.0 - (-kinetics.relaxation_rate(BULK) * TOTAL_TIME).exp());

    // ─────────────────────────────────────────────────────────────────────────
    // Phase 1: Schemes
    // ─────────────────────────────────────────────────────────────────────────
    print_section("Phase 1: Integration schemes");
    println!("  Langmuir equilibrium     : {y_eq:.6}");
    println!("  Exact Yads at t = {TOTAL_TIME} s : {exact:.6}");
    println!(
        "  Euler stability limit    : dt < {:.1} s\n",
        kinetics.stable_time_step(BULK).ok_or("no stability limit")?
    );

    let mut reference_history = None;
    for scheme in [IntegrationScheme::ForwardEuler, IntegrationScheme::Exponential] {
        for time_steps in [600, 12] {
            let start = Instant::now();
            let (mean, history) = run(scheme, time_steps)?;
            let elapsed = start.elapsed().as_secs_f64() * 1e3;

            println!(
                "  {:<14} dt = {:>5.1} s : Yads = {mean:.6}  error = {:.2e}  ({elapsed:.2} ms)",
                scheme.name(),
                TOTAL_TIME / time_steps as f64,
                (mean - exact).abs()
            );

            if scheme == IntegrationScheme::ForwardEuler && time_steps == 600 {
                reference_history = Some(history);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Phase 2: Mesh change
    // ─────────────────────────────────────────────────────────────────────────
    print_section("Phase 2: Patch grows from 4 to 6 faces at t = 300 s");

    let registry_conditions = ConditionRegistry::with_builtins();
    let patch = Patch::uniform("wall", 4, 0.25, 100.0);
    let mut wall = registry_conditions.construct(&patch, "C", &wall_dictionary(IntegrationScheme::ForwardEuler))?;

    let mut time = TimeControl::new(TOTAL_TIME, 600).start();
    let mut registry = FieldRegistry::new();

    for step in 0..600 {
        if step == 300 {
            let grown = Patch::uniform("wall", 6, 0.25, 100.0);
            wall = wall.map_onto(&grown, &DirectMapper::grown(4, 6))?;
        }

        let n_faces = wall.patch().size();
        let c = DVector::from_element(n_faces, BULK);
        let d = DVector::from_element(n_faces, 1e-9);

        time.advance();
        wall.update_coeffs(&mut PatchUpdate::new(&time, &c, &d, &mut registry))?;
        wall.evaluate(&c)?;
    }

    let surface = registry
        .lookup("C_ads")?
        .patch_values("wall")
        .ok_or("wall not in mirrored field")?;
    for (face, y) in surface.iter().enumerate() {
        println!("  face {face}: Yads = {y:.6}");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Phase 3: Output
    // ─────────────────────────────────────────────────────────────────────────
    print_section("Phase 3: Output");

    let out_dir = PathBuf::from("output");
    std::fs::create_dir_all(&out_dir)?;

    let restart = out_dir.join("wall.json");
    wall.to_dictionary().write_to(&restart)?;
    println!("  Restart dictionary : {}", restart.display());

    if let Some(history) = reference_history {
        let path = out_dir.join("wall_history.csv");
        CsvExporter::default().export_history(&history, Some(100), &path)?;
        println!("  History            : {}", path.display());
    }

    let patch = Patch::uniform("wall", 6, 0.25, 100.0);
    let restarted = FixedAdsorptionGradient::from_dictionary(&patch, "C", &PatchDictionary::read_from("wall", &restart)?)?;
    let config = CsvConfig::default().with_metadata(CsvMetadata::from_condition(&restarted).with_run(TOTAL_TIME, 600));
    let path = out_dir.join("wall_faces.csv");
    CsvExporter::new(config).export_snapshot(&restarted, &path)?;
    println!("  Face snapshot      : {}", path.display());

    Ok(())
}
