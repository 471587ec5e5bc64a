//! Performance benchmarks for the adsorbing wall update
//!
//! One coefficient update integrates the surface kinetics on every face,
//! derives the gradient and mirrors the surface state into the registry.
//!
//! # What We're Measuring
//!
//! 1. **Scaling with face count**: time should grow linearly with faces
//! 2. **Scheme cost**: forward Euler (one rate evaluation) against the
//!    exponential update (one `exp_m1` per face)
//! 3. **Face-parallel loop**: sequential against Rayon for large patches,
//!    to tune `solver::set_parallel_threshold`
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench update_performance
//!
//! # Only the parallel comparison
//! cargo bench --bench update_performance parallel
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nalgebra::DVector;
use std::hint::black_box;

use wall_adsorb::prelude::*;
use wall_adsorb::solver::{parallel_threshold, set_parallel_threshold};

// =================================================================================================
// Benchmark Setup
// =================================================================================================

/// A wall patch with everything one update needs
struct Bench {
    wall: FixedAdsorptionGradient,
    time: TimeState,
    registry: FieldRegistry,
    concentration: DVector<f64>,
    diffusivity: DVector<f64>,
}

impl Bench {
    fn new(n_faces: usize, scheme: IntegrationScheme) -> Self {
        let patch = Patch::uniform("wall", n_faces, 1e-6, 1e4);
        let kinetics = KineticParameters::new(1e-3, 1e-4, 1.0).unwrap();

        Self {
            wall: FixedAdsorptionGradient::new(patch, "C", kinetics).with_scheme(scheme),
            time: TimeState::new(0.0, 1e-2),
            registry: FieldRegistry::new(),
            concentration: DVector::from_fn(n_faces, |i, _| 1.0 + (i % 17) as f64),
            diffusivity: DVector::from_element(n_faces, 1e-9),
        }
    }

    /// Advance one step and update (the time index changes every call, so
    /// no call is skipped by the update gating)
    fn step(&mut self) -> Option<UpdateReport> {
        self.time.advance();
        self.wall
            .update_coeffs(&mut PatchUpdate::new(
                &self.time,
                &self.concentration,
                &self.diffusivity,
                &mut self.registry,
            ))
            .unwrap()
    }
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Forward Euler update for growing patches
///
/// Expected: linear in the number of faces, with a step once the patch
/// crosses the parallel threshold.
fn benchmark_face_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Update per Face Count");

    for n_faces in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n_faces as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_faces), &n_faces, |b, &n_faces| {
            let mut bench = Bench::new(n_faces, IntegrationScheme::ForwardEuler);
            b.iter(|| black_box(bench.step()));
        });
    }

    group.finish();
}

/// Both integration schemes on the same patch
fn benchmark_scheme_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scheme Comparison");
    let n_faces = 10_000;
    group.throughput(Throughput::Elements(n_faces as u64));

    for scheme in [IntegrationScheme::ForwardEuler, IntegrationScheme::Exponential] {
        group.bench_function(scheme.name(), |b| {
            let mut bench = Bench::new(n_faces, scheme);
            b.iter(|| black_box(bench.step()));
        });
    }

    group.finish();
}

/// Sequential against Rayon face loop
///
/// If the parallel variant is not faster at a given size, the default
/// threshold is too low for this machine.
fn benchmark_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Face Loop parallel");
    let saved = parallel_threshold();

    for n_faces in [1_000, 50_000] {
        group.throughput(Throughput::Elements(n_faces as u64));

        for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
            group.bench_with_input(BenchmarkId::new(label, n_faces), &n_faces, |b, &n_faces| {
                set_parallel_threshold(threshold);
                let mut bench = Bench::new(n_faces, IntegrationScheme::ForwardEuler);
                b.iter(|| black_box(bench.step()));
            });
        }
    }

    set_parallel_threshold(saved);
    group.finish();
}

criterion_group!(
    benches,
    benchmark_face_scaling,
    benchmark_scheme_comparison,
    benchmark_parallel_threshold,
);
criterion_main!(benches);
