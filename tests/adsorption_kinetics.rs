//! Kinetic behaviour of the adsorbing wall over many time steps
//!
//! These tests drive the condition through the registry and the trait
//! object, the way an engine does, and check the physical properties of
//! the surface state.

use approx::assert_relative_eq;
use nalgebra::DVector;
use rand::{SeedableRng, rngs::StdRng};

use wall_adsorb::prelude::*;

mod common;
use common::{
    WallCase, random_concentrations, reference_dictionary, reference_kinetics, relative_error, stiff_kinetics,
};

fn boxed(kinetics: KineticParameters, n_faces: usize, scheme: IntegrationScheme) -> Box<dyn PatchCondition> {
    let patch = Patch::uniform("wall", n_faces, 1.0, 1.0);
    Box::new(FixedAdsorptionGradient::new(patch, "C", kinetics).with_scheme(scheme))
}

#[test]
fn test_reference_scenario() {
    let patch = Patch::uniform("wall", 5, 1.0, 1.0);
    let mut case = WallCase::from_dictionary(&patch, &reference_dictionary("wall"), 1.0);
    let c = DVector::from_element(5, 10.0);

    case.step(&c);
    for &y in case.mirrored_surface().iter() {
        assert_relative_eq!(y, 0.01, epsilon = 1e-12);
    }

    for _ in 0..3000 {
        case.step(&c);
    }
    for &y in case.mirrored_surface().iter() {
        assert!(relative_error(y, 0.9901) < 1e-4, "Yads = {y}");
    }
}

#[test]
fn test_euler_first_order_convergence() {
    // Error at fixed end time should halve with the step size
    let kinetics = reference_kinetics();
    let c = 10.0;
    let total_time = 100.0;

    let lambda = kinetics.relaxation_rate(c);
    let y_eq = kinetics.equilibrium(c).unwrap();
    let exact = y_eq * (1.0 - (-lambda * total_time).exp());

    let mut errors = Vec::new();
    for steps in [25, 50, 100, 200] {
        let control = TimeControl::new(total_time, steps);
        control.validate().unwrap();

        let mut case = WallCase::new(boxed(kinetics, 1, IntegrationScheme::ForwardEuler), control.delta_t());
        let bulk = DVector::from_element(1, c);
        for _ in 0..steps {
            case.step(&bulk);
        }
        errors.push((case.mirrored_surface()[0] - exact).abs());
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        assert!(
            ratio > 1.8 && ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_exponential_scheme_is_step_size_independent() {
    let kinetics = reference_kinetics();
    let total_time = 200.0;
    let exact = kinetics.equilibrium(10.0).unwrap() * (1.0 - (-kinetics.relaxation_rate(10.0) * total_time).exp());

    for steps in [1, 7, 200] {
        let control = TimeControl::new(total_time, steps);
        let mut case = WallCase::new(boxed(kinetics, 2, IntegrationScheme::Exponential), control.delta_t());
        let bulk = DVector::from_element(2, 10.0);
        for _ in 0..steps {
            case.step(&bulk);
        }
        assert_relative_eq!(case.mirrored_surface()[1], exact, epsilon = 1e-12);
    }
}

#[test]
fn test_surface_stays_within_capacity() {
    let n_faces = 16;
    let mut rng = StdRng::seed_from_u64(7);

    for (kinetics, delta_t) in [
        (reference_kinetics(), 1.0),
        (reference_kinetics(), 500.0),
        (stiff_kinetics(), 0.1),
        (stiff_kinetics(), 10.0),
    ] {
        for scheme in [IntegrationScheme::ForwardEuler, IntegrationScheme::Exponential] {
            let mut case = WallCase::new(boxed(kinetics, n_faces, scheme), delta_t);

            for _ in 0..200 {
                let c = random_concentrations(&mut rng, n_faces, 50.0);
                case.step(&c);

                let gamma = kinetics.gamma();
                assert!(
                    case.mirrored_surface().iter().all(|&y| (0.0..=gamma).contains(&y)),
                    "{scheme} with dt = {delta_t} left [0, {gamma}]"
                );
                assert!(case.gradient().iter().all(|g| g.is_finite()));
            }
        }
    }
}

#[test]
fn test_desorption_only_wall() {
    let kinetics = KineticParameters::new(0.0, 0.05, 1.0).unwrap();
    let patch = Patch::uniform("wall", 4, 1.0, 1.0);
    let wall = FixedAdsorptionGradient::new(patch, "C", kinetics)
        .with_surface_state(SurfaceStateStore::uniform(4, 0.8))
        .unwrap();
    let mut case = WallCase::new(Box::new(wall), 1.0);
    let mut rng = StdRng::seed_from_u64(11);

    let mut previous = case.condition.to_dictionary().lookup_face_values("Yads", 4).unwrap().unwrap();
    for _ in 0..100 {
        case.step(&random_concentrations(&mut rng, 4, 1000.0));
        let current = case.mirrored_surface();

        for face in 0..4 {
            assert!(current[face] < previous[face]);
            assert_relative_eq!(current[face], 0.95 * previous[face], epsilon = 1e-14);
        }
        previous = current;
    }
}

#[test]
fn test_gradient_matches_surface_uptake() {
    let patch = Patch::new(
        "wall",
        DVector::from_element(3, 1.0),
        DVector::from_element(3, 1.0),
    )
    .unwrap();
    let mut case = WallCase::from_dictionary(&patch, &reference_dictionary("wall"), 2.0);
    case.diffusivity = DVector::from_vec(vec![1.0, 2.0, 4.0]);
    let c = DVector::from_element(3, 10.0);

    case.step(&c);
    let before = case.mirrored_surface();
    case.step(&c);
    let after = case.mirrored_surface();

    for face in 0..3 {
        let uptake_rate = (after[face] - before[face]) / 2.0;
        assert_relative_eq!(
            case.gradient()[face],
            uptake_rate / case.diffusivity[face],
            epsilon = 1e-14
        );
        assert!(case.gradient()[face] > 0.0);
    }
}

#[test]
fn test_corrector_loop_is_idempotent() {
    let patch = Patch::uniform("wall", 3, 1.0, 1.0);
    let mut case = WallCase::from_dictionary(&patch, &reference_dictionary("wall"), 1.0);
    let c = DVector::from_element(3, 10.0);

    for _ in 0..5 {
        let report = case.step(&c).unwrap();
        assert!(report.integrated);

        let surface = case.mirrored_surface();
        let gradient = case.gradient().clone();

        // Outer correctors re-assemble with updated bulk values
        for corrector in 1..4 {
            let corrected = DVector::from_element(3, 10.0 + corrector as f64);
            assert!(case.assemble(&corrected).is_none());
            assert_eq!(case.mirrored_surface(), surface);
            assert_eq!(case.gradient(), &gradient);
        }
    }
}

#[test]
fn test_unusable_faces_recover() {
    let patch = Patch::uniform("wall", 3, 1.0, 1.0);
    let mut case = WallCase::from_dictionary(&patch, &reference_dictionary("wall"), 1.0);

    let report = case.step(&DVector::from_vec(vec![10.0, f64::NAN, 10.0])).unwrap();
    assert_eq!(report.rejected_faces, 1);
    assert_eq!(case.mirrored_surface()[1], 0.0);

    let report = case.step(&DVector::from_element(3, 10.0)).unwrap();
    assert_eq!(report.rejected_faces, 0);
    assert_relative_eq!(case.mirrored_surface()[1], 0.01, epsilon = 1e-12);
    assert!(case.mirrored_surface()[0] > case.mirrored_surface()[1]);
}
