use approx::assert_relative_eq;
use proptest::prelude::*;

use spar_core::calculations::spar::{calculate_spar, section_inertia, SparInput};
use spar_core::calculations::sweep::{sweep_over_load, sweep_over_span, SweepSection};
use spar_core::equations::beam::{bending_stress, cantilever_tip_deflection};
use spar_core::equations::section::combined_moment_of_inertia;
use spar_core::export::{load_sweep_to_csv, parse_load_sweep_csv, LoadSweepTable};
use spar_core::{analyze, AnalysisConfig, LoadCase, MaterialProperties, TubeGeometry};

const E: f64 = 70.0e9;

#[test]
fn reference_tube_scenario() {
    // L = 1 m, F = 100 N, E = 70 GPa, OD 20 mm / ID 18 mm
    let i = section_inertia(20.0, 18.0).unwrap();
    assert_relative_eq!(i, 2.700984e-9, max_relative = 1e-6);

    let material = MaterialProperties::new(E, None, 2700.0).unwrap();
    let load = LoadCase::new(100.0, 1.0).unwrap();
    let result = calculate_spar(&SparInput::new("Main", 20.0, 18.0), &material, &load).unwrap();

    assert_relative_eq!(result.tip_deflection_m, 100.0 / (3.0 * E * i), max_relative = 1e-12);
    assert_relative_eq!(result.tip_deflection_m, 0.176303, max_relative = 1e-5);
}

#[test]
fn default_configuration_exports_and_parses() {
    let result = analyze(&AnalysisConfig::default()).unwrap();
    let csv = load_sweep_to_csv(&result.load_sweep).unwrap();
    let table = parse_load_sweep_csv(&csv).unwrap();

    assert_eq!(table.spar_labels, vec!["Front", "Rear"]);
    assert_eq!(table.rows.len(), 21);
    assert_eq!(table.rows.last().map(|r| r.load_n), Some(60.0));
}

fn tube() -> impl Strategy<Value = (f64, f64)> {
    (1.0f64..100.0, 0.0f64..0.95).prop_map(|(od, frac)| (od, od * frac))
}

proptest! {
    #[test]
    fn inertia_is_positive_for_valid_tubes((od, id) in tube()) {
        let i = section_inertia(od, id).unwrap();
        prop_assert!(i > 0.0);
    }

    #[test]
    fn inner_not_smaller_is_rejected(od in 0.1f64..100.0, extra in 0.0f64..50.0) {
        prop_assert!(TubeGeometry::from_mm(od, od + extra).is_err());
    }

    #[test]
    fn inertia_grows_with_outer_diameter((od, id) in tube(), grow in 0.5f64..20.0) {
        let smaller = section_inertia(od, id).unwrap();
        let larger = section_inertia(od + grow, id).unwrap();
        prop_assert!(larger > smaller);
    }

    #[test]
    fn inertia_shrinks_with_bore(od in 5.0f64..100.0, frac in 0.0f64..0.8, bore in 0.01f64..0.1) {
        let id = od * frac;
        let thick = section_inertia(od, id).unwrap();
        let thin = section_inertia(od, id + od * bore).unwrap();
        prop_assert!(thin < thick);
    }

    #[test]
    fn combined_inertia_is_sum((od1, id1) in tube(), (od2, id2) in tube()) {
        let i1 = section_inertia(od1, id1).unwrap();
        let i2 = section_inertia(od2, id2).unwrap();
        let total = combined_moment_of_inertia(i1, i2);
        prop_assert_eq!(total, i1 + i2);
        prop_assert!(total >= i1 && total >= i2);
    }

    #[test]
    fn stress_and_deflection_are_linear_in_load(
        (od, id) in tube(),
        force in 0.1f64..1000.0,
        span in 0.1f64..5.0,
    ) {
        let g = TubeGeometry::from_mm(od, id).unwrap();
        let (i, c) = (g.moment_of_inertia_m4(), g.extreme_fiber_m());

        let s1 = bending_stress(force, span, i, c);
        let s2 = bending_stress(2.0 * force, span, i, c);
        prop_assert!((s2 - 2.0 * s1).abs() <= 1e-9 * s2.abs());

        let d1 = cantilever_tip_deflection(force, span, E, i);
        let d2 = cantilever_tip_deflection(2.0 * force, span, E, i);
        prop_assert!((d2 - 2.0 * d1).abs() <= 1e-9 * d2.abs());
    }

    #[test]
    fn deflection_scales_with_cube_of_span((od, id) in tube(), span in 0.1f64..5.0) {
        let i = section_inertia(od, id).unwrap();
        let short = cantilever_tip_deflection(10.0, span, E, i);
        let long = cantilever_tip_deflection(10.0, 2.0 * span, E, i);
        prop_assert!((long - 8.0 * short).abs() <= 1e-9 * long);
    }

    #[test]
    fn span_sweep_respects_sample_count(n in 0usize..500) {
        let i = section_inertia(20.0, 18.0).unwrap();
        let profile = sweep_over_span(1.3, 60.0, E, i, n).unwrap();
        prop_assert_eq!(profile.moment.len(), n);
        prop_assert_eq!(profile.deflection.len(), n);
        if n >= 2 {
            prop_assert_eq!(profile.moment.points()[n - 1].0, 1.3);
        }
    }

    #[test]
    fn elastic_curve_increases_toward_tip(n in 2usize..300, force in 0.1f64..500.0) {
        let i = section_inertia(20.0, 18.0).unwrap();
        let profile = sweep_over_span(1.3, force, E, i, n).unwrap();
        let ys: Vec<f64> = profile.deflection.ys().collect();
        prop_assert!(ys.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn csv_round_trip(
        labels in prop::collection::hash_set("[A-Za-z][A-Za-z0-9]{0,8}", 1..3),
        max_force in -500.0f64..500.0,
        n in 0usize..60,
    ) {
        let sections: Vec<SweepSection> = labels
            .iter()
            .map(|l| SweepSection::of_tube(l.clone(), &TubeGeometry::from_mm(20.0, 18.0).unwrap()))
            .collect();
        let sweep = sweep_over_load(max_force, 1.3, &sections, E, n).unwrap();

        let expected = LoadSweepTable::from_sweep(&sweep).unwrap();
        let parsed = parse_load_sweep_csv(&load_sweep_to_csv(&sweep).unwrap()).unwrap();
        prop_assert_eq!(parsed, expected);
    }
}
