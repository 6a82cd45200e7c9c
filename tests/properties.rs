use parabolic_drag::core::forces::EARTH_GRAVITY_MPS2;
use parabolic_drag::core::sweep::sweep_angles_parallel;
use parabolic_drag::{
    LaunchParameters, Scheme, SimError, SweepConfig, solve_drag, solve_no_drag, sweep_angles,
};
use proptest::prelude::*;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}

fn reference_launch() -> LaunchParameters {
    LaunchParameters::default()
        .with_speed(40.0)
        .with_angle(35.0)
        .with_mass(0.2)
}

#[test]
fn analytic_range_matches_textbook_formula() {
    let params = LaunchParameters::default()
        .with_speed(40.0)
        .with_angle(45.0)
        .with_drag(0.0);
    let trajectory = solve_no_drag(params).expect("trajectory should solve");

    let expected = 40.0 * 40.0 * (2.0 * 45f64.to_radians()).sin() / EARTH_GRAVITY_MPS2;
    assert_close(trajectory.range_m(), expected, 1e-9);
    assert_close(trajectory.range_m(), 163.1, 0.05);
}

#[test]
fn increasing_drag_strictly_shortens_range() {
    let params = reference_launch();
    let ranges: Vec<f64> = [0.0, 0.06, 0.12]
        .into_iter()
        .map(|k| {
            solve_drag(params.with_drag(k), Scheme::Rk4)
                .expect("trajectory should solve")
                .range_m()
        })
        .collect();

    assert!(ranges[0] > ranges[1], "{ranges:?}");
    assert!(ranges[1] > ranges[2], "{ranges:?}");
}

#[test]
fn euler_and_rk4_converge_as_step_shrinks() {
    let params = reference_launch().with_drag(0.06);
    let gap = |dt: f64| {
        let euler = solve_drag(params.with_time_step(dt), Scheme::Euler).expect("euler");
        let rk4 = solve_drag(params.with_time_step(dt), Scheme::Rk4).expect("rk4");
        (euler.range_m() - rk4.range_m()).abs()
    };

    let coarse = gap(1e-2);
    let fine = gap(1e-4);
    assert!(fine < 0.1, "fine gap {fine}");
    assert!(fine < coarse, "fine gap {fine} vs coarse gap {coarse}");
}

#[test]
fn default_sweep_is_strictly_ascending() {
    let (ideal, dragged) =
        sweep_angles(reference_launch(), SweepConfig::default()).expect("sweep should work");

    assert_eq!(ideal.len(), 71);
    assert_eq!(dragged.len(), 71);
    for curve in [&ideal, &dragged] {
        assert!(
            curve
                .samples()
                .windows(2)
                .all(|pair| pair[0].angle_deg < pair[1].angle_deg)
        );
        assert_eq!(curve.samples()[0].angle_deg, 10.0);
        assert_eq!(curve.samples()[70].angle_deg, 80.0);
    }
}

#[test]
fn parallel_sweep_is_sorted_too() {
    let (ideal, dragged) = sweep_angles_parallel(reference_launch(), SweepConfig::default())
        .expect("sweep should work");

    for curve in [&ideal, &dragged] {
        assert!(
            curve
                .samples()
                .windows(2)
                .all(|pair| pair[0].angle_deg < pair[1].angle_deg)
        );
    }
}

#[test]
fn zero_speed_is_a_parameter_error() {
    let params = LaunchParameters::default().with_speed(0.0).with_angle(90.0);

    for result in [
        solve_no_drag(params),
        solve_drag(params, Scheme::Euler),
        solve_drag(params, Scheme::Rk4),
    ] {
        assert!(matches!(
            result,
            Err(SimError::InvalidParameter {
                name: "speed_mps",
                ..
            })
        ));
    }
}

#[test]
fn grazing_launch_from_ground_lands_immediately() {
    let params = LaunchParameters::default().with_angle(0.0);

    let ideal = solve_no_drag(params).expect("analytic");
    let dragged = solve_drag(params, Scheme::Euler).expect("euler");
    for trajectory in [ideal, dragged] {
        assert_eq!(trajectory.range_m(), 0.0);
        assert_eq!(trajectory.flight_time_s(), 0.0);
        assert_eq!(trajectory.impact().y, 0.0);
    }
}

#[test]
fn elevated_launch_flies_further_than_ground_launch() {
    let ground = solve_drag(reference_launch(), Scheme::Rk4).expect("ground launch");
    let raised = solve_drag(reference_launch().with_height(10.0), Scheme::Rk4).expect("raised");

    assert!(raised.range_m() > ground.range_m());
    assert_eq!(raised.launch().y, 10.0);
    assert_eq!(raised.impact().y, 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn zero_drag_matches_analytic_range(
        speed in 10.0f64..60.0,
        angle in 15.0f64..75.0,
        dt in 0.0005f64..0.002,
        scheme in prop_oneof![Just(Scheme::Euler), Just(Scheme::Rk4)],
    ) {
        let params = LaunchParameters::default()
            .with_speed(speed)
            .with_angle(angle)
            .with_drag(0.0)
            .with_time_step(dt);

        let analytic = solve_no_drag(params).expect("analytic").range_m();
        let numeric = solve_drag(params, scheme).expect("numeric").range_m();
        prop_assert!(
            (numeric - analytic).abs() <= 0.01 * analytic,
            "numeric={} analytic={}", numeric, analytic
        );
    }

    #[test]
    fn every_trajectory_ends_exactly_on_the_ground(
        speed in 1.0f64..60.0,
        angle in 0.0f64..=90.0,
        mass in 0.1f64..2.0,
        drag_k in 0.0f64..0.1,
        dt in 0.0005f64..0.01,
        height in 0.0f64..20.0,
    ) {
        let params = LaunchParameters {
            speed_mps: speed,
            angle_deg: angle,
            mass_kg: mass,
            drag_k,
            time_step_s: dt,
            height_m: height,
        };

        let runs = [
            solve_no_drag(params),
            solve_drag(params, Scheme::Euler),
            solve_drag(params, Scheme::Rk4),
        ];
        for run in runs {
            let trajectory = run.expect("trajectory should solve");
            prop_assert_eq!(trajectory.impact().y, 0.0);
            prop_assert!(trajectory.samples().iter().all(|s| s.y >= 0.0));
            prop_assert!(
                trajectory.samples().windows(2).all(|pair| pair[0].t <= pair[1].t)
            );
            prop_assert_eq!(trajectory.launch().t, 0.0);
        }
    }

    #[test]
    fn drag_never_lengthens_range(
        angle in 10.0f64..80.0,
        drag_k in 0.001f64..0.2,
    ) {
        let params = reference_launch().with_angle(angle);
        let ideal = solve_no_drag(params).expect("analytic").range_m();
        let dragged = solve_drag(params.with_drag(drag_k), Scheme::Rk4).expect("rk4").range_m();
        prop_assert!(dragged < ideal);
    }
}
