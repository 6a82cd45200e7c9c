use crate::core::error::{Result, SimError};
use crate::core::forces::EARTH_GRAVITY_MPS2;
use crate::core::params::LaunchParameters;
use crate::core::trajectory::{KinematicState, MAX_TRAJECTORY_SAMPLES, Trajectory};

const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Closed-form drag-free state at `time_s`. Not clamped to the ground.
pub fn state_at_time(params: LaunchParameters, time_s: f64) -> KinematicState {
    let (vx, vy) = params.velocity_components();
    KinematicState {
        t: time_s,
        x: vx * time_s,
        y: params.height_m + (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s),
        vx,
        vy: vy - EARTH_GRAVITY_MPS2 * time_s,
    }
}

fn landing_time(params: LaunchParameters) -> f64 {
    let (_, vy) = params.velocity_components();
    if params.height_m == 0.0 {
        return (2.0 * vy / EARTH_GRAVITY_MPS2).max(0.0);
    }

    // Positive root of 0.5*g*t^2 - vy*t - h = 0; h > 0 keeps the discriminant positive.
    let disc = vy * vy + 2.0 * EARTH_GRAVITY_MPS2 * params.height_m;
    ((vy + disc.sqrt()) / EARTH_GRAVITY_MPS2).max(0.0)
}

/// Drag-free (flight time, range) without sampling the path.
pub fn flight_time_and_range(params: LaunchParameters) -> Result<(f64, f64)> {
    params.validate()?;
    let t_land = landing_time(params);
    let (vx, _) = params.velocity_components();
    Ok((t_land, vx * t_land))
}

/// Drag-free trajectory sampled every `time_step_s`, ending exactly on the ground.
pub fn solve_no_drag(params: LaunchParameters) -> Result<Trajectory> {
    let (t_land, range) = flight_time_and_range(params)?;
    let dt = params.time_step_s;

    let steps = t_land / dt;
    if steps > MAX_TRAJECTORY_SAMPLES as f64 {
        return Err(SimError::invalid(
            "time_step_s",
            dt,
            "too small to sample the whole flight",
        ));
    }

    let expected = steps as usize + 2;
    let mut samples = Vec::with_capacity(expected.min(MAX_PREALLOCATED_SAMPLES));
    let mut step = 0u64;
    loop {
        let t = step as f64 * dt;
        if t >= t_land {
            break;
        }
        let mut state = state_at_time(params, t);
        state.y = state.y.max(0.0);
        samples.push(state);
        step += 1;
    }

    let mut impact = state_at_time(params, t_land);
    impact.x = range;
    impact.y = 0.0;
    samples.push(impact);

    tracing::debug!(
        angle_deg = params.angle_deg,
        range_m = range,
        flight_time_s = t_land,
        samples = samples.len(),
        "analytic trajectory landed"
    );
    Ok(Trajectory::from_samples(samples))
}

#[cfg(test)]
mod tests {
    use super::{flight_time_and_range, solve_no_drag, state_at_time};
    use crate::core::error::SimError;
    use crate::core::forces::EARTH_GRAVITY_MPS2;
    use crate::core::params::LaunchParameters;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn launch(angle_deg: f64, speed_mps: f64, height_m: f64) -> LaunchParameters {
        LaunchParameters::default()
            .with_angle(angle_deg)
            .with_speed(speed_mps)
            .with_height(height_m)
    }

    #[test]
    fn computes_known_range_for_flat_ground() {
        let (time, distance) =
            flight_time_and_range(launch(45.0, 10.0, 0.0)).expect("calculation should succeed");

        assert_close(time, 1.4416, 0.001);
        assert_close(distance, 10.1937, 0.001);
    }

    #[test]
    fn elevated_launch_uses_positive_root() {
        let params = launch(30.0, 20.0, 5.0);
        let (time, _) = flight_time_and_range(params).expect("calculation should succeed");

        assert_close(state_at_time(params, time).y, 0.0, 1e-9);
        assert!(time > 2.0 * 10.0 / EARTH_GRAVITY_MPS2);
    }

    #[test]
    fn trajectory_starts_at_launch_and_ends_on_ground() {
        let params = launch(40.0, 30.0, 1.5);
        let trajectory = solve_no_drag(params).expect("trajectory should solve");
        let (time, distance) = flight_time_and_range(params).expect("calculation should succeed");

        let first = trajectory.launch();
        assert_eq!((first.t, first.x, first.y), (0.0, 0.0, 1.5));
        assert_eq!(trajectory.impact().y, 0.0);
        assert_eq!(trajectory.range_m(), distance);
        assert_eq!(trajectory.flight_time_s(), time);
        assert!(trajectory.samples().iter().all(|s| s.y >= 0.0));
        assert!(
            trajectory
                .samples()
                .windows(2)
                .all(|pair| pair[0].t < pair[1].t)
        );
    }

    #[test]
    fn samples_follow_the_time_step() {
        let params = launch(45.0, 40.0, 0.0).with_time_step(0.01);
        let trajectory = solve_no_drag(params).expect("trajectory should solve");

        assert_close(trajectory.samples()[1].t, 0.01, 1e-12);
        assert_close(trajectory.samples()[2].t, 0.02, 1e-12);
        let expected = (trajectory.flight_time_s() / 0.01).ceil() as usize + 1;
        assert_eq!(trajectory.len(), expected);
    }

    #[test]
    fn horizontal_launch_from_ground_lands_immediately() {
        let trajectory = solve_no_drag(launch(0.0, 25.0, 0.0)).expect("trajectory should solve");

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.range_m(), 0.0);
        assert_eq!(trajectory.flight_time_s(), 0.0);
    }

    #[test]
    fn vertical_launch_has_negligible_range() {
        let trajectory = solve_no_drag(launch(90.0, 20.0, 0.0)).expect("trajectory should solve");

        assert_close(trajectory.range_m(), 0.0, 1e-9);
        assert_close(trajectory.flight_time_s(), 40.0 / EARTH_GRAVITY_MPS2, 1e-9);
    }

    #[test]
    fn rejects_step_too_small_to_sample() {
        let params = LaunchParameters::default().with_time_step(1e-300);
        assert!(params.validate().is_ok());

        let err = solve_no_drag(params).expect_err("sample count should be bounded");
        assert!(matches!(
            err,
            SimError::InvalidParameter {
                name: "time_step_s",
                ..
            }
        ));
        assert!(flight_time_and_range(params).is_ok());
    }

    #[test]
    fn rejects_zero_speed() {
        let err = solve_no_drag(launch(90.0, 0.0, 0.0)).expect_err("zero speed should fail");
        assert!(matches!(
            err,
            SimError::InvalidParameter {
                name: "speed_mps",
                ..
            }
        ));
    }
}
