//! Fixed-step integration of a launch until it hits the ground.
//!
//! Each step updates velocity first and then moves the position with the
//! *new* velocity. When a step ends below the ground the overshoot sample is
//! replaced by the linearly interpolated crossing, so every finished
//! trajectory ends at exactly `y == 0.0`.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{ParseSchemeError, Result, SimError};
use crate::core::forces::ForceModel;
use crate::core::params::LaunchParameters;
use crate::core::trajectory::{KinematicState, MAX_TRAJECTORY_SAMPLES, Trajectory};

/// Simulated seconds after which a flight that has not landed is abandoned.
pub const MAX_FLIGHT_TIME_S: f64 = 60.0;

/// Velocity stepping rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// One force evaluation per step.
    Euler,
    /// Classical four-stage Runge-Kutta on the velocity.
    #[default]
    Rk4,
}

impl Scheme {
    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Rk4 => "rk4",
        }
    }

    /// Advances (vx, vy) by one step of `dt` under `force`.
    pub fn advance_velocity(self, force: ForceModel, vx: f64, vy: f64, dt: f64) -> (f64, f64) {
        match self {
            Self::Euler => {
                let (ax, ay) = force.acceleration(vx, vy);
                (vx + ax * dt, vy + ay * dt)
            }
            Self::Rk4 => {
                let half_dt = 0.5 * dt;
                let k1 = force.acceleration(vx, vy);
                let k2 = force.acceleration(vx + half_dt * k1.0, vy + half_dt * k1.1);
                let k3 = force.acceleration(vx + half_dt * k2.0, vy + half_dt * k2.1);
                let k4 = force.acceleration(vx + dt * k3.0, vy + dt * k3.1);
                (
                    vx + (dt / 6.0) * (k1.0 + 2.0 * k2.0 + 2.0 * k3.0 + k4.0),
                    vy + (dt / 6.0) * (k1.1 + 2.0 * k2.1 + 2.0 * k3.1 + k4.1),
                )
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Self::Euler),
            "rk4" | "runge-kutta" => Ok(Self::Rk4),
            _ => Err(ParseSchemeError(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    Stepping,
    Landed,
}

/// Stepping context for one launch.
///
/// Owned by whoever drives it: [`solve_drag`] runs it to completion, an
/// animation loop calls [`Flight::step`] once per frame.
#[derive(Clone, Debug)]
pub struct Flight {
    force: ForceModel,
    scheme: Scheme,
    dt: f64,
    samples: Vec<KinematicState>,
    phase: FlightPhase,
}

impl Flight {
    pub fn launch(params: LaunchParameters, force: ForceModel, scheme: Scheme) -> Result<Self> {
        params.validate()?;
        if MAX_FLIGHT_TIME_S / params.time_step_s > MAX_TRAJECTORY_SAMPLES as f64 {
            return Err(SimError::invalid(
                "time_step_s",
                params.time_step_s,
                "too small to reach the flight time bound",
            ));
        }
        Ok(Self {
            force,
            scheme,
            dt: params.time_step_s,
            samples: vec![params.initial_state()],
            phase: FlightPhase::Stepping,
        })
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn samples(&self) -> &[KinematicState] {
        &self.samples
    }

    /// Latest sample; the impact point once landed.
    pub fn current(&self) -> KinematicState {
        self.samples.last().copied().unwrap_or_default()
    }

    pub fn landed_range(&self) -> Option<f64> {
        match self.phase {
            FlightPhase::Landed => Some(self.current().x),
            FlightPhase::Stepping => None,
        }
    }

    /// Advances one time step. Stepping a landed flight is a no-op.
    pub fn step(&mut self) -> Result<FlightPhase> {
        if self.phase == FlightPhase::Landed {
            return Ok(self.phase);
        }

        let prev = self.current();
        let (vx, vy) = self
            .scheme
            .advance_velocity(self.force, prev.vx, prev.vy, self.dt);
        let next = KinematicState {
            t: prev.t + self.dt,
            x: prev.x + vx * self.dt,
            y: prev.y + vy * self.dt,
            vx,
            vy,
        };

        if next.y < 0.0 {
            let impact = ground_crossing(prev, next)?;
            self.samples.push(impact);
            self.phase = FlightPhase::Landed;
            tracing::debug!(
                scheme = %self.scheme,
                range_m = impact.x,
                flight_time_s = impact.t,
                samples = self.samples.len(),
                "integrated trajectory landed"
            );
            return Ok(self.phase);
        }

        if next.t > MAX_FLIGHT_TIME_S {
            return Err(SimError::NoLanding {
                max_time_s: MAX_FLIGHT_TIME_S,
            });
        }

        tracing::trace!(t = next.t, x = next.x, y = next.y, "step");
        self.samples.push(next);
        Ok(self.phase)
    }

    /// Steps until landing and hands back the finished trajectory.
    pub fn run(mut self) -> Result<Trajectory> {
        while self.step()? == FlightPhase::Stepping {}
        Ok(Trajectory::from_samples(self.samples))
    }

    /// The finished trajectory, or `None` while still airborne.
    pub fn into_trajectory(self) -> Option<Trajectory> {
        match self.phase {
            FlightPhase::Landed => Some(Trajectory::from_samples(self.samples)),
            FlightPhase::Stepping => None,
        }
    }
}

/// Linear interpolation of the ground crossing between the last sample at or
/// above the ground and the first one below it.
pub fn ground_crossing(prev: KinematicState, over: KinematicState) -> Result<KinematicState> {
    let degenerate = SimError::DegenerateInterpolation {
        y_prev: prev.y,
        y_over: over.y,
    };

    let drop = prev.y - over.y;
    if drop == 0.0 {
        return Err(degenerate);
    }
    let fraction = prev.y / drop;
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(degenerate);
    }

    let lerp = |a: f64, b: f64| a + (b - a) * fraction;
    Ok(KinematicState {
        t: lerp(prev.t, over.t),
        x: lerp(prev.x, over.x),
        y: 0.0,
        vx: lerp(prev.vx, over.vx),
        vy: lerp(prev.vy, over.vy),
    })
}

/// Any force model, any scheme, stepped to the ground.
pub fn solve(params: LaunchParameters, force: ForceModel, scheme: Scheme) -> Result<Trajectory> {
    Flight::launch(params, force, scheme)?.run()
}

/// Quadratic-drag trajectory for the launch's k and mass.
pub fn solve_drag(params: LaunchParameters, scheme: Scheme) -> Result<Trajectory> {
    solve(params, ForceModel::for_launch(&params), scheme)
}
