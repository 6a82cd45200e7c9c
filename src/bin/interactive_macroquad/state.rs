use macroquad::prelude::{Vec2, vec2};
use parabolic_drag::core::forces::ForceModel;
use parabolic_drag::core::params::{DEFAULT_DRAG_K, DEFAULT_MASS_KG, DEFAULT_SPEED_MPS};
use parabolic_drag::{
    Flight, FlightPhase, KinematicState, LaunchParameters, Scheme, SimError, SweepCollector,
};

use crate::constants::{FRAME_STEP_S, MAX_SHOTS, TRAIL_CAPACITY};
use crate::trail::Trail;

pub(crate) fn world_point(state: KinematicState) -> Vec2 {
    vec2(state.x as f32, state.y as f32)
}

/// Slider-bound launch settings.
#[derive(Clone, Copy)]
pub(crate) struct Controls {
    pub(crate) angle_deg: f32,
    pub(crate) speed_mps: f32,
    pub(crate) mass_kg: f32,
    pub(crate) drag_k: f32,
    pub(crate) sim_speed: f32,
}

impl Controls {
    pub(crate) fn new() -> Self {
        Self {
            angle_deg: 45.0,
            speed_mps: DEFAULT_SPEED_MPS as f32,
            mass_kg: DEFAULT_MASS_KG as f32,
            drag_k: DEFAULT_DRAG_K as f32,
            sim_speed: 1.0,
        }
    }

    pub(crate) fn launch_parameters(&self) -> LaunchParameters {
        LaunchParameters {
            speed_mps: f64::from(self.speed_mps),
            angle_deg: f64::from(self.angle_deg),
            mass_kg: f64::from(self.mass_kg),
            drag_k: f64::from(self.drag_k),
            time_step_s: FRAME_STEP_S,
            height_m: 0.0,
        }
    }
}

/// One animated projectile: its stepping context plus what has been drawn.
pub(crate) struct Ball {
    pub(crate) flight: Flight,
    pub(crate) trail: Trail,
}

impl Ball {
    fn launch(params: LaunchParameters, force: ForceModel) -> Result<Self, SimError> {
        let flight = Flight::launch(params, force, Scheme::Rk4)?;
        let mut trail = Trail::new(TRAIL_CAPACITY);
        trail.push(world_point(flight.current()));
        Ok(Self { flight, trail })
    }

    fn advance(&mut self) -> Result<(), SimError> {
        if self.flight.phase() == FlightPhase::Landed {
            return Ok(());
        }
        self.flight.step()?;
        self.trail.push(world_point(self.flight.current()));
        Ok(())
    }

    pub(crate) fn position(&self) -> Vec2 {
        world_point(self.flight.current())
    }
}

/// A launch shown as a drag-free ball and a drag ball side by side.
pub(crate) struct Shot {
    pub(crate) params: LaunchParameters,
    pub(crate) ideal: Ball,
    pub(crate) dragged: Ball,
    pub(crate) failure: Option<SimError>,
    pub(crate) recorded: bool,
}

impl Shot {
    pub(crate) fn launch(params: LaunchParameters) -> Result<Self, SimError> {
        Ok(Self {
            params,
            ideal: Ball::launch(params, ForceModel::NoDrag)?,
            dragged: Ball::launch(params, ForceModel::for_launch(&params))?,
            failure: None,
            recorded: false,
        })
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.failure.is_some()
            || (self.ideal.flight.phase() == FlightPhase::Landed
                && self.dragged.flight.phase() == FlightPhase::Landed)
    }

    pub(crate) fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        let stepped = self.ideal.advance().and_then(|()| self.dragged.advance());
        if let Err(err) = stepped {
            tracing::warn!(angle_deg = self.params.angle_deg, %err, "shot abandoned");
            self.failure = Some(err);
        }
    }
}

/// Everything the window loop owns. Created once, shots come and go.
pub(crate) struct AppRuntime {
    pub(crate) controls: Controls,
    pub(crate) shots: Vec<Shot>,
    pub(crate) collector: SweepCollector,
    pub(crate) paused: bool,
    pub(crate) show_preview: bool,
    pub(crate) accumulator_s: f32,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            controls: Controls::new(),
            shots: Vec::new(),
            collector: SweepCollector::new(),
            paused: false,
            show_preview: true,
            accumulator_s: 0.0,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn launch(&mut self) {
        let params = self.controls.launch_parameters();
        match Shot::launch(params) {
            Ok(shot) => {
                if self.shots.len() >= MAX_SHOTS {
                    self.shots.remove(0);
                }
                self.shots.push(shot);
                self.paused = false;
                self.status_line = format!(
                    "Launched at {:.1} deg, {:.1} m/s",
                    params.angle_deg, params.speed_mps
                );
            }
            Err(err) => {
                self.status_line = format!("Launch rejected: {err}");
            }
        }
    }

    /// Drops every shot and the accumulated sweep.
    pub(crate) fn reset(&mut self) {
        self.shots.clear();
        self.collector.clear();
        self.paused = false;
        self.accumulator_s = 0.0;
        self.status_line = "Reset".to_string();
    }

    pub(crate) fn any_flying(&self) -> bool {
        self.shots.iter().any(|shot| !shot.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppRuntime, Shot};
    use crate::constants::MAX_SHOTS;

    #[test]
    fn shot_finishes_with_both_balls_on_the_ground() {
        let mut state = AppRuntime::new();
        let mut shot = Shot::launch(state.controls.launch_parameters()).expect("valid launch");
        for _ in 0..10_000 {
            shot.advance();
            if shot.is_finished() {
                break;
            }
        }

        assert!(shot.failure.is_none());
        let ideal = shot.ideal.flight.landed_range().expect("ideal landed");
        let dragged = shot.dragged.flight.landed_range().expect("drag landed");
        assert!(dragged < ideal);

        state.shots.push(shot);
        assert!(!state.any_flying());
    }

    #[test]
    fn keeps_a_bounded_number_of_shots() {
        let mut state = AppRuntime::new();
        for _ in 0..(MAX_SHOTS + 3) {
            state.launch();
        }
        assert_eq!(state.shots.len(), MAX_SHOTS);

        state.reset();
        assert!(state.shots.is_empty());
        assert!(state.collector.is_empty());
    }
}
