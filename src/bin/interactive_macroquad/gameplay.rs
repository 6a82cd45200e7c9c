use crate::constants::{FRAME_STEP_S, MAX_FRAME_CATCHUP_S, SWEEP_TIME_STEP_S};
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.reset();
        return;
    }

    if actions.launch {
        state.launch();
    }

    if actions.pause && state.any_flying() {
        state.paused = !state.paused;
        state.status_line = if state.paused {
            "Paused".to_string()
        } else {
            "Resumed".to_string()
        };
    }
}

/// Runs as many fixed integration steps as the frame time (scaled by the
/// speed slider) allows, then records newly finished shots.
pub(crate) fn step_shots(state: &mut AppRuntime, frame_dt: f32) {
    if state.paused {
        return;
    }

    let step_s = FRAME_STEP_S as f32;
    state.accumulator_s =
        (state.accumulator_s + frame_dt * state.controls.sim_speed).min(MAX_FRAME_CATCHUP_S);
    while state.accumulator_s >= step_s {
        state.accumulator_s -= step_s;
        for shot in &mut state.shots {
            shot.advance();
        }
    }

    record_finished_shots(state);
}

fn record_finished_shots(state: &mut AppRuntime) {
    for shot in state
        .shots
        .iter_mut()
        .filter(|shot| !shot.recorded && shot.is_finished())
    {
        shot.recorded = true;
        if let Some(err) = &shot.failure {
            state.status_line = format!("Shot at {:.1} deg abandoned: {err}", shot.params.angle_deg);
            continue;
        }

        let sweep_params = shot.params.with_time_step(SWEEP_TIME_STEP_S);
        if let Err(err) = state.collector.record_launch(sweep_params) {
            state.status_line = format!("Could not record sweep point: {err}");
            continue;
        }

        state.status_line = format!(
            "Landed at {:.1} deg: no drag {:.2} m | drag {:.2} m",
            shot.params.angle_deg,
            shot.ideal.flight.landed_range().unwrap_or_default(),
            shot.dragged.flight.landed_range().unwrap_or_default()
        );
    }
}
