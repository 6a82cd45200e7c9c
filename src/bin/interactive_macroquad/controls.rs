use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ANGLE_RANGE_DEG, DRAG_K_RANGE, MASS_RANGE_KG, SIM_SPEED_RANGE, SPEED_RANGE_MPS,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) pause: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            pause: self.pause || other.pause,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        pause: is_key_pressed(KeyCode::P),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let k_over_m = state.controls.drag_k / state.controls.mass_kg.max(f32::EPSILON);

    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(390.0, 330.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_RANGE_DEG.0..ANGLE_RANGE_DEG.1,
                &mut state.controls.angle_deg,
            );
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                SPEED_RANGE_MPS.0..SPEED_RANGE_MPS.1,
                &mut state.controls.speed_mps,
            );
            ui.slider(
                hash!(),
                "Mass (kg)",
                MASS_RANGE_KG.0..MASS_RANGE_KG.1,
                &mut state.controls.mass_kg,
            );
            ui.slider(
                hash!(),
                "Drag k (kg/m)",
                DRAG_K_RANGE.0..DRAG_K_RANGE.1,
                &mut state.controls.drag_k,
            );
            ui.slider(
                hash!(),
                "Simulation Speed",
                SIM_SPEED_RANGE.0..SIM_SPEED_RANGE.1,
                &mut state.controls.sim_speed,
            );
            ui.label(None, &format!("k/m = {k_over_m:.3} 1/m | g = 9.81 m/s^2"));
            ui.separator();
            if ui.button(None, "Launch (Space)") {
                actions.launch = true;
            }
            if ui.button(None, "Pause / Resume (P)") {
                actions.pause = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Toggle Preview") {
                state.show_preview = !state.show_preview;
            }
            ui.label(
                None,
                &format!(
                    "Sweep points: {} | shots on screen: {}",
                    state.collector.ideal().len(),
                    state.shots.len()
                ),
            );
        });

    actions
}
