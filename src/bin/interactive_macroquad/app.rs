use macroquad::prelude::*;
use parabolic_drag::core::window::{AxisWindow, DISTANCE_TO_HEIGHT_RATIO};
use parabolic_drag::{Trajectory, solve_no_drag};
use tracing_subscriber::EnvFilter;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MIN_WORLD_SPAN_M, MSAA_SAMPLES, PREVIEW_COLOR, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, step_shots};
use crate::render::{
    Viewport, draw_axis_tick_labels, draw_grid, draw_hud, draw_path, draw_shots,
    draw_sweep_panel,
};
use crate::state::{AppRuntime, world_point};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "ParabolicDrag Interactive".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// World extents covering the preview and every shot still on screen.
fn compute_world_window(state: &AppRuntime, preview: Option<&Trajectory>) -> (f32, f32) {
    let mut raw_max_x = MIN_WORLD_SPAN_M;
    let mut raw_max_y = MIN_WORLD_SPAN_M / DISTANCE_TO_HEIGHT_RATIO;

    if let Some(preview) = preview {
        raw_max_x = raw_max_x.max(preview.range_m());
        raw_max_y = raw_max_y.max(preview.apex_m());
    }

    for shot in &state.shots {
        for ball in [&shot.ideal, &shot.dragged] {
            for sample in ball.flight.samples() {
                raw_max_x = raw_max_x.max(sample.x);
                raw_max_y = raw_max_y.max(sample.y);
            }
        }
    }

    AxisWindow::fixed_ratio(raw_max_x, raw_max_y, DISTANCE_TO_HEIGHT_RATIO).to_f32()
}

pub(crate) async fn run() {
    init_tracing();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_shots(&mut state, frame_dt);

        let preview = solve_no_drag(state.controls.launch_parameters()).ok();
        let (world_max_x, world_max_y) = compute_world_window(&state, preview.as_ref());
        let plot = Viewport {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
            world_max_x,
            world_max_y,
        };

        clear_background(BACKGROUND);
        draw_grid(&plot);
        draw_axis_tick_labels(&plot, ui_font.as_ref());

        if state.show_preview {
            if let Some(preview) = &preview {
                draw_path(
                    &plot,
                    preview.samples().iter().copied().map(world_point),
                    2.0,
                    PREVIEW_COLOR,
                );
            }
        }

        draw_shots(&plot, &state);
        draw_sweep_panel(&plot, &state, ui_font.as_ref());
        draw_hud(&state, &plot, ui_font.as_ref());

        next_frame().await;
    }
}
