use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 440.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 120.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const STATUS_Y: f32 = 82.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

// One animation frame of simulated time per integration step.
pub const FRAME_STEP_S: f64 = 1.0 / 60.0;
pub const MAX_FRAME_CATCHUP_S: f32 = 0.10;
// Sweep points are re-solved at the batch step, not the animation step.
pub const SWEEP_TIME_STEP_S: f64 = 0.002;
pub const TRAIL_CAPACITY: usize = 360;
pub const MAX_SHOTS: usize = 6;
pub const MIN_WORLD_SPAN_M: f64 = 20.0;

pub const SPEED_RANGE_MPS: (f32, f32) = (10.0, 60.0);
pub const ANGLE_RANGE_DEG: (f32, f32) = (5.0, 85.0);
pub const MASS_RANGE_KG: (f32, f32) = (0.1, 1.0);
pub const DRAG_K_RANGE: (f32, f32) = (0.0, 0.1);
pub const SIM_SPEED_RANGE: (f32, f32) = (0.25, 4.0);

pub const SWEEP_PANEL_W: f32 = 420.0;
pub const SWEEP_PANEL_H: f32 = 250.0;
pub const SWEEP_PANEL_INSET: f32 = 16.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const IDEAL_COLOR: Color = Color::new(0.30, 0.553, 0.96, 1.0);
pub const DRAG_COLOR: Color = Color::new(0.85, 0.22, 0.20, 1.0);
pub const PREVIEW_COLOR: Color = Color::new(0.30, 0.553, 0.96, 0.35);
