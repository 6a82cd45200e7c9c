use macroquad::prelude::*;
use parabolic_drag::SweepResult;
use parabolic_drag::core::window::AxisWindow;

use crate::constants::{
    DRAG_COLOR, GRID_COLOR, IDEAL_COLOR, LABEL_COLOR, STATUS_Y, SWEEP_PANEL_H, SWEEP_PANEL_INSET,
    SWEEP_PANEL_W, TITLE_Y, X_GRID_LINES, Y_GRID_LINES,
};
use crate::state::{AppRuntime, Ball};

/// Screen rectangle of a plot and the world extents it maps onto.
#[derive(Clone, Copy)]
pub(crate) struct Viewport {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl Viewport {
    pub(crate) fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (world.x / self.world_max_x.max(1.0)) * plot_w;
        let y = self.bottom - (world.y / self.world_max_y.max(1.0)) * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(view: &Viewport) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = view.left + t * (view.right - view.left);
        draw_line(x, view.top, x, view.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = view.bottom - t * (view.bottom - view.top);
        draw_line(view.left, y, view.right, y, 1.0, GRID_COLOR);
    }
    draw_line(view.left, view.bottom, view.right, view.bottom, 2.0, DARKGRAY);
    draw_line(view.left, view.top, view.left, view.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(view: &Viewport, font: Option<&Font>) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = view.left + t * (view.right - view.left);
        let label = format_axis_value(t * view.world_max_x, view.world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            view.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = view.bottom - t * (view.bottom - view.top);
        let label = format_axis_value(t * view.world_max_y, view.world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (view.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        view.right - 130.0,
        view.bottom + 48.0,
        18,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(
        "Height (m)",
        view.left + 10.0,
        view.top - 8.0,
        18,
        LABEL_COLOR,
        font,
    );
}

pub(crate) fn draw_path(
    view: &Viewport,
    points: impl IntoIterator<Item = Vec2>,
    thickness: f32,
    color: Color,
) {
    let mut points = points.into_iter().map(|p| view.world_to_screen(p));
    let Some(mut prev) = points.next() else {
        return;
    };
    for cur in points {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

fn draw_ball(view: &Viewport, ball: &Ball, color: Color) {
    draw_path(view, ball.trail.points(), 2.5, color);
    let p = view.world_to_screen(ball.position());
    draw_circle(p.x, p.y, 7.0, color);
    draw_circle_lines(p.x, p.y, 7.0, 2.0, DARKGRAY);
}

pub(crate) fn draw_shots(view: &Viewport, state: &AppRuntime) {
    for shot in &state.shots {
        draw_ball(view, &shot.ideal, IDEAL_COLOR);
        draw_ball(view, &shot.dragged, DRAG_COLOR);
    }
}

fn sweep_points(curve: &SweepResult) -> impl Iterator<Item = Vec2> + '_ {
    curve
        .points()
        .map(|(angle, range)| vec2(angle as f32, range as f32))
}

/// Inset chart of every recorded (angle, range) pair, drawn in the plot's
/// upper-right corner.
pub(crate) fn draw_sweep_panel(plot: &Viewport, state: &AppRuntime, font: Option<&Font>) {
    let x = plot.right - SWEEP_PANEL_W - SWEEP_PANEL_INSET;
    let y = plot.top + SWEEP_PANEL_INSET;
    draw_rectangle(x, y, SWEEP_PANEL_W, SWEEP_PANEL_H, WHITE);
    draw_rectangle_lines(x, y, SWEEP_PANEL_W, SWEEP_PANEL_H, 1.5, DARKGRAY);
    draw_ui_text("Range vs angle", x + 12.0, y + 24.0, 18, BLACK, font);

    let ideal = state.collector.ideal();
    let dragged = state.collector.dragged();
    let (_, range_max) = AxisWindow::padded(90.0, ideal.max_range_m().max(dragged.max_range_m()))
        .to_f32();
    let panel = Viewport {
        left: x + 48.0,
        right: x + SWEEP_PANEL_W - 14.0,
        top: y + 36.0,
        bottom: y + SWEEP_PANEL_H - 30.0,
        world_max_x: 90.0,
        world_max_y: range_max,
    };

    draw_line(panel.left, panel.bottom, panel.right, panel.bottom, 1.0, DARKGRAY);
    draw_line(panel.left, panel.top, panel.left, panel.bottom, 1.0, DARKGRAY);
    for angle in [0.0f32, 45.0, 90.0] {
        let p = panel.world_to_screen(vec2(angle, 0.0));
        draw_ui_text(&format!("{angle:.0}"), p.x - 8.0, p.y + 18.0, 14, LABEL_COLOR, font);
    }
    draw_ui_text(
        &format_axis_value(range_max, range_max),
        x + 6.0,
        panel.top + 10.0,
        14,
        LABEL_COLOR,
        font,
    );

    if ideal.is_empty() {
        draw_ui_text(
            "Launch to add points",
            panel.left + 12.0,
            panel.bottom - 12.0,
            16,
            LABEL_COLOR,
            font,
        );
        return;
    }

    for (curve, color) in [(ideal, IDEAL_COLOR), (dragged, DRAG_COLOR)] {
        draw_path(&panel, sweep_points(curve), 2.0, color);
        for point in sweep_points(curve) {
            let p = panel.world_to_screen(point);
            draw_circle(p.x, p.y, 3.0, color);
        }
    }
}

pub(crate) fn draw_hud(state: &AppRuntime, plot: &Viewport, font: Option<&Font>) {
    draw_ui_text(
        "ParabolicDrag - Ideal vs Quadratic Drag",
        plot.left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    let paused = if state.paused { " | PAUSED" } else { "" };
    draw_ui_text(
        &format!("{}{paused}", state.status_line),
        plot.left,
        STATUS_Y,
        20,
        DARKGRAY,
        font,
    );

    let legend_y = plot.bottom + 80.0;
    draw_circle(plot.left + 8.0, legend_y - 6.0, 6.0, IDEAL_COLOR);
    draw_ui_text("No drag", plot.left + 20.0, legend_y, 18, DARKGRAY, font);
    draw_circle(plot.left + 128.0, legend_y - 6.0, 6.0, DRAG_COLOR);
    draw_ui_text(
        "Quadratic drag (RK4)",
        plot.left + 140.0,
        legend_y,
        18,
        DARKGRAY,
        font,
    );
}

#[cfg(test)]
mod tests {
    use macroquad::prelude::vec2;

    use super::{Viewport, format_axis_value};

    #[test]
    fn maps_world_origin_to_bottom_left() {
        let view = Viewport {
            left: 100.0,
            right: 500.0,
            top: 50.0,
            bottom: 250.0,
            world_max_x: 200.0,
            world_max_y: 100.0,
        };

        assert_eq!(view.world_to_screen(vec2(0.0, 0.0)), vec2(100.0, 250.0));
        assert_eq!(view.world_to_screen(vec2(200.0, 100.0)), vec2(500.0, 50.0));
        assert_eq!(view.world_to_screen(vec2(100.0, 50.0)), vec2(300.0, 150.0));
    }

    #[test]
    fn axis_labels_lose_decimals_on_large_spans() {
        assert_eq!(format_axis_value(12.347, 50.0), "12.35");
        assert_eq!(format_axis_value(123.46, 500.0), "123.5");
        assert_eq!(format_axis_value(1234.4, 5000.0), "1234");
    }
}
