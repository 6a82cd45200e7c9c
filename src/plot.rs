//! Static PNG charts: trajectory comparison and range versus launch angle.

use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::core::sweep::SweepResult;
use crate::core::trajectory::Trajectory;
use crate::core::window::AxisWindow;

pub const CHART_SIZE: (u32, u32) = (1280, 720);
pub const TRAJECTORY_FILE: &str = "trajectories.png";
pub const SWEEP_FILE: &str = "range_vs_angle.png";

pub const IDEAL_COLOR: RGBColor = RGBColor(76, 141, 245);
pub const EULER_COLOR: RGBColor = RGBColor(242, 159, 5);
pub const RK4_COLOR: RGBColor = RGBColor(200, 40, 40);

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("nothing to plot: {0}")]
    Empty(&'static str),

    #[error("drawing failed: {0}")]
    Draw(String),
}

fn draw_err(err: impl Display) -> PlotError {
    PlotError::Draw(err.to_string())
}

/// One labelled line on a trajectory chart.
pub struct TrajectorySeries<'a> {
    pub label: String,
    pub trajectory: &'a Trajectory,
    pub color: RGBColor,
}

/// Height against distance for every series, sharing a fixed-ratio window.
pub fn draw_trajectories(
    path: &Path,
    title: &str,
    series: &[TrajectorySeries<'_>],
) -> Result<(), PlotError> {
    if series.is_empty() {
        return Err(PlotError::Empty("no trajectories"));
    }
    let window = AxisWindow::covering(series.iter().map(|s| s.trajectory));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..window.x_max, 0.0..window.y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(draw_err)?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(s.trajectory.points(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(format!("{} ({:.2} m)", s.label, s.trajectory.range_m()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    tracing::info!(path = %path.display(), "wrote trajectory chart");
    Ok(())
}

/// Range against launch angle for the drag-free and drag curves.
pub fn draw_range_sweep(
    path: &Path,
    ideal: &SweepResult,
    dragged: &SweepResult,
) -> Result<(), PlotError> {
    let (Some(first), Some(last)) = (ideal.samples().first(), ideal.samples().last()) else {
        return Err(PlotError::Empty("empty angle sweep"));
    };
    let angle_min = dragged
        .samples()
        .first()
        .map_or(first.angle_deg, |s| s.angle_deg.min(first.angle_deg));
    let angle_max = dragged
        .samples()
        .last()
        .map_or(last.angle_deg, |s| s.angle_deg.max(last.angle_deg));
    let window = AxisWindow::padded(angle_max, ideal.max_range_m().max(dragged.max_range_m()));
    let angle_span = if angle_max > angle_min {
        angle_min..angle_max
    } else {
        (angle_min - 1.0)..(angle_max + 1.0)
    };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Range vs launch angle", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(angle_span, 0.0..window.y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Launch angle (deg)")
        .y_desc("Range (m)")
        .draw()
        .map_err(draw_err)?;

    for (label, curve, color) in [
        ("No drag", ideal, IDEAL_COLOR),
        ("Quadratic drag (RK4)", dragged, RK4_COLOR),
    ] {
        chart
            .draw_series(LineSeries::new(curve.points(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        if let Some(best) = curve.best() {
            chart
                .draw_series(std::iter::once(Circle::new(
                    (best.angle_deg, best.range_m),
                    5,
                    color.filled(),
                )))
                .map_err(draw_err)?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    tracing::info!(path = %path.display(), "wrote range sweep chart");
    Ok(())
}
