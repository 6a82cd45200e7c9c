use crate::core::trajectory::Trajectory;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Upper bounds of a chart whose axes both start at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_max: f64,
    pub y_max: f64,
}

impl AxisWindow {
    /// Pads both spans, then widens one so that x:y equals `ratio`.
    pub fn fixed_ratio(raw_max_x: f64, raw_max_y: f64, ratio: f64) -> Self {
        let Self {
            x_max: mut x_span,
            y_max: mut y_span,
        } = Self::padded(raw_max_x, raw_max_y);

        if x_span / y_span < ratio {
            x_span = y_span * ratio;
        } else {
            y_span = x_span / ratio;
        }

        Self {
            x_max: x_span,
            y_max: y_span,
        }
    }

    /// Pads both spans independently, never below 1.
    pub fn padded(raw_max_x: f64, raw_max_y: f64) -> Self {
        let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
        let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;
        Self {
            x_max: (raw_max_x + x_pad).max(1.0),
            y_max: (raw_max_y + y_pad).max(1.0),
        }
    }

    /// Distance-vs-height window that fits every trajectory at [`DISTANCE_TO_HEIGHT_RATIO`].
    pub fn covering<'a>(trajectories: impl IntoIterator<Item = &'a Trajectory>) -> Self {
        let (raw_max_x, raw_max_y) = trajectories
            .into_iter()
            .flat_map(Trajectory::samples)
            .fold((0.0f64, 0.0f64), |(mx, my), s| (mx.max(s.x), my.max(s.y)));
        Self::fixed_ratio(raw_max_x, raw_max_y, DISTANCE_TO_HEIGHT_RATIO)
    }

    pub fn to_f32(self) -> (f32, f32) {
        (self.x_max as f32, self.y_max as f32)
    }
}
