use crate::core::params::LaunchParameters;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

/// Acceleration as a function of velocity alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ForceModel {
    NoDrag,
    /// F = -k |v| v, stored already divided by mass.
    QuadraticDrag { k_over_m: f64 },
}

impl ForceModel {
    pub fn quadratic(drag_k: f64, mass_kg: f64) -> Self {
        Self::QuadraticDrag {
            k_over_m: drag_k / mass_kg,
        }
    }

    /// Quadratic drag with the launch's k and mass. k = 0 behaves as [`ForceModel::NoDrag`].
    pub fn for_launch(params: &LaunchParameters) -> Self {
        Self::quadratic(params.drag_k, params.mass_kg)
    }

    pub fn acceleration(self, vx: f64, vy: f64) -> (f64, f64) {
        match self {
            Self::NoDrag => (0.0, -EARTH_GRAVITY_MPS2),
            Self::QuadraticDrag { k_over_m } => {
                let speed = vx.hypot(vy);
                (
                    -k_over_m * speed * vx,
                    -EARTH_GRAVITY_MPS2 - (k_over_m * speed * vy),
                )
            }
        }
    }
}
