use thiserror::Error;

/// Failures raised by the solvers and the sweep driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A launch or sweep input was rejected before any stepping began.
    #[error("invalid {name} ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The projectile was still airborne when the simulated-time bound ran out.
    #[error("no ground impact within {max_time_s} s of simulated flight")]
    NoLanding { max_time_s: f64 },

    /// The last two samples cannot bracket a ground crossing.
    #[error("cannot interpolate ground crossing between y = {y_prev} and y = {y_over}")]
    DegenerateInterpolation { y_prev: f64, y_over: f64 },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// A specialized [`Result`] type for simulation calls.
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown integration scheme: {0:?} (expected \"euler\" or \"rk4\")")]
pub struct ParseSchemeError(pub String);
