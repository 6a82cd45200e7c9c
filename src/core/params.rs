use crate::core::error::{Result, SimError};
use crate::core::trajectory::KinematicState;

pub const DEFAULT_SPEED_MPS: f64 = 40.0;
pub const DEFAULT_ANGLE_DEG: f64 = 35.0;
pub const DEFAULT_MASS_KG: f64 = 0.2;
pub const DEFAULT_DRAG_K: f64 = 0.06; // kg/m, 0.5 * rho * Cd * A
pub const DEFAULT_TIME_STEP_S: f64 = 0.002;

/// Everything a single launch needs. Passed by value into every solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub mass_kg: f64,
    pub drag_k: f64,
    pub time_step_s: f64,
    pub height_m: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            angle_deg: DEFAULT_ANGLE_DEG,
            mass_kg: DEFAULT_MASS_KG,
            drag_k: DEFAULT_DRAG_K,
            time_step_s: DEFAULT_TIME_STEP_S,
            height_m: 0.0,
        }
    }
}

impl LaunchParameters {
    #[must_use]
    pub fn with_speed(self, speed_mps: f64) -> Self {
        Self { speed_mps, ..self }
    }

    #[must_use]
    pub fn with_angle(self, angle_deg: f64) -> Self {
        Self { angle_deg, ..self }
    }

    #[must_use]
    pub fn with_mass(self, mass_kg: f64) -> Self {
        Self { mass_kg, ..self }
    }

    #[must_use]
    pub fn with_drag(self, drag_k: f64) -> Self {
        Self { drag_k, ..self }
    }

    #[must_use]
    pub fn with_time_step(self, time_step_s: f64) -> Self {
        Self {
            time_step_s,
            ..self
        }
    }

    #[must_use]
    pub fn with_height(self, height_m: f64) -> Self {
        Self { height_m, ..self }
    }

    /// Rejects inputs no solver should step with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("speed_mps", self.speed_mps),
            ("angle_deg", self.angle_deg),
            ("mass_kg", self.mass_kg),
            ("drag_k", self.drag_k),
            ("time_step_s", self.time_step_s),
            ("height_m", self.height_m),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid(name, value, "must be a finite number"));
            }
        }

        if self.speed_mps <= 0.0 {
            return Err(SimError::invalid(
                "speed_mps",
                self.speed_mps,
                "launch speed must be positive",
            ));
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(SimError::invalid(
                "angle_deg",
                self.angle_deg,
                "launch angle must lie in [0, 90] degrees",
            ));
        }
        if self.mass_kg <= 0.0 {
            return Err(SimError::invalid(
                "mass_kg",
                self.mass_kg,
                "mass must be positive",
            ));
        }
        if self.drag_k < 0.0 {
            return Err(SimError::invalid(
                "drag_k",
                self.drag_k,
                "drag coefficient cannot be negative",
            ));
        }
        if self.time_step_s <= 0.0 {
            return Err(SimError::invalid(
                "time_step_s",
                self.time_step_s,
                "time step must be positive",
            ));
        }
        if self.height_m < 0.0 {
            return Err(SimError::invalid(
                "height_m",
                self.height_m,
                "launch height cannot be below ground",
            ));
        }

        Ok(())
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let theta = self.angle_deg.to_radians();
        (self.speed_mps * theta.cos(), self.speed_mps * theta.sin())
    }

    /// The t = 0 sample every trajectory starts from.
    pub fn initial_state(&self) -> KinematicState {
        let (vx, vy) = self.velocity_components();
        KinematicState {
            t: 0.0,
            x: 0.0,
            y: self.height_m,
            vx,
            vy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LaunchParameters;
    use crate::core::error::SimError;

    fn rejected_field(params: LaunchParameters) -> &'static str {
        match params.validate() {
            Err(SimError::InvalidParameter { name, .. }) => name,
            other => panic!("expected a parameter error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        LaunchParameters::default()
            .validate()
            .expect("defaults should validate");
    }

    #[test]
    fn rejects_non_positive_speed() {
        let params = LaunchParameters::default();
        assert_eq!(rejected_field(params.with_speed(0.0)), "speed_mps");
        assert_eq!(rejected_field(params.with_speed(-3.0)), "speed_mps");
    }

    #[test]
    fn angle_bounds_are_inclusive() {
        let params = LaunchParameters::default();
        params.with_angle(0.0).validate().expect("0 deg is allowed");
        params.with_angle(90.0).validate().expect("90 deg is allowed");
        assert_eq!(rejected_field(params.with_angle(-0.5)), "angle_deg");
        assert_eq!(rejected_field(params.with_angle(90.5)), "angle_deg");
    }

    #[test]
    fn rejects_bad_mass_drag_step_and_height() {
        let params = LaunchParameters::default();
        assert_eq!(rejected_field(params.with_mass(-0.1)), "mass_kg");
        assert_eq!(rejected_field(params.with_drag(-0.01)), "drag_k");
        assert_eq!(rejected_field(params.with_time_step(0.0)), "time_step_s");
        assert_eq!(rejected_field(params.with_height(-1.0)), "height_m");
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let params = LaunchParameters::default();
        assert_eq!(rejected_field(params.with_speed(f64::NAN)), "speed_mps");
        assert_eq!(
            rejected_field(params.with_time_step(f64::INFINITY)),
            "time_step_s"
        );
    }

    #[test]
    fn initial_state_decomposes_launch_velocity() {
        let state = LaunchParameters::default()
            .with_angle(60.0)
            .with_speed(10.0)
            .with_height(2.5)
            .initial_state();

        assert_eq!(state.t, 0.0);
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 2.5);
        assert!((state.vx - 5.0).abs() < 1e-12);
        assert!((state.vy - 10.0 * 60f64.to_radians().sin()).abs() < 1e-12);
    }
}
