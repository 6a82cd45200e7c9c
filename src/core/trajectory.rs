use std::fmt;

/// One recorded instant of a flight. SI units, y measured up from the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicState {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl KinematicState {
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Upper bound on the samples one solver call may produce.
pub const MAX_TRAJECTORY_SAMPLES: usize = 1 << 24;

/// Time-ordered samples from launch to ground impact.
///
/// The last sample is always the impact point with `y == 0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    samples: Vec<KinematicState>,
}

impl Trajectory {
    pub(crate) fn from_samples(samples: Vec<KinematicState>) -> Self {
        debug_assert!(!samples.is_empty(), "a trajectory holds at least one sample");
        Self { samples }
    }

    pub fn samples(&self) -> &[KinematicState] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn launch(&self) -> KinematicState {
        self.samples.first().copied().unwrap_or_default()
    }

    pub fn impact(&self) -> KinematicState {
        self.samples.last().copied().unwrap_or_default()
    }

    pub fn range_m(&self) -> f64 {
        self.impact().x
    }

    pub fn flight_time_s(&self) -> f64 {
        self.impact().t
    }

    pub fn apex_m(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, s| acc.max(s.y))
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(KinematicState::position)
    }

    pub fn summary(&self) -> TrajectorySummary {
        let impact = self.impact();
        TrajectorySummary {
            range_m: impact.x,
            flight_time_s: impact.t,
            apex_m: self.apex_m(),
            impact_speed_mps: impact.speed(),
            samples: self.samples.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySummary {
    pub range_m: f64,
    pub flight_time_s: f64,
    pub apex_m: f64,
    pub impact_speed_mps: f64,
    pub samples: usize,
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "range {:.4} m | flight {:.4} s | apex {:.3} m | impact {:.3} m/s | {} samples",
            self.range_m, self.flight_time_s, self.apex_m, self.impact_speed_mps, self.samples
        )
    }
}
