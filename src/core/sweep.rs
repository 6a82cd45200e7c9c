//! Range-versus-angle curves for the drag-free and drag-affected models.

use rayon::prelude::*;

use crate::core::analytic::flight_time_and_range;
use crate::core::error::{Result, SimError};
use crate::core::integrator::{Scheme, solve_drag};
use crate::core::params::LaunchParameters;

pub const DEFAULT_ANGLE_MIN_DEG: f64 = 10.0;
pub const DEFAULT_ANGLE_MAX_DEG: f64 = 80.0;
pub const DEFAULT_ANGLE_COUNT: usize = 71;

/// Evenly spaced launch angles, both ends included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub angle_min_deg: f64,
    pub angle_max_deg: f64,
    pub count: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            angle_min_deg: DEFAULT_ANGLE_MIN_DEG,
            angle_max_deg: DEFAULT_ANGLE_MAX_DEG,
            count: DEFAULT_ANGLE_COUNT,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("angle_min_deg", self.angle_min_deg),
            ("angle_max_deg", self.angle_max_deg),
        ] {
            if !(0.0..=90.0).contains(&value) {
                return Err(SimError::invalid(
                    name,
                    value,
                    "sweep angles must lie in [0, 90] degrees",
                ));
            }
        }
        if self.count == 0 {
            return Err(SimError::invalid(
                "count",
                0.0,
                "sweep needs at least one angle",
            ));
        }
        if self.count > 1 && self.angle_min_deg >= self.angle_max_deg {
            return Err(SimError::invalid(
                "angle_max_deg",
                self.angle_max_deg,
                "must exceed angle_min_deg when sweeping more than one angle",
            ));
        }
        Ok(())
    }

    pub fn angles(&self) -> impl Iterator<Item = f64> + use<> {
        let Self {
            angle_min_deg: min,
            angle_max_deg: max,
            count,
        } = *self;
        let last = count.saturating_sub(1);
        (0..count).map(move |i| {
            if i == 0 {
                min
            } else if i == last {
                max
            } else {
                min + (max - min) * i as f64 / last as f64
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSample {
    pub angle_deg: f64,
    pub range_m: f64,
}

/// (angle, range) pairs kept strictly ascending by angle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepResult {
    samples: Vec<RangeSample>,
}

impl SweepResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts by angle; a repeated angle keeps the last range given for it.
    pub fn from_unordered(samples: impl IntoIterator<Item = RangeSample>) -> Self {
        let mut result = Self::new();
        for sample in samples {
            result.insert(sample);
        }
        result
    }

    /// Inserts in angle order, replacing the range of an angle already present.
    pub fn insert(&mut self, sample: RangeSample) {
        match self
            .samples
            .binary_search_by(|s| s.angle_deg.total_cmp(&sample.angle_deg))
        {
            Ok(idx) => self.samples[idx] = sample,
            Err(idx) => self.samples.insert(idx, sample),
        }
    }

    pub fn samples(&self) -> &[RangeSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn range_at(&self, angle_deg: f64) -> Option<f64> {
        self.samples
            .binary_search_by(|s| s.angle_deg.total_cmp(&angle_deg))
            .ok()
            .map(|idx| self.samples[idx].range_m)
    }

    /// Sample with the longest range.
    pub fn best(&self) -> Option<RangeSample> {
        self.samples
            .iter()
            .copied()
            .max_by(|a, b| a.range_m.total_cmp(&b.range_m))
    }

    pub fn max_range_m(&self) -> f64 {
        self.best().map_or(0.0, |s| s.range_m)
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.angle_deg, s.range_m))
    }
}

/// Ranges for one angle: drag-free (analytic) and RK4 drag.
///
/// A drag flight that never lands yields `None` instead of an error.
fn sweep_point(
    params: LaunchParameters,
    angle_deg: f64,
) -> Result<(RangeSample, Option<RangeSample>)> {
    let launch = params.with_angle(angle_deg);
    let (_, ideal_range) = flight_time_and_range(launch)?;
    let ideal = RangeSample {
        angle_deg,
        range_m: ideal_range,
    };

    let dragged = match solve_drag(launch, Scheme::Rk4) {
        Ok(trajectory) => Some(RangeSample {
            angle_deg,
            range_m: trajectory.range_m(),
        }),
        Err(err @ SimError::NoLanding { .. }) => {
            tracing::warn!(angle_deg, %err, "excluding angle from drag sweep");
            None
        }
        Err(err) => return Err(err),
    };

    Ok((ideal, dragged))
}

fn collect_points(points: Vec<(RangeSample, Option<RangeSample>)>) -> (SweepResult, SweepResult) {
    let mut ideal = SweepResult::new();
    let mut dragged = SweepResult::new();
    for (ideal_sample, drag_sample) in points {
        ideal.insert(ideal_sample);
        if let Some(sample) = drag_sample {
            dragged.insert(sample);
        }
    }
    (ideal, dragged)
}

/// Sweeps `config`'s angles, returning (drag-free, drag) curves.
pub fn sweep_angles(
    params: LaunchParameters,
    config: SweepConfig,
) -> Result<(SweepResult, SweepResult)> {
    params.validate()?;
    config.validate()?;

    let points = config
        .angles()
        .map(|angle| sweep_point(params, angle))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        angles = config.count,
        angle_min_deg = config.angle_min_deg,
        angle_max_deg = config.angle_max_deg,
        "angle sweep finished"
    );
    Ok(collect_points(points))
}

/// Same contract as [`sweep_angles`], one rayon task per angle.
pub fn sweep_angles_parallel(
    params: LaunchParameters,
    config: SweepConfig,
) -> Result<(SweepResult, SweepResult)> {
    params.validate()?;
    config.validate()?;

    let angles: Vec<f64> = config.angles().collect();
    let points = angles
        .into_par_iter()
        .map(|angle| sweep_point(params, angle))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        angles = config.count,
        threads = rayon::current_num_threads(),
        "parallel angle sweep finished"
    );
    Ok(collect_points(points))
}

/// Accumulates one launch at a time, in whatever order launches happen.
#[derive(Clone, Debug, Default)]
pub struct SweepCollector {
    ideal: SweepResult,
    dragged: SweepResult,
}

impl SweepCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records ranges already measured by the caller's own flights.
    pub fn record(&mut self, angle_deg: f64, ideal_range_m: f64, drag_range_m: Option<f64>) {
        self.ideal.insert(RangeSample {
            angle_deg,
            range_m: ideal_range_m,
        });
        if let Some(range_m) = drag_range_m {
            self.dragged.insert(RangeSample { angle_deg, range_m });
        }
    }

    /// Solves both models for `params` and records them.
    pub fn record_launch(&mut self, params: LaunchParameters) -> Result<()> {
        let (ideal, dragged) = sweep_point(params, params.angle_deg)?;
        self.record(ideal.angle_deg, ideal.range_m, dragged.map(|s| s.range_m));
        Ok(())
    }

    pub fn ideal(&self) -> &SweepResult {
        &self.ideal
    }

    pub fn dragged(&self) -> &SweepResult {
        &self.dragged
    }

    pub fn is_empty(&self) -> bool {
        self.ideal.is_empty() && self.dragged.is_empty()
    }

    pub fn clear(&mut self) {
        self.ideal.clear();
        self.dragged.clear();
    }
}
