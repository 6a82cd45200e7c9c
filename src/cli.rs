use std::path::PathBuf;

use clap::Parser;
use parabolic_drag::core::params::{
    DEFAULT_ANGLE_DEG, DEFAULT_DRAG_K, DEFAULT_MASS_KG, DEFAULT_SPEED_MPS, DEFAULT_TIME_STEP_S,
};
use parabolic_drag::core::sweep::{DEFAULT_ANGLE_COUNT, DEFAULT_ANGLE_MAX_DEG, DEFAULT_ANGLE_MIN_DEG};
use parabolic_drag::{LaunchParameters, SweepConfig};

/// Compare a drag-free launch with one under quadratic air resistance.
#[derive(Parser, Debug)]
#[command(name = "parabolic_drag", version, about)]
pub(crate) struct Cli {
    /// Launch speed (m/s)
    #[arg(long, default_value_t = DEFAULT_SPEED_MPS, allow_negative_numbers = true)]
    pub(crate) speed: f64,

    /// Launch angle above the horizontal (degrees)
    #[arg(long, default_value_t = DEFAULT_ANGLE_DEG, allow_negative_numbers = true)]
    pub(crate) angle: f64,

    /// Projectile mass (kg)
    #[arg(long, default_value_t = DEFAULT_MASS_KG, allow_negative_numbers = true)]
    pub(crate) mass: f64,

    /// Lumped drag parameter k = 0.5 * rho * Cd * A (kg/m)
    #[arg(long = "drag-k", default_value_t = DEFAULT_DRAG_K, allow_negative_numbers = true)]
    pub(crate) drag_k: f64,

    /// Integration time step (s)
    #[arg(long, default_value_t = DEFAULT_TIME_STEP_S, allow_negative_numbers = true)]
    pub(crate) dt: f64,

    /// Launch height above the ground (m)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) height: f64,

    /// First angle of the range sweep (degrees)
    #[arg(long = "angle-min", default_value_t = DEFAULT_ANGLE_MIN_DEG)]
    pub(crate) angle_min: f64,

    /// Last angle of the range sweep (degrees)
    #[arg(long = "angle-max", default_value_t = DEFAULT_ANGLE_MAX_DEG)]
    pub(crate) angle_max: f64,

    /// Number of evenly spaced sweep angles
    #[arg(long = "angle-count", default_value_t = DEFAULT_ANGLE_COUNT)]
    pub(crate) angle_count: usize,

    /// Directory that receives a timestamped run folder of charts
    #[arg(long = "out-dir", env = "PARABOLIC_DRAG_OUT", default_value = "plots")]
    pub(crate) out_dir: PathBuf,

    /// Skip writing PNG charts
    #[arg(long = "no-plots")]
    pub(crate) no_plots: bool,

    /// Spread the sweep across threads
    #[arg(long)]
    pub(crate) parallel: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cli {
    pub(crate) fn launch_parameters(&self) -> LaunchParameters {
        LaunchParameters {
            speed_mps: self.speed,
            angle_deg: self.angle,
            mass_kg: self.mass,
            drag_k: self.drag_k,
            time_step_s: self.dt,
            height_m: self.height,
        }
    }

    pub(crate) fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            angle_min_deg: self.angle_min,
            angle_max_deg: self.angle_max,
            count: self.angle_count,
        }
    }

    pub(crate) fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use parabolic_drag::{LaunchParameters, SweepConfig};

    #[test]
    fn defaults_match_library_defaults() {
        let cli = Cli::try_parse_from(["parabolic_drag"]).expect("defaults should parse");

        assert_eq!(cli.launch_parameters(), LaunchParameters::default());
        assert_eq!(cli.sweep_config(), SweepConfig::default());
        assert!(!cli.no_plots);
        assert_eq!(cli.log_filter(), "info");
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "parabolic_drag",
            "--speed",
            "30",
            "--angle",
            "45",
            "--drag-k",
            "0",
            "--angle-count",
            "8",
            "--no-plots",
            "-vv",
        ])
        .expect("arguments should parse");

        let params = cli.launch_parameters();
        assert_eq!(params.speed_mps, 30.0);
        assert_eq!(params.angle_deg, 45.0);
        assert_eq!(params.drag_k, 0.0);
        assert_eq!(cli.sweep_config().count, 8);
        assert!(cli.no_plots);
        assert_eq!(cli.log_filter(), "trace");
    }
}
