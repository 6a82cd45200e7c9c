//! Projectile range with and without quadratic air resistance.
//!
//! The [`core`] module holds the physics: force models, the closed-form
//! drag-free solver, Euler/RK4 stepping with ground-crossing interpolation,
//! and the launch-angle sweep. [`plot`] renders results to PNG.

pub mod core;
pub mod plot;

pub use crate::core::analytic::{flight_time_and_range, solve_no_drag};
pub use crate::core::error::{Result, SimError};
pub use crate::core::integrator::{Flight, FlightPhase, Scheme, solve_drag};
pub use crate::core::params::LaunchParameters;
pub use crate::core::sweep::{SweepCollector, SweepConfig, SweepResult, sweep_angles};
pub use crate::core::trajectory::{KinematicState, Trajectory};
