pub mod analytic;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod sweep;
pub mod trajectory;
pub mod window;
