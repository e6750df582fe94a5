//! Fleet-level orchestration.
//!
//! - [`FleetPlanner`] — k-means partition, then nearest-neighbor + 2-opt per vehicle
//! - [`PlannerConfig`] — iteration caps, seeding, and parallelism

mod config;
mod fleet;

pub use config::PlannerConfig;
pub use fleet::FleetPlanner;
