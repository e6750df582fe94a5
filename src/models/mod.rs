//! Domain model types for fleet planning.
//!
//! Geographic points, closed per-vehicle tours, and the fleet plan that
//! aggregates them.

mod plan;
mod point;
mod tour;

pub use plan::FleetPlan;
pub use point::Point;
pub use tour::Tour;
