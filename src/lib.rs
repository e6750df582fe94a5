//! # u-fleet
//!
//! Fleet route planning over geographic points: splits delivery locations
//! into one workload per vehicle and builds a short closed depot tour for
//! each.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, FleetPlan)
//! - [`distance`] — Distance metrics (haversine, planar) and distance matrix
//! - [`clustering`] — K-means partitioning of customers per vehicle
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt tour refinement
//! - [`planner`] — Fleet planner tying the pipeline together
//! - [`error`] — Error types

pub mod clustering;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod planner;

pub use error::{RoutingError, RoutingResult};
