//! Distance metrics and matrices.
//!
//! Provides the [`DistanceMetric`] capability with haversine and planar
//! implementations, plus a dense distance matrix for index-based lookups.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{route_distance, DistanceMetric, Euclidean, Haversine, EARTH_RADIUS_KM};
