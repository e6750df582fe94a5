//! Nearest-neighbor tour construction.
//!
//! Builds a closed tour greedily: starting from the depot, always move to the
//! nearest unvisited customer, then return to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers (one linear scan per step).
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours are typically
//! 15-25% above optimal, which makes it a fast seed for local search.

use crate::distance::{DistanceMatrix, DistanceMetric};
use crate::error::{RoutingError, RoutingResult};
use crate::models::{Point, Tour};

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// `stops[0]` is the depot; the rest are customers. Ties between equally
/// near customers go to the one listed first. The returned tour belongs to
/// vehicle 0; use [`Tour::with_vehicle_id`] to reassign it.
///
/// # Errors
///
/// [`RoutingError::InvalidInput`] if `stops` is empty.
///
/// # Examples
///
/// ```
/// use u_fleet::constructive::nearest_neighbor_tour;
/// use u_fleet::distance::Euclidean;
/// use u_fleet::models::Point;
///
/// let stops = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let tour = nearest_neighbor_tour(&stops, &Euclidean).unwrap();
/// assert_eq!(
///     tour.customers(),
///     &[Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)]
/// );
/// assert!((tour.total_distance() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_tour<M: DistanceMetric + ?Sized>(
    stops: &[Point],
    metric: &M,
) -> RoutingResult<Tour> {
    let Some(&depot) = stops.first() else {
        return Err(RoutingError::InvalidInput(
            "tour construction needs at least the depot".into(),
        ));
    };

    let distances = DistanceMatrix::from_points(stops, metric);
    let mut unvisited: Vec<usize> = (1..stops.len()).collect();
    let mut order = Vec::with_capacity(stops.len() + 1);
    order.push(depot);

    let mut current = 0;
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        // `nearest_neighbor` only returns members of `unvisited`
        if let Some(pos) = unvisited.iter().position(|&c| c == next) {
            unvisited.remove(pos);
        }
        order.push(stops[next]);
        current = next;
    }

    order.push(depot);
    Ok(Tour::from_closed(0, order, metric))
}
