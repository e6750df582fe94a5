//! Closed vehicle tour type.

use serde::Serialize;

use super::Point;
use crate::distance::{route_distance, DistanceMetric};
use crate::error::{RoutingError, RoutingResult};

/// An ordered, closed sequence of points driven by a single vehicle.
///
/// The first and last stops are the depot; every stop in between is a
/// customer visited exactly once.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::Euclidean;
/// use u_fleet::models::{Point, Tour};
///
/// let depot = Point::new(0.0, 0.0);
/// let tour = Tour::new(0, vec![depot, Point::new(3.0, 4.0), depot], &Euclidean).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.customers(), &[Point::new(3.0, 4.0)]);
/// assert!((tour.total_distance() - 10.0).abs() < 1e-10);
/// ```
///
/// Open sequences are rejected, and tours only serialize:
///
/// ```compile_fail
/// use u_fleet::models::Tour;
///
/// let _: Tour = serde_json::from_str(r#"{"vehicle_id":0,"stops":[],"total_distance":0.0}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    vehicle_id: usize,
    stops: Vec<Point>,
    total_distance: f64,
}

impl Tour {
    /// Creates a tour from its full stop sequence, computing its distance.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInput`] if there are fewer than two stops or
    /// the sequence does not end where it starts.
    pub fn new<M: DistanceMetric + ?Sized>(
        vehicle_id: usize,
        stops: Vec<Point>,
        metric: &M,
    ) -> RoutingResult<Self> {
        match (stops.first(), stops.last()) {
            (Some(first), Some(last)) if stops.len() >= 2 && first == last => {
                Ok(Self::from_closed(vehicle_id, stops, metric))
            }
            (Some(first), Some(last)) if stops.len() >= 2 => {
                Err(RoutingError::InvalidInput(format!(
                    "tour must end at its depot ({}, {}), found ({}, {})",
                    first.lat(),
                    first.lon(),
                    last.lat(),
                    last.lon()
                )))
            }
            _ => Err(RoutingError::InvalidInput(
                "tour needs the depot at both ends".into(),
            )),
        }
    }

    /// Builds a tour the caller already knows is closed.
    pub(crate) fn from_closed<M: DistanceMetric + ?Sized>(
        vehicle_id: usize,
        stops: Vec<Point>,
        metric: &M,
    ) -> Self {
        debug_assert!(stops.len() >= 2 && stops.first() == stops.last());
        let total_distance = route_distance(&stops, metric);
        Self {
            vehicle_id,
            stops,
            total_distance,
        }
    }

    /// Assigns the tour to a vehicle.
    pub fn with_vehicle_id(mut self, vehicle_id: usize) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    /// Vehicle index that drives this tour.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Full stop sequence, depot at both ends.
    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    /// Depot the tour starts and ends at.
    ///
    /// # Panics
    ///
    /// Panics if the tour has no stops.
    pub fn depot(&self) -> Point {
        self.stops[0]
    }

    /// Customer stops in visiting order (depot excluded).
    pub fn customers(&self) -> &[Point] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of stops including both depot visits.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the tour has no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of consecutive edge distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Consumes the tour, returning its stop buffer.
    pub fn into_stops(self) -> Vec<Point> {
        self.stops
    }
}
