//! Distance metrics between geographic points.

use crate::models::Point;

/// Mean Earth radius in kilometres used by [`Haversine`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A symmetric, non-negative distance between two points.
///
/// Every algorithm in this crate receives its metric as a parameter, so
/// alternatives (planar, road network lookups) plug in without touching the
/// algorithms. Closures of the form `Fn(&Point, &Point) -> f64` implement
/// this trait directly.
///
/// Implementations must satisfy `distance(a, a) == 0` and
/// `distance(a, b) == distance(b, a)`.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::DistanceMetric;
/// use u_fleet::models::Point;
///
/// let manhattan = |a: &Point, b: &Point| (a.lat() - b.lat()).abs() + (a.lon() - b.lon()).abs();
/// let d = manhattan.distance(&Point::new(0.0, 0.0), &Point::new(1.0, 2.0));
/// assert_eq!(d, 3.0);
/// ```
pub trait DistanceMetric: Sync {
    /// Distance from `a` to `b`.
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

impl<F> DistanceMetric for F
where
    F: Fn(&Point, &Point) -> f64 + Sync,
{
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        self(a, b)
    }
}

/// Great-circle distance in kilometres on a sphere of radius
/// [`EARTH_RADIUS_KM`].
///
/// # Examples
///
/// ```
/// use u_fleet::distance::{DistanceMetric, Haversine};
/// use u_fleet::models::Point;
///
/// // One degree of latitude is roughly 111.19 km.
/// let d = Haversine.distance(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let lat1 = a.lat().to_radians();
        let lat2 = b.lat().to_radians();
        let dlat = lat2 - lat1;
        let dlon = (b.lon() - a.lon()).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Planar Euclidean distance in raw coordinate units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        a.squared_planar_distance(b).sqrt()
    }
}

/// Total length of a point sequence: the sum of its consecutive edges.
///
/// Returns 0 for sequences with fewer than two points. No closing edge is
/// added; closed tours already end where they start.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::{route_distance, Euclidean};
/// use u_fleet::models::Point;
///
/// let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 0.0)];
/// assert!((route_distance(&pts, &Euclidean) - 10.0).abs() < 1e-10);
/// ```
pub fn route_distance<M: DistanceMetric + ?Sized>(points: &[Point], metric: &M) -> f64 {
    points
        .windows(2)
        .map(|w| metric.distance(&w[0], &w[1]))
        .sum()
}
