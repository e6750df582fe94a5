//! Geographic point type.

use serde::{Deserialize, Serialize};

/// A geographic location given as latitude and longitude in degrees.
///
/// Points compare by exact coordinate equality; two points are the same only
/// if both coordinates match bit for bit in value. The engine never merges
/// or deduplicates points.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Point;
///
/// let depot = Point::new(61.4980, 23.7610);
/// assert_eq!(depot.lat(), 61.4980);
/// assert_eq!(depot.lon(), 23.7610);
/// assert!(depot.is_valid());
/// assert!(!Point::new(f64::NAN, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    #[serde(rename = "lng")]
    lon: f64,
}

impl Point {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both coordinates are finite and within the
    /// latitude `[-90, 90]` and longitude `[-180, 180]` ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Squared distance in coordinate space, treating degrees as planar axes.
    ///
    /// Only meaningful for relative comparisons (e.g. nearest centroid).
    pub fn squared_planar_distance(&self, other: &Point) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Arithmetic mean of the coordinates, or `None` for an empty slice.
    pub fn centroid(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
        let lon = points.iter().map(|p| p.lon).sum::<f64>() / n;
        Some(Point::new(lat, lon))
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.lat(), 10.0);
        assert_eq!(p.lon(), 20.0);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (1.5, -2.5).into();
        assert_eq!(p, Point::new(1.5, -2.5));
    }

    #[test]
    fn test_point_equality_is_exact() {
        let a = Point::new(0.1, 0.2);
        let b = Point::new(0.1, 0.2 + 1e-15);
        assert_ne!(a, b);
        assert_eq!(a, Point::new(0.1, 0.2));
    }

    #[test]
    fn test_point_validity() {
        assert!(Point::new(90.0, 180.0).is_valid());
        assert!(Point::new(-90.0, -180.0).is_valid());
        assert!(!Point::new(90.1, 0.0).is_valid());
        assert!(!Point::new(0.0, -180.5).is_valid());
        assert!(!Point::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_squared_planar_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.squared_planar_distance(&b) - 25.0).abs() < 1e-12);
        assert!((b.squared_planar_distance(&a) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid() {
        let pts = [Point::new(0.0, 0.0), Point::new(2.0, 4.0)];
        assert_eq!(Point::centroid(&pts), Some(Point::new(1.0, 2.0)));
        assert_eq!(Point::centroid(&[]), None);
    }
}
