//! Fleet plan type.

use serde::Serialize;

use super::Tour;

/// The outcome of one planning run: a tour per non-empty vehicle and the
/// summed distance of all tours.
///
/// # Examples
///
/// ```
/// use u_fleet::models::FleetPlan;
///
/// let plan = FleetPlan::new(Vec::new());
/// assert!(plan.is_empty());
/// assert_eq!(plan.total_distance(), 0.0);
/// ```
///
/// Plans are output only; they serialize but cannot be read back, so a
/// payload can never smuggle in an inconsistent total:
///
/// ```compile_fail
/// use u_fleet::models::FleetPlan;
///
/// let _: FleetPlan = serde_json::from_str(r#"{"tours":[],"total_distance":-1.0}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetPlan {
    tours: Vec<Tour>,
    total_distance: f64,
}

impl FleetPlan {
    /// Creates a plan from finished tours, summing their distances.
    pub fn new(tours: Vec<Tour>) -> Self {
        let total_distance = tours.iter().map(|t| t.total_distance()).sum();
        Self {
            tours,
            total_distance,
        }
    }

    /// Tours in vehicle index order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Number of vehicles that received a tour.
    pub fn num_tours(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if no vehicle received a tour.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Total number of customers served across all tours.
    pub fn num_served(&self) -> usize {
        self.tours.iter().map(|t| t.customers().len()).sum()
    }

    /// Sum of every tour's total distance.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

impl Default for FleetPlan {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
