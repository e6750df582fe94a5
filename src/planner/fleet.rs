//! Fleet planner: partition, construct, refine, aggregate.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::PlannerConfig;
use crate::clustering::KMeans;
use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMetric;
use crate::error::{RoutingError, RoutingResult};
use crate::local_search::two_opt_improve;
use crate::models::{FleetPlan, Point, Tour};

/// Plans closed depot tours for a fleet of vehicles.
///
/// Customers are first split into one workload per vehicle with k-means,
/// then each workload gets a nearest-neighbor tour refined by 2-opt.
/// Vehicles whose workload is empty get no tour.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::Haversine;
/// use u_fleet::models::Point;
/// use u_fleet::planner::{FleetPlanner, PlannerConfig};
///
/// let depot = Point::new(61.4980, 23.7610);
/// let customers = vec![
///     Point::new(61.4955, 23.7810),
///     Point::new(61.4995, 23.7945),
///     Point::new(61.4943, 23.7680),
///     Point::new(61.4965, 23.7350),
///     Point::new(61.5030, 23.7800),
/// ];
///
/// let planner = FleetPlanner::new(Haversine).with_config(PlannerConfig::default().with_seed(42));
/// let plan = planner.plan(depot, &customers, 2).unwrap();
/// assert_eq!(plan.num_served(), 5);
/// assert!(plan.tours().iter().all(|t| t.depot() == depot));
/// ```
#[derive(Debug, Clone)]
pub struct FleetPlanner<M> {
    metric: M,
    config: PlannerConfig,
}

impl<M: DistanceMetric> FleetPlanner<M> {
    /// Creates a planner with the default configuration.
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Plans tours using a generator seeded from the configuration.
    ///
    /// Without a configured seed the generator draws from OS entropy, so
    /// clustering (and hence the plan) may differ between calls.
    ///
    /// # Errors
    ///
    /// See [`plan_with_rng`](Self::plan_with_rng).
    pub fn plan(
        &self,
        depot: Point,
        customers: &[Point],
        vehicle_count: usize,
    ) -> RoutingResult<FleetPlan> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.plan_with_rng(depot, customers, vehicle_count, &mut rng)
    }

    /// Plans tours using the given random source for centroid seeding.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidInput`] for an invalid configuration, zero
    ///   vehicles, or a depot/customer with invalid coordinates.
    /// - [`RoutingError::InvalidConfiguration`] when more than one vehicle is
    ///   requested but there are fewer customers than vehicles.
    pub fn plan_with_rng<R: Rng + ?Sized>(
        &self,
        depot: Point,
        customers: &[Point],
        vehicle_count: usize,
        rng: &mut R,
    ) -> RoutingResult<FleetPlan> {
        self.validate(depot, customers, vehicle_count)?;

        if customers.is_empty() {
            info!("planner: no customers, empty plan");
            return Ok(FleetPlan::default());
        }

        let groups = if vehicle_count <= 1 {
            vec![customers.to_vec()]
        } else {
            KMeans::new(vehicle_count)
                .with_max_iterations(self.config.max_cluster_iterations)
                .with_parallel(self.config.parallel)
                .partition(customers, rng)?
                .into_groups()
        };

        let workloads: Vec<(usize, Vec<Point>)> = groups
            .into_iter()
            .enumerate()
            .filter(|(_, group)| !group.is_empty())
            .collect();

        let tours = if self.config.parallel {
            workloads
                .par_iter()
                .map(|(vehicle, group)| self.plan_vehicle(*vehicle, depot, group))
                .collect::<RoutingResult<Vec<Tour>>>()?
        } else {
            workloads
                .iter()
                .map(|(vehicle, group)| self.plan_vehicle(*vehicle, depot, group))
                .collect::<RoutingResult<Vec<Tour>>>()?
        };

        let plan = FleetPlan::new(tours);
        info!(
            "planner: total vehicles={} tours={} customers={} distance={:.2}",
            vehicle_count,
            plan.num_tours(),
            plan.num_served(),
            plan.total_distance()
        );
        Ok(plan)
    }

    /// Builds and refines a single closed tour over `customers`.
    ///
    /// Equivalent to a one-vehicle plan without partitioning. The tour is
    /// assigned to vehicle 0.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInput`] for invalid coordinates or config.
    pub fn plan_tour(&self, depot: Point, customers: &[Point]) -> RoutingResult<Tour> {
        self.validate(depot, customers, 1)?;
        self.plan_vehicle(0, depot, customers)
    }

    fn plan_vehicle(&self, vehicle: usize, depot: Point, group: &[Point]) -> RoutingResult<Tour> {
        let mut stops = Vec::with_capacity(group.len() + 1);
        stops.push(depot);
        stops.extend_from_slice(group);

        let seed = nearest_neighbor_tour(&stops, &self.metric)?.with_vehicle_id(vehicle);
        let seed_distance = seed.total_distance();
        let (tour, stats) = two_opt_improve(seed, &self.metric, self.config.max_two_opt_passes);

        info!(
            "planner: vehicle #{} stops={} distance={:.2} (nn={:.2} passes={} swaps={})",
            vehicle + 1,
            group.len(),
            tour.total_distance(),
            seed_distance,
            stats.passes,
            stats.swaps
        );
        Ok(tour)
    }

    fn validate(&self, depot: Point, customers: &[Point], vehicle_count: usize) -> RoutingResult<()> {
        self.config.validate()?;
        if vehicle_count == 0 {
            return Err(RoutingError::InvalidInput(
                "vehicle_count must be at least 1".into(),
            ));
        }
        if !depot.is_valid() {
            return Err(RoutingError::InvalidInput(format!(
                "depot has invalid coordinates ({}, {})",
                depot.lat(),
                depot.lon()
            )));
        }
        if let Some((idx, p)) = customers.iter().enumerate().find(|(_, p)| !p.is_valid()) {
            return Err(RoutingError::InvalidInput(format!(
                "customer {idx} has invalid coordinates ({}, {})",
                p.lat(),
                p.lon()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Euclidean, Haversine};
    use crate::local_search::DEFAULT_MAX_PASSES;

    fn tampere_depot() -> Point {
        Point::new(61.4980, 23.7610)
    }

    fn tampere_stops() -> Vec<Point> {
        vec![
            Point::new(61.4955, 23.7810), // Tampere Hall
            Point::new(61.4995, 23.7945), // Kaleva Church
            Point::new(61.4943, 23.7680), // Ratina
            Point::new(61.4965, 23.7350), // Pyynikki tower
            Point::new(61.5030, 23.7800), // Tammela stadium
        ]
    }

    fn seeded(seed: u64) -> FleetPlanner<Haversine> {
        FleetPlanner::new(Haversine).with_config(PlannerConfig::default().with_seed(seed))
    }

    #[test]
    fn test_plan_single_vehicle() {
        let plan = seeded(1)
            .plan(tampere_depot(), &tampere_stops(), 1)
            .expect("valid input");
        assert_eq!(plan.num_tours(), 1);
        let tour = &plan.tours()[0];
        assert_eq!(tour.len(), 7);
        assert_eq!(tour.depot(), tampere_depot());
        assert_eq!(tour.stops().last(), Some(&tampere_depot()));
        assert!((plan.total_distance() - tour.total_distance()).abs() < 1e-12);
    }

    #[test]
    fn test_plan_single_vehicle_matches_direct_pipeline() {
        let depot = tampere_depot();
        let customers = tampere_stops();
        let plan = seeded(3).plan(depot, &customers, 1).expect("valid input");

        let mut stops = vec![depot];
        stops.extend_from_slice(&customers);
        let seed = nearest_neighbor_tour(&stops, &Haversine).expect("non-empty");
        let (direct, _) = two_opt_improve(seed, &Haversine, DEFAULT_MAX_PASSES);

        assert_eq!(plan.tours(), &[direct]);
    }

    #[test]
    fn test_plan_tour_matches_single_vehicle_plan() {
        let planner = seeded(5);
        let plan = planner
            .plan(tampere_depot(), &tampere_stops(), 1)
            .expect("valid input");
        let tour = planner
            .plan_tour(tampere_depot(), &tampere_stops())
            .expect("valid input");
        assert_eq!(plan.tours(), &[tour]);
    }

    #[test]
    fn test_plan_multiple_vehicles_serves_everyone() {
        let plan = seeded(42)
            .plan(tampere_depot(), &tampere_stops(), 3)
            .expect("valid input");
        assert!(plan.num_tours() >= 1 && plan.num_tours() <= 3);
        assert_eq!(plan.num_served(), 5);
        let sum: f64 = plan.tours().iter().map(|t| t.total_distance()).sum();
        assert!((plan.total_distance() - sum).abs() < 1e-12);
        for tour in plan.tours() {
            assert_eq!(tour.depot(), tampere_depot());
            assert_eq!(tour.stops().last(), Some(&tampere_depot()));
            assert!(tour.vehicle_id() < 3);
        }
    }

    #[test]
    fn test_plan_empty_customers() {
        let plan = seeded(1).plan(tampere_depot(), &[], 4).expect("empty is fine");
        assert!(plan.is_empty());
        assert_eq!(plan.total_distance(), 0.0);
    }

    #[test]
    fn test_plan_too_few_customers() {
        let err = seeded(1)
            .plan(tampere_depot(), &tampere_stops()[..2], 3)
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidConfiguration {
                customers: 2,
                vehicles: 3
            }
        );
    }

    #[test]
    fn test_plan_zero_vehicles() {
        let err = seeded(1)
            .plan(tampere_depot(), &tampere_stops(), 0)
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput(_)));
    }

    #[test]
    fn test_plan_invalid_points() {
        let planner = seeded(1);
        let err = planner
            .plan(Point::new(f64::NAN, 0.0), &tampere_stops(), 1)
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput(_)));

        let mut customers = tampere_stops();
        customers.push(Point::new(95.0, 0.0));
        let err = planner.plan(tampere_depot(), &customers, 2).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidInput("customer 5 has invalid coordinates (95, 0)".into())
        );
    }

    #[test]
    fn test_plan_invalid_config() {
        let planner = FleetPlanner::new(Haversine)
            .with_config(PlannerConfig::default().with_max_two_opt_passes(0));
        assert!(planner.plan(tampere_depot(), &tampere_stops(), 1).is_err());
    }

    #[test]
    fn test_plan_duplicate_customers() {
        let depot = Point::new(0.0, 0.0);
        let c = Point::new(1.0, 1.0);
        let plan = FleetPlanner::new(Euclidean)
            .with_config(PlannerConfig::default().with_seed(2))
            .plan(depot, &[c, c, c], 2)
            .expect("duplicates are legal");
        assert_eq!(plan.num_served(), 3);
        assert_eq!(plan.num_tours(), 1);
    }

    #[test]
    fn test_plan_parallel_matches_sequential() {
        let depot = Point::new(0.0, 0.0);
        let customers: Vec<Point> = (0..40)
            .map(|i| Point::new(((i * 7) % 23) as f64 * 0.1, ((i * 11) % 29) as f64 * 0.1))
            .collect();
        let sequential = FleetPlanner::new(Euclidean)
            .with_config(PlannerConfig::default().with_seed(9))
            .plan(depot, &customers, 4)
            .expect("valid input");
        let parallel = FleetPlanner::new(Euclidean)
            .with_config(PlannerConfig::default().with_seed(9).with_parallel(true))
            .plan(depot, &customers, 4)
            .expect("valid input");
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_plan_with_closure_metric() {
        let manhattan = |a: &Point, b: &Point| (a.lat() - b.lat()).abs() + (a.lon() - b.lon()).abs();
        let planner = FleetPlanner::new(manhattan);
        let plan = planner
            .plan(Point::new(0.0, 0.0), &[Point::new(1.0, 1.0)], 1)
            .expect("valid input");
        assert!((plan.total_distance() - 4.0).abs() < 1e-12);
    }
}
