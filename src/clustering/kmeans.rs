//! K-means partitioning of customers into vehicle workloads.
//!
//! # Algorithm
//!
//! Seeds `k` centroids by sampling distinct customers, then alternates:
//!
//! 1. **Assignment**: each customer joins the centroid with the smallest
//!    squared planar distance (ties go to the lowest centroid index).
//! 2. **Update**: each centroid moves to the mean of its members. A centroid
//!    with no members keeps its position.
//!
//! Stops when no centroid moves or the iteration cap is reached.
//!
//! Clustering only needs relative ordering of distances, so it works in raw
//! coordinate space rather than through the injected tour metric.
//!
//! # Complexity
//!
//! O(n·k) per iteration.
//!
//! # Reference
//!
//! Lloyd, S. (1982). "Least squares quantization in PCM",
//! *IEEE Transactions on Information Theory* 28(2), 129-137.

use log::{debug, info};
use rand::seq::index;
use rand::Rng;
use rayon::prelude::*;

use crate::error::{RoutingError, RoutingResult};
use crate::models::Point;

/// Default iteration cap for [`KMeans`].
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Customers grouped per vehicle index.
///
/// Every input customer appears in exactly one group. Groups may be empty.
///
/// # Examples
///
/// ```
/// use u_fleet::clustering::Partition;
/// use u_fleet::models::Point;
///
/// let p = Partition::single(vec![Point::new(1.0, 1.0)]);
/// assert_eq!(p.num_groups(), 1);
/// assert_eq!(p.num_points(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    groups: Vec<Vec<Point>>,
    iterations: usize,
    converged: bool,
}

impl Partition {
    /// A partition with one group holding every customer.
    pub fn single(customers: Vec<Point>) -> Self {
        Self {
            groups: vec![customers],
            iterations: 0,
            converged: true,
        }
    }

    /// Groups indexed by vehicle.
    pub fn groups(&self) -> &[Vec<Point>] {
        &self.groups
    }

    /// Customers assigned to `vehicle`, or `None` if out of range.
    pub fn group(&self, vehicle: usize) -> Option<&[Point]> {
        self.groups.get(vehicle).map(Vec::as_slice)
    }

    /// Number of groups (vehicles).
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of customers across all groups.
    pub fn num_points(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Assignment/update rounds that ran.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// `true` if centroids stopped moving before the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Consumes the partition, returning the groups.
    pub fn into_groups(self) -> Vec<Vec<Point>> {
        self.groups
    }
}

/// K-means partitioner over geographic points.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_fleet::clustering::KMeans;
/// use u_fleet::models::Point;
///
/// let customers = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.1, 0.1),
///     Point::new(10.0, 10.0),
///     Point::new(10.1, 10.1),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let partition = KMeans::new(2).partition(&customers, &mut rng).unwrap();
/// assert_eq!(partition.num_groups(), 2);
/// assert_eq!(partition.num_points(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    parallel: bool,
}

impl KMeans {
    /// Creates a partitioner producing `k` groups.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            parallel: false,
        }
    }

    /// Sets the iteration cap (at least one round always runs).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Runs the assignment step in parallel across customers.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Splits `customers` into `k` groups.
    ///
    /// Returns a single group when `k <= 1` or there are no customers.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfiguration`] if there are fewer customers
    /// than groups, since seeds are drawn without replacement.
    pub fn partition<R: Rng + ?Sized>(
        &self,
        customers: &[Point],
        rng: &mut R,
    ) -> RoutingResult<Partition> {
        if self.k <= 1 || customers.is_empty() {
            return Ok(Partition::single(customers.to_vec()));
        }
        if customers.len() < self.k {
            return Err(RoutingError::InvalidConfiguration {
                customers: customers.len(),
                vehicles: self.k,
            });
        }

        let mut centroids: Vec<Point> = index::sample(rng, customers.len(), self.k)
            .iter()
            .map(|i| customers[i])
            .collect();

        let max_iterations = self.max_iterations.max(1);
        let mut groups = Vec::new();
        let mut iterations = 0;
        let mut converged = false;

        while iterations < max_iterations {
            iterations += 1;

            let labels = self.assign(customers, &centroids);
            groups = group_by_label(customers, &labels, self.k);

            let updated: Vec<Point> = groups
                .iter()
                .zip(&centroids)
                .map(|(group, old)| Point::centroid(group).unwrap_or(*old))
                .collect();

            let moved = updated.iter().zip(&centroids).filter(|(a, b)| a != b).count();
            debug!("kmeans: iteration={iterations} moved={moved}");

            if moved == 0 {
                converged = true;
                break;
            }
            centroids = updated;
        }

        info!(
            "kmeans: done n={} k={} iterations={} converged={}",
            customers.len(),
            self.k,
            iterations,
            converged
        );

        Ok(Partition {
            groups,
            iterations,
            converged,
        })
    }

    fn assign(&self, customers: &[Point], centroids: &[Point]) -> Vec<usize> {
        if self.parallel {
            customers
                .par_iter()
                .map(|p| nearest_centroid(p, centroids))
                .collect()
        } else {
            customers
                .iter()
                .map(|p| nearest_centroid(p, centroids))
                .collect()
        }
    }
}

/// Partitions `customers` into `k` groups with default settings.
///
/// Shorthand for `KMeans::new(k).partition(customers, rng)`.
pub fn kmeans_partition<R: Rng + ?Sized>(
    customers: &[Point],
    k: usize,
    rng: &mut R,
) -> RoutingResult<Partition> {
    KMeans::new(k).partition(customers, rng)
}

/// Index of the closest centroid; the first one wins on ties.
fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (idx, c) in centroids.iter().enumerate() {
        let d = point.squared_planar_distance(c);
        if d < best_d {
            best_d = d;
            best = idx;
        }
    }
    best
}

fn group_by_label(customers: &[Point], labels: &[usize], k: usize) -> Vec<Vec<Point>> {
    let mut groups = vec![Vec::new(); k];
    for (p, &label) in customers.iter().zip(labels) {
        groups[label].push(*p);
    }
    groups
}
