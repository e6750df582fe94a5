//! 2-opt refinement of a closed tour.
//!
//! # Algorithm
//!
//! For each pair of interior positions `1 <= i < k <= n-2` of a closed tour
//! `t` of length `n`, compare the two edges entering and leaving the segment
//! `t[i..=k]` with the edges obtained by reversing it:
//!
//! ```text
//! current   = d(t[i-1], t[i]) + d(t[k], t[k+1])
//! candidate = d(t[i-1], t[k]) + d(t[i], t[k+1])
//! ```
//!
//! If `candidate < current`, reverse `t[i..=k]` in place and keep scanning
//! the same pass with the updated tour. Passes repeat until one makes no
//! swap, leaving a 2-opt local optimum. Both depot anchors stay in place.
//!
//! The comparison is strict with no tolerance, so a pass-count cap bounds
//! the run on degenerate inputs.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, warn};

use crate::distance::{DistanceMatrix, DistanceMetric};
use crate::models::{Point, Tour};

/// Default pass cap for [`two_opt_improve`].
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// Counters describing one 2-opt run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoOptStats {
    /// Passes executed, including the final pass that found nothing.
    pub passes: usize,
    /// Segment reversals applied.
    pub swaps: usize,
    /// `true` if the pass cap stopped the search before a local optimum.
    pub capped: bool,
}

/// Applies 2-opt improvement to a closed tour.
///
/// Takes ownership of the tour, reorders its interior in place, and returns
/// it with a recomputed total distance. The result is never longer than the
/// input.
///
/// # Arguments
///
/// * `tour` — Closed tour (depot first and last)
/// * `metric` — Distance metric
/// * `max_passes` — Upper bound on full passes
///
/// # Examples
///
/// ```
/// use u_fleet::distance::Euclidean;
/// use u_fleet::local_search::two_opt_improve;
/// use u_fleet::models::{Point, Tour};
///
/// let depot = Point::new(0.0, 0.0);
/// // Crossing order around a unit square
/// let tour = Tour::new(
///     0,
///     vec![depot, Point::new(1.0, 1.0), Point::new(0.0, 1.0), Point::new(1.0, 0.0), depot],
///     &Euclidean,
/// )
/// .unwrap();
/// let before = tour.total_distance();
/// let (improved, stats) = two_opt_improve(tour, &Euclidean, 100);
/// assert!(improved.total_distance() < before);
/// assert!((improved.total_distance() - 4.0).abs() < 1e-10);
/// assert!(!stats.capped);
/// ```
pub fn two_opt_improve<M: DistanceMetric + ?Sized>(
    tour: Tour,
    metric: &M,
    max_passes: usize,
) -> (Tour, TwoOptStats) {
    let mut stats = TwoOptStats::default();
    let n = tour.len();
    // Need two distinct interior positions to exchange edges.
    if n < 4 {
        return (tour, stats);
    }

    let vehicle_id = tour.vehicle_id();
    let stops = tour.into_stops();

    // Index n-1 repeats the depot, so the matrix covers the first n-1 stops
    // and the order closes on index 0.
    let distances = DistanceMatrix::from_points(&stops[..n - 1], metric);
    let mut order: Vec<usize> = (0..n - 1).chain(std::iter::once(0)).collect();

    let mut converged = false;
    while stats.passes < max_passes {
        stats.passes += 1;
        let pass_swaps = two_opt_pass(&mut order, &distances);
        stats.swaps += pass_swaps;
        debug!("two_opt: pass={} swaps={}", stats.passes, pass_swaps);

        if pass_swaps == 0 {
            converged = true;
            break;
        }
    }

    if !converged {
        stats.capped = true;
        warn!(
            "two_opt: pass cap reached n={} passes={} swaps={}",
            n, stats.passes, stats.swaps
        );
    }

    let refined: Vec<Point> = order.iter().map(|&i| stops[i]).collect();
    (Tour::from_closed(vehicle_id, refined, metric), stats)
}

/// One exhaustive scan over all interior `(i, k)` pairs.
///
/// Returns the number of reversals applied.
fn two_opt_pass(order: &mut [usize], distances: &DistanceMatrix) -> usize {
    let n = order.len();
    let mut swaps = 0;

    for i in 1..n - 2 {
        for k in (i + 1)..n - 1 {
            let (a, b) = (order[i - 1], order[i]);
            let (c, d) = (order[k], order[k + 1]);

            let current = distances.get(a, b) + distances.get(c, d);
            let candidate = distances.get(a, c) + distances.get(b, d);

            if candidate < current {
                order[i..=k].reverse();
                swaps += 1;
            }
        }
    }

    swaps
}
