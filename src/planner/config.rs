//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::clustering::DEFAULT_MAX_ITERATIONS;
use crate::error::{RoutingError, RoutingResult};
use crate::local_search::DEFAULT_MAX_PASSES;

/// Configuration for [`FleetPlanner`](super::FleetPlanner).
///
/// # Examples
///
/// ```
/// use u_fleet::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_seed(42)
///     .with_max_cluster_iterations(50)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum k-means assignment/update rounds.
    pub max_cluster_iterations: usize,

    /// Maximum 2-opt passes per tour.
    pub max_two_opt_passes: usize,

    /// Random seed for centroid seeding. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Plan vehicles (and cluster assignments) on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_cluster_iterations: DEFAULT_MAX_ITERATIONS,
            max_two_opt_passes: DEFAULT_MAX_PASSES,
            seed: None,
            parallel: false,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_cluster_iterations(mut self, n: usize) -> Self {
        self.max_cluster_iterations = n;
        self
    }

    pub fn with_max_two_opt_passes(mut self, n: usize) -> Self {
        self.max_two_opt_passes = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInput`] if either iteration cap is zero.
    pub fn validate(&self) -> RoutingResult<()> {
        if self.max_cluster_iterations == 0 {
            return Err(RoutingError::InvalidInput(
                "max_cluster_iterations must be at least 1".into(),
            ));
        }
        if self.max_two_opt_passes == 0 {
            return Err(RoutingError::InvalidInput(
                "max_two_opt_passes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
