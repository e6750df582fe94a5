//! Error types for fleet planning.

use thiserror::Error;

/// Errors reported by the planning engine.
///
/// Degenerate but well-formed inputs (no customers, empty vehicle groups,
/// duplicate coordinates) are not errors; they produce empty or partial
/// plans instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Input has the wrong shape or holds values outside their domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The partitioner cannot seed one centroid per vehicle.
    #[error("invalid configuration: {customers} customer(s) cannot seed {vehicles} vehicle cluster(s)")]
    InvalidConfiguration {
        /// Number of customers supplied.
        customers: usize,
        /// Number of vehicles requested.
        vehicles: usize,
    },
}

/// Result alias used throughout the crate.
pub type RoutingResult<T> = Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = RoutingError::InvalidInput("vehicle_count must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid input: vehicle_count must be at least 1"
        );
    }

    #[test]
    fn test_display_invalid_configuration() {
        let err = RoutingError::InvalidConfiguration {
            customers: 2,
            vehicles: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: 2 customer(s) cannot seed 3 vehicle cluster(s)"
        );
    }
}
