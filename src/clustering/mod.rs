//! Partitioning of customers into per-vehicle workloads.
//!
//! - [`KMeans`] — Lloyd's k-means over coordinate space, O(n·k) per iteration

mod kmeans;

pub use kmeans::{kmeans_partition, KMeans, Partition, DEFAULT_MAX_ITERATIONS};
