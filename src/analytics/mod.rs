//! Embedded statistics for scatter plots: OLS trend fitting, fixed-budget
//! k-means clustering, and convex hulls for cluster boundaries. Everything
//! here is pure and renderer-independent.

mod hull;
mod kmeans;
mod trend;

pub use hull::convex_hull;
pub use kmeans::{Cluster, KMEANS_ITERATIONS, cluster};
pub use trend::{TrendLine, fit_line};
