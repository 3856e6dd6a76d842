// Aggregation — product-level metrics, grade, patterns and narrative over a
// fully classified review list.

pub mod metrics;
pub mod patterns;
pub mod summary;
