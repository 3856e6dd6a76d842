// Composes extraction, classification and aggregation into one
// analysis report.

pub mod analysis;
