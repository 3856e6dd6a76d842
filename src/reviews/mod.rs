// Review input — raw records, payload normalization, product identifiers,
// and the synthetic demo set.

pub mod models;
pub mod product;
pub mod sample;
