// Classification — deterministic rule scoring blended with an optional
// statistical text model.

pub mod hybrid;
pub mod rules;
pub mod traits;
pub mod verdict;
