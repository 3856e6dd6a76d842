// ReviewLens: fake product review detection
//
// This is the library root. Each module corresponds to a stage or a
// supporting subsystem of the review analysis pipeline.

pub mod aggregate;
pub mod classifier;
pub mod config;
pub mod features;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod reviews;
pub mod status;
