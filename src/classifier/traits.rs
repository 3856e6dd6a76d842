// Fake-probability capability of a statistical text model.
//
// The classifier only needs a fake-probability for a piece of text. A
// trained artifact provides it when one is loaded; otherwise NeutralModel
// stands in and the classifier runs on rules alone. The choice is made once
// at startup and the model is shared read-only afterwards.

use anyhow::Result;

/// Probability used whenever a model cannot give an answer.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Trait for estimating how likely a text is to be a fabricated review.
pub trait FakeProbabilityModel: Send + Sync {
    /// Probability (0.0 to 1.0) that the text is fake.
    fn predict_fake_probability(&self, text: &str) -> Result<f64>;

    /// Whether this model contributes to the verdict. When false the
    /// classifier uses the rule score unblended.
    fn is_available(&self) -> bool {
        true
    }

    /// Short description for logs and status output.
    fn describe(&self) -> String;
}

/// Stand-in used when no trained artifact is loaded. Running without a
/// model is a normal operating mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralModel;

impl FakeProbabilityModel for NeutralModel {
    fn predict_fake_probability(&self, _text: &str) -> Result<f64> {
        Ok(NEUTRAL_PROBABILITY)
    }

    fn is_available(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "none (rule-based only)".to_string()
    }
}
