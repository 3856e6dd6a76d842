// Hybrid classifier: rule score blended with the statistical model.
//
// Rules carry 0.6 of the combined score and the model 0.4. A model failure
// is replaced by the neutral probability. Classification holds no mutable
// state; one classifier is shared by all concurrent callers.

use std::sync::Arc;

use tracing::{debug, warn};

use super::rules::{self, RuleWeights};
use super::traits::{FakeProbabilityModel, NeutralModel, NEUTRAL_PROBABILITY};
use super::verdict::{ClassificationResult, ReviewLabel};
use crate::features::extractor::FeatureSet;

/// Blend weight of the rule score when a model is available.
pub const RULE_BLEND_WEIGHT: f64 = 0.6;
/// Blend weight of the model probability when a model is available.
pub const MODEL_BLEND_WEIGHT: f64 = 0.4;
/// Combined score at or above which a review is labelled fake.
pub const FAKE_THRESHOLD: f64 = 0.5;
/// Confidence never reaches 1.0.
pub const MAX_CONFIDENCE: f64 = 0.99;

pub struct ReviewClassifier {
    model: Arc<dyn FakeProbabilityModel>,
    weights: RuleWeights,
}

impl Default for ReviewClassifier {
    fn default() -> Self {
        Self::rules_only()
    }
}

impl ReviewClassifier {
    /// Classifier backed by the given model and the default rule weights.
    pub fn new(model: Arc<dyn FakeProbabilityModel>) -> Self {
        Self {
            model,
            weights: RuleWeights::default(),
        }
    }

    /// Classifier with no statistical model.
    pub fn rules_only() -> Self {
        Self::new(Arc::new(NeutralModel))
    }

    pub fn with_weights(mut self, weights: RuleWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Whether a statistical model contributes to verdicts.
    pub fn model_available(&self) -> bool {
        self.model.is_available()
    }

    pub fn model_description(&self) -> String {
        self.model.describe()
    }

    /// Classify one review from its features and cleaned body text.
    pub fn classify(&self, features: &FeatureSet, cleaned_text: &str) -> ClassificationResult {
        let (rule_score, rule_reasons) = rules::score_rules(features, &self.weights);

        let combined = if self.model.is_available() && !cleaned_text.is_empty() {
            let model_score = self.model_probability(cleaned_text);
            debug!(rule_score, model_score, "Blending rule and model scores");
            RULE_BLEND_WEIGHT * rule_score + MODEL_BLEND_WEIGHT * model_score
        } else {
            rule_score
        };

        let (label, confidence) = if combined >= FAKE_THRESHOLD {
            (ReviewLabel::Fake, combined.min(MAX_CONFIDENCE))
        } else {
            (ReviewLabel::Genuine, (1.0 - combined).min(MAX_CONFIDENCE))
        };

        let reasons = match label {
            ReviewLabel::Genuine => rules::genuine_reasons(features),
            ReviewLabel::Fake if rule_reasons.is_empty() => {
                vec![rules::REASON_FALLBACK_FAKE.to_string()]
            }
            ReviewLabel::Fake => rule_reasons,
        };

        ClassificationResult {
            label,
            confidence,
            reasons,
        }
    }

    /// Model probability, or the neutral value if the model fails or
    /// answers outside 0.0..=1.0.
    fn model_probability(&self, text: &str) -> f64 {
        match self.model.predict_fake_probability(text) {
            Ok(p) if (0.0..=1.0).contains(&p) => p,
            Ok(p) => {
                warn!(probability = p, "Model returned an out-of-range probability");
                NEUTRAL_PROBABILITY
            }
            Err(e) => {
                warn!(error = %e, "Model prediction failed, using neutral probability");
                NEUTRAL_PROBABILITY
            }
        }
    }
}
