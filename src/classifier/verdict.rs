// Per-review verdict types.

use serde::{Deserialize, Serialize};

use crate::features::extractor::{ExtractedReview, FeatureSet};
use crate::reviews::models::RawReview;

/// Whether a review reads as genuine or fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewLabel {
    Genuine,
    Fake,
}

impl ReviewLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewLabel::Genuine => "genuine",
            ReviewLabel::Fake => "fake",
        }
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, ReviewLabel::Fake)
    }
}

impl std::fmt::Display for ReviewLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classifier's verdict for one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: ReviewLabel,
    /// Confidence in the label, 0.0 to 0.99
    pub confidence: f64,
    /// Human-readable explanations, in rule evaluation order
    pub reasons: Vec<String>,
}

/// A review with its extracted features and verdict attached.
///
/// Serializes flat: the raw review fields, then `cleaned_text`, `features`,
/// `label`, `confidence` and `reasons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedReview {
    #[serde(flatten)]
    pub review: RawReview,
    pub cleaned_text: String,
    pub features: FeatureSet,
    #[serde(flatten)]
    pub verdict: ClassificationResult,
}

impl ClassifiedReview {
    pub fn new(review: RawReview, extracted: ExtractedReview, verdict: ClassificationResult) -> Self {
        Self {
            review,
            cleaned_text: extracted.cleaned_text,
            features: extracted.features,
            verdict,
        }
    }

    pub fn label(&self) -> ReviewLabel {
        self.verdict.label
    }

    pub fn is_fake(&self) -> bool {
        self.verdict.label.is_fake()
    }

    pub fn rating(&self) -> f64 {
        self.review.rating
    }
}
