use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::features::extractor::FeatureExtractor;
use crate::pipeline::analysis::{DEFAULT_CONCURRENCY, DEFAULT_MAX_REVIEWS};

pub const MODEL_FILE_NAME: &str = "fake_review_model.json";

/// Which sentiment source the feature extractor uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentimentBackend {
    /// Opinion-word estimator with intensifiers and negation (default)
    Pattern,
    /// Positive/negative word counts only
    Lexicon,
}

impl SentimentBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBackend::Pattern => "pattern",
            SentimentBackend::Lexicon => "lexicon",
        }
    }

    pub fn build_extractor(&self) -> FeatureExtractor {
        match self {
            SentimentBackend::Pattern => FeatureExtractor::default(),
            SentimentBackend::Lexicon => FeatureExtractor::lexicon_only(),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// Nothing is required: every setting has a default, and a missing model
/// artifact just means rule-based classification. The .env file is loaded
/// at startup via dotenvy.
pub struct Config {
    /// Path of the trained model artifact (JSON)
    pub model_path: PathBuf,
    pub sentiment_backend: SentimentBackend,
    /// Reviews extracted/classified in parallel
    pub concurrency: usize,
    /// Reviews beyond this many are dropped before analysis
    pub max_reviews: usize,
}

/// Returns the default model artifact location.
/// Uses the platform data directory: ~/.local/share/reviewlens/models/ on Linux.
pub fn default_model_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reviewlens")
        .join("models")
        .join(MODEL_FILE_NAME)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let sentiment_backend = match env::var("REVIEWLENS_SENTIMENT").as_deref() {
            Ok("lexicon") => SentimentBackend::Lexicon,
            // "pattern" or unset both default to the estimator
            _ => SentimentBackend::Pattern,
        };

        let model_path = env::var("REVIEWLENS_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_path());

        Ok(Self {
            model_path,
            sentiment_backend,
            concurrency: env_usize("REVIEWLENS_CONCURRENCY", DEFAULT_CONCURRENCY),
            max_reviews: env_usize("REVIEWLENS_MAX_REVIEWS", DEFAULT_MAX_REVIEWS),
        })
    }

    /// Whether a model artifact exists at the configured path.
    pub fn model_present(&self) -> bool {
        self.model_path.is_file()
    }
}
