// Serializable model artifact — vectorizer + logistic regression.
//
// Written once by the offline `train` command and loaded read-only at
// startup. A missing artifact means rules-only classification.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::logistic::LogisticRegression;
use super::training::EvaluationReport;
use super::vectorizer::TfIdfVectorizer;
use crate::classifier::traits::{FakeProbabilityModel, NeutralModel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextModel {
    pub vectorizer: TfIdfVectorizer,
    pub classifier: LogisticRegression,
    pub trained_at: DateTime<Utc>,
    /// Number of labeled texts the classifier was fit on
    pub training_samples: usize,
    /// Held-out evaluation, absent when the data was too small to split
    pub evaluation: Option<EvaluationReport>,
}

impl TextModel {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact {}", path.display()))?;
        let model: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse model artifact {}", path.display()))?;
        model
            .validate()
            .with_context(|| format!("Inconsistent model artifact {}", path.display()))?;
        Ok(model)
    }

    /// Vectorizer columns and classifier weights must line up.
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        let dim = self.vectorizer.dimension();
        if self.classifier.weights.len() != dim {
            anyhow::bail!(
                "classifier has {} weights for {} feature columns",
                self.classifier.weights.len(),
                dim
            );
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create model directory {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string(self).context("Failed to serialize model artifact")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write model artifact {}", path.display()))
    }

    pub fn fake_probability(&self, text: &str) -> f64 {
        self.classifier.predict_proba(&self.vectorizer.transform(text))
    }
}

impl FakeProbabilityModel for TextModel {
    fn predict_fake_probability(&self, text: &str) -> Result<f64> {
        if self.vectorizer.vocabulary_size() == 0 {
            anyhow::bail!("Model artifact has an empty vocabulary");
        }
        Ok(self.fake_probability(text))
    }

    fn describe(&self) -> String {
        format!(
            "TF-IDF + logistic regression ({} terms, {} samples, trained {})",
            self.vectorizer.vocabulary_size(),
            self.training_samples,
            self.trained_at.format("%Y-%m-%d")
        )
    }
}

/// Load the artifact at `path` if present, otherwise the neutral model.
///
/// A missing file is the normal rules-only mode. A file that exists but
/// cannot be read is logged and also falls back to the neutral model.
pub fn load_model(path: &Path) -> Arc<dyn FakeProbabilityModel> {
    if !path.exists() {
        info!(
            path = %path.display(),
            "No model artifact found, using rule-based classification only"
        );
        return Arc::new(NeutralModel);
    }

    match TextModel::load(path) {
        Ok(model) => {
            info!(
                path = %path.display(),
                terms = model.vectorizer.vocabulary_size(),
                samples = model.training_samples,
                "Loaded model artifact"
            );
            Arc::new(model)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to load model artifact, using rule-based classification only"
            );
            Arc::new(NeutralModel)
        }
    }
}
