// Offline training procedure.
//
// Labeled texts are shuffled with a fixed seed, split 80/20, and the
// vectorizer + logistic regression are fit on the training share only. The
// held-out share produces the evaluation report stored with the artifact.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::artifact::TextModel;
use super::logistic::{FitParams, LogisticRegression};
use super::vectorizer::{TfIdfVectorizer, DEFAULT_MAX_FEATURES};
use crate::classifier::verdict::ReviewLabel;
use crate::features::cleaning::clean_text;

/// One training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub label: ReviewLabel,
}

#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Share of samples held out for evaluation
    pub test_fraction: f64,
    pub seed: u64,
    pub max_features: usize,
    pub max_iter: usize,
    pub show_progress: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            max_features: DEFAULT_MAX_FEATURES,
            max_iter: 1000,
            show_progress: true,
        }
    }
}

/// Precision / recall / F1 for one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of held-out samples with this true label
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub test_samples: usize,
    pub accuracy: f64,
    pub genuine: ClassMetrics,
    pub fake: ClassMetrics,
}

impl EvaluationReport {
    /// Score predictions against true labels.
    pub fn from_predictions(truth: &[ReviewLabel], predicted: &[ReviewLabel]) -> Self {
        let pairs: Vec<(ReviewLabel, ReviewLabel)> =
            truth.iter().copied().zip(predicted.iter().copied()).collect();
        let correct = pairs.iter().filter(|(t, p)| t == p).count();
        let accuracy = if pairs.is_empty() {
            0.0
        } else {
            correct as f64 / pairs.len() as f64
        };

        Self {
            test_samples: pairs.len(),
            accuracy,
            genuine: class_metrics(&pairs, ReviewLabel::Genuine),
            fake: class_metrics(&pairs, ReviewLabel::Fake),
        }
    }
}

fn class_metrics(pairs: &[(ReviewLabel, ReviewLabel)], class: ReviewLabel) -> ClassMetrics {
    let tp = pairs.iter().filter(|(t, p)| *t == class && *p == class).count() as f64;
    let predicted = pairs.iter().filter(|(_, p)| *p == class).count() as f64;
    let support = pairs.iter().filter(|(t, _)| *t == class).count();

    let precision = if predicted > 0.0 { tp / predicted } else { 0.0 };
    let recall = if support > 0 { tp / support as f64 } else { 0.0 };
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassMetrics {
        precision,
        recall,
        f1,
        support,
    }
}

/// Read a JSON array of `{text, label}` objects.
pub fn load_training_data(path: &Path) -> Result<Vec<LabeledText>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read training data {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse training data {}", path.display()))
}

/// Fit a model on labeled texts and evaluate it on a held-out split.
pub fn train(samples: &[LabeledText], config: &TrainingConfig) -> Result<TextModel> {
    if samples.len() < 2 {
        anyhow::bail!(
            "Need at least 2 labeled samples to train, got {}",
            samples.len()
        );
    }
    let fake_total = samples.iter().filter(|s| s.label.is_fake()).count();
    if fake_total == 0 || fake_total == samples.len() {
        anyhow::bail!("Training data must contain both genuine and fake examples");
    }

    let mut order: Vec<usize> = (0..samples.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    order.shuffle(&mut rng);

    let test_len = ((samples.len() as f64 * config.test_fraction).ceil() as usize)
        .min(samples.len() - 1);
    let (test_idx, train_idx) = order.split_at(test_len);

    let train_texts: Vec<String> = train_idx
        .iter()
        .map(|&i| clean_text(&samples[i].text))
        .collect();
    let train_labels: Vec<f64> = train_idx
        .iter()
        .map(|&i| if samples[i].label.is_fake() { 1.0 } else { 0.0 })
        .collect();

    info!(
        train = train_idx.len(),
        test = test_idx.len(),
        "Fitting TF-IDF vectorizer"
    );
    let vectorizer = TfIdfVectorizer::fit(&train_texts, config.max_features);
    let xs: Vec<_> = train_texts.iter().map(|t| vectorizer.transform(t)).collect();

    let params = FitParams {
        max_iter: config.max_iter,
        ..FitParams::default()
    };

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.max_iter as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Training [{bar:30}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let (classifier, iterations) = LogisticRegression::fit(
        &xs,
        &train_labels,
        vectorizer.vocabulary_size(),
        &params,
        |_| pb.inc(1),
    );
    pb.finish_and_clear();
    info!(
        iterations,
        terms = vectorizer.vocabulary_size(),
        "Logistic regression converged"
    );

    let mut model = TextModel {
        vectorizer,
        classifier,
        trained_at: Utc::now(),
        training_samples: train_idx.len(),
        evaluation: None,
    };

    if !test_idx.is_empty() {
        let truth: Vec<ReviewLabel> = test_idx.iter().map(|&i| samples[i].label).collect();
        let predicted: Vec<ReviewLabel> = test_idx
            .iter()
            .map(|&i| {
                if model.fake_probability(&clean_text(&samples[i].text)) >= 0.5 {
                    ReviewLabel::Fake
                } else {
                    ReviewLabel::Genuine
                }
            })
            .collect();
        let report = EvaluationReport::from_predictions(&truth, &predicted);
        info!(
            accuracy = report.accuracy,
            fake_f1 = report.fake.f1,
            "Evaluated on held-out split"
        );
        model.evaluation = Some(report);
    }

    Ok(model)
}
