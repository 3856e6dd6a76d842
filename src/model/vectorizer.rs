// TF-IDF vectorizer with unigram + bigram terms.
//
// Tokens are lower-cased runs of two or more word characters with English
// stop words removed (stop-words crate). Bigrams are built from the filtered
// token stream. The vocabulary keeps the most frequent terms across the
// training corpus, and vectors are L2-normalized so that review length does
// not dominate the classifier.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

/// Default cap on vocabulary size.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

static STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

/// A sparse vector: (term index, weight) pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term -> column index
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit the vocabulary and IDF weights on a corpus.
    ///
    /// Terms are ranked by total occurrence count (ties alphabetically) and
    /// the top `max_features` kept. Columns are assigned in alphabetical
    /// order so the same corpus always yields the same layout.
    pub fn fit(documents: &[String], max_features: usize) -> Self {
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = terms(doc);
            let unique: HashSet<&String> = terms.iter().collect();
            for term in unique {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            for term in terms {
                *term_counts.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let mut kept: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort();

        let n = documents.len() as f64;
        let idf = kept
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        let vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(i, term)| (term, i))
            .collect();

        Self { vocabulary, idf }
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    ///
    /// Out-of-vocabulary terms are ignored; a document with no known terms
    /// yields an empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in terms(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .filter_map(|(idx, tf)| self.idf.get(idx).map(|idf| (idx, tf * idf)))
            .collect();
        vector.sort_by_key(|&(idx, _)| idx);

        let norm = vector.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut vector {
                *v /= norm;
            }
        }
        vector
    }

    /// Check that every vocabulary column has an IDF weight.
    ///
    /// Fitted vectorizers always pass; this guards artifacts read from disk.
    pub fn validate(&self) -> Result<()> {
        if self.idf.len() != self.vocabulary.len() {
            bail!(
                "vocabulary has {} terms but {} IDF weights",
                self.vocabulary.len(),
                self.idf.len()
            );
        }
        if let Some((term, &idx)) = self.vocabulary.iter().find(|(_, &i)| i >= self.idf.len()) {
            bail!("term {:?} maps to column {} outside {} columns", term, idx, self.idf.len());
        }
        Ok(())
    }

    /// Number of columns a transformed vector can address.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Term for a column index (linear scan; used for reporting only).
    pub fn term_for(&self, index: usize) -> Option<&str> {
        self.vocabulary
            .iter()
            .find(|(_, &i)| i == index)
            .map(|(term, _)| term.as_str())
    }
}

/// Lower-cased tokens of 2+ word characters, stop words removed.
fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !STOP_WORDS.contains(*t))
        .map(str::to_string)
        .collect()
}

/// Unigrams followed by bigrams of the filtered token stream.
fn terms(text: &str) -> Vec<String> {
    let tokens = tokens(text);
    let bigrams: Vec<String> = tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect();
    let mut terms = tokens;
    terms.extend(bigrams);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "battery lasts six hours".to_string(),
            "battery died after two weeks".to_string(),
            "amazing product must buy".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_unigrams_and_bigrams() {
        let v = TfIdfVectorizer::fit(&corpus(), DEFAULT_MAX_FEATURES);
        assert!(v.vocabulary.contains_key("battery"));
        assert!(v.vocabulary.keys().any(|term| term.starts_with("battery ")));
        assert!(!v.vocabulary.contains_key("after"), "stop words are dropped");
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let v = TfIdfVectorizer::fit(&corpus(), 1);
        assert_eq!(v.vocabulary_size(), 1);
        assert_eq!(v.term_for(0), Some("battery"));
    }

    #[test]
    fn test_transform_is_unit_length() {
        let v = TfIdfVectorizer::fit(&corpus(), DEFAULT_MAX_FEATURES);
        let x = v.transform("Battery lasts forever, battery rocks");
        let norm: f64 = x.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(x.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_fitted_vectorizer_validates() {
        let v = TfIdfVectorizer::fit(&corpus(), DEFAULT_MAX_FEATURES);
        assert!(v.validate().is_ok());
        assert_eq!(v.dimension(), v.vocabulary_size());
    }

    #[test]
    fn test_out_of_range_column_is_rejected_and_skipped() {
        let v = TfIdfVectorizer {
            vocabulary: HashMap::from([("battery".to_string(), 3), ("lasts".to_string(), 0)]),
            idf: vec![1.0, 1.0],
        };
        assert!(v.validate().is_err());

        let x = v.transform("battery lasts");
        assert_eq!(x.len(), 1);
        assert_eq!(x[0].0, 0);
    }

    #[test]
    fn test_unknown_text_is_empty_vector() {
        let v = TfIdfVectorizer::fit(&corpus(), DEFAULT_MAX_FEATURES);
        assert!(v.transform("zebra xylophone").is_empty());
        assert!(v.transform("").is_empty());
    }
}
