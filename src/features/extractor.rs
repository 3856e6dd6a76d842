// Feature extraction — one raw review in, cleaned text plus signals out.
//
// Extraction is deterministic for a given estimator: the same review always
// yields the same FeatureSet. Nothing here can fail; a broken sentiment
// estimator degrades to the lexicon-count fallback.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cleaning::{clean_text, combined_lowercase};
use super::lexicon::{self, red_flags};
use super::sentiment::{lexicon_count_sentiment, Sentiment, SentimentEstimator};
use crate::reviews::models::RawReview;

static MARKETING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    lexicon::MARKETING_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid marketing regex"))
        .collect()
});
static PUNCTUATION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").expect("valid punctuation regex"));
// regex-lite word boundaries are ASCII-only: "ÉNORME" counts as "NORME".
static CAPS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").expect("valid caps regex"));

/// The flat signal set derived from one review. Built once, never mutated.
///
/// Serializes as a keyed map (feature name -> value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    // Length
    pub text_length: usize,
    pub word_count: usize,
    pub title_length: usize,
    pub is_short_review: bool,
    pub is_detailed_review: bool,

    // Phrase / pattern hits
    pub fake_phrase_count: u32,
    pub has_fake_phrases: bool,
    pub marketing_language_count: u32,
    pub has_marketing_language: bool,
    pub excessive_punctuation: u32,
    pub has_excessive_punctuation: bool,
    pub all_caps_count: u32,
    pub has_excessive_caps: bool,
    pub max_word_repetition: u32,
    pub has_repetitive_words: bool,

    // Sentiment
    pub sentiment_polarity: f64,
    pub sentiment_subjectivity: f64,
    pub sentiment_rating_mismatch: bool,
    pub excessive_positivity: bool,

    // Metadata
    pub is_verified_purchase: bool,
    pub rating: f64,
    pub is_extreme_rating: bool,
    pub specificity_score: u32,
    pub is_generic: bool,

    /// Diagnostic composite; not consumed by the classifier.
    pub red_flag_score: u32,
}

/// A review after extraction: cleaned text plus its features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedReview {
    pub cleaned_text: String,
    pub cleaned_title: String,
    pub features: FeatureSet,
}

/// Feature extractor holding the (optional) sentiment estimator.
///
/// With no estimator every review uses the lexicon-count fallback.
pub struct FeatureExtractor {
    sentiment: Option<Box<dyn SentimentEstimator>>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::with_estimator(Box::new(super::sentiment::PatternSentiment))
    }
}

impl FeatureExtractor {
    pub fn with_estimator(estimator: Box<dyn SentimentEstimator>) -> Self {
        Self {
            sentiment: Some(estimator),
        }
    }

    /// Extractor that only uses the lexicon-count sentiment fallback.
    pub fn lexicon_only() -> Self {
        Self { sentiment: None }
    }

    /// Name of the sentiment source in use.
    pub fn sentiment_source(&self) -> &'static str {
        self.sentiment.as_ref().map_or("lexicon", |s| s.name())
    }

    /// Extract cleaned text and the full FeatureSet from one review.
    pub fn extract(&self, review: &RawReview) -> ExtractedReview {
        let cleaned_text = clean_text(&review.text);
        let cleaned_title = clean_text(&review.title);
        let combined = combined_lowercase(&cleaned_title, &cleaned_text);

        let features = self.compute_features(
            &cleaned_text,
            &cleaned_title,
            &combined,
            &review.text,
            review.rating,
            review.verified_purchase,
        );

        ExtractedReview {
            cleaned_text,
            cleaned_title,
            features,
        }
    }

    fn compute_features(
        &self,
        text: &str,
        title: &str,
        combined: &str,
        raw_text: &str,
        rating: f64,
        verified: bool,
    ) -> FeatureSet {
        let text_length = text.chars().count();
        let word_count = text.split_whitespace().count();
        let title_length = title.chars().count();

        let fake_phrase_count = count_present(combined, lexicon::FAKE_PHRASES);
        let has_fake_phrases = fake_phrase_count > lexicon::FAKE_PHRASE_FLAG_ABOVE;

        let marketing_language_count =
            MARKETING.iter().filter(|re| re.is_match(combined)).count() as u32;

        // Emphasis is measured on the raw body: cleaning would not change
        // punctuation runs, and caps need the original casing.
        let excessive_punctuation = PUNCTUATION_RUN.find_iter(raw_text).count() as u32;
        let all_caps_count = CAPS_WORD.find_iter(raw_text).count() as u32;

        let max_word_repetition = max_word_repetition(combined);

        let sentiment = self.sentiment_for(text, combined);
        let polarity = sentiment.polarity;

        let sentiment_rating_mismatch = (rating >= 4.0 && polarity < -lexicon::MISMATCH_POLARITY)
            || (rating <= 2.0 && polarity > lexicon::MISMATCH_POLARITY);
        let excessive_positivity = rating == 5.0
            && polarity > lexicon::EXCESSIVE_POSITIVITY_POLARITY
            && has_fake_phrases;

        let specificity_score = count_present(combined, lexicon::SPECIFICITY_CUES);
        let is_generic = specificity_score < lexicon::GENERIC_MAX_SPECIFICITY
            && text_length > lexicon::GENERIC_MIN_CHARS;

        let mut features = FeatureSet {
            text_length,
            word_count,
            title_length,
            is_short_review: text_length < lexicon::SHORT_REVIEW_MAX_CHARS,
            is_detailed_review: text_length > lexicon::DETAILED_REVIEW_MIN_CHARS,
            fake_phrase_count,
            has_fake_phrases,
            marketing_language_count,
            has_marketing_language: marketing_language_count > lexicon::MARKETING_FLAG_ABOVE,
            excessive_punctuation,
            has_excessive_punctuation: excessive_punctuation > lexicon::PUNCTUATION_FLAG_ABOVE,
            all_caps_count,
            has_excessive_caps: all_caps_count > lexicon::CAPS_FLAG_ABOVE,
            max_word_repetition,
            has_repetitive_words: max_word_repetition > lexicon::REPETITION_FLAG_ABOVE,
            sentiment_polarity: polarity,
            sentiment_subjectivity: sentiment.subjectivity,
            sentiment_rating_mismatch,
            excessive_positivity,
            is_verified_purchase: verified,
            rating,
            is_extreme_rating: rating == 5.0 || rating == 1.0,
            specificity_score,
            is_generic,
            red_flag_score: 0,
        };
        features.red_flag_score = red_flag_score(&features);
        features
    }

    /// Estimator sentiment for non-empty body text, otherwise (or on
    /// failure) the lexicon-count fallback over the combined text.
    fn sentiment_for(&self, text: &str, combined: &str) -> Sentiment {
        if let Some(estimator) = self.sentiment.as_ref().filter(|_| !text.is_empty()) {
            match estimator.estimate(text) {
                Ok(sentiment) => return sentiment.clamped(),
                Err(e) => {
                    debug!(
                        estimator = estimator.name(),
                        error = %e,
                        "Sentiment estimator failed, using lexicon fallback"
                    );
                }
            }
        }
        lexicon_count_sentiment(combined).clamped()
    }
}

/// Composite red-flag score: weighted count of the suspicious booleans.
pub fn red_flag_score(f: &FeatureSet) -> u32 {
    [
        (!f.is_verified_purchase, red_flags::UNVERIFIED),
        (f.is_short_review, red_flags::SHORT_REVIEW),
        (f.has_fake_phrases, red_flags::FAKE_PHRASES),
        (f.has_marketing_language, red_flags::MARKETING),
        (f.excessive_positivity, red_flags::EXCESSIVE_POSITIVITY),
        (f.sentiment_rating_mismatch, red_flags::SENTIMENT_MISMATCH),
        (f.is_generic, red_flags::GENERIC),
        (f.has_excessive_punctuation, red_flags::EXCESSIVE_PUNCTUATION),
        (f.has_excessive_caps, red_flags::EXCESSIVE_CAPS),
    ]
    .iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, weight)| weight)
    .sum()
}

/// Number of lexicon entries that occur in the text (each counts once).
fn count_present(text: &str, entries: &[&str]) -> u32 {
    entries.iter().filter(|e| text.contains(*e)).count() as u32
}

/// Highest occurrence count of any whitespace-separated word longer than
/// three characters.
fn max_word_repetition(text_lower: &str) -> u32 {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for word in text_lower.split_whitespace() {
        if word.chars().count() > lexicon::REPETITION_MIN_WORD_CHARS {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    counts.values().copied().max().unwrap_or(0)
}
