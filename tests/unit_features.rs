// Unit tests for feature extraction.
//
// Covers the length and phrase thresholds, the sentiment ranges, the
// cross-signal flags, and the empty-input shape.

use anyhow::Result;
use reviewlens::features::extractor::{red_flag_score, FeatureExtractor, FeatureSet};
use reviewlens::features::sentiment::{Sentiment, SentimentEstimator};
use reviewlens::reviews::models::RawReview;

const FAKE_TEXT: &str = "Amazing product! Best quality! Must buy! Perfect in every way! 5 stars!";
const GENUINE_TEXT: &str =
    "Used for 3 weeks, battery lasts 6 hours, build quality decent, delivery on time.";

struct BrokenEstimator;

impl SentimentEstimator for BrokenEstimator {
    fn estimate(&self, _text: &str) -> Result<Sentiment> {
        anyhow::bail!("estimator offline")
    }
    fn name(&self) -> &'static str {
        "broken"
    }
}

// ============================================================
// Scenario reviews
// ============================================================

#[test]
fn fabricated_review_sets_phrase_flags() {
    let review = RawReview::new(5.0, FAKE_TEXT, false);
    let f = FeatureExtractor::default().extract(&review).features;
    assert!(f.has_fake_phrases);
    assert_eq!(f.fake_phrase_count, 4);
    assert!(!f.is_verified_purchase);
    assert!(f.is_extreme_rating);
    assert!(f.is_generic);
    assert!(f.excessive_positivity);
}

#[test]
fn specific_review_is_not_generic() {
    let review = RawReview::new(4.0, GENUINE_TEXT, true);
    let f = FeatureExtractor::default().extract(&review).features;
    assert!(!f.is_short_review);
    assert!(!f.is_generic);
    assert!(f.specificity_score > 4);
    assert!(!f.sentiment_rating_mismatch);
    assert!(!f.is_extreme_rating);
}

// ============================================================
// Thresholds
// ============================================================

#[test]
fn short_and_detailed_boundaries() {
    let extractor = FeatureExtractor::default();

    let f = extractor.extract(&RawReview::new(3.0, &"a".repeat(49), true)).features;
    assert!(f.is_short_review);
    let f = extractor.extract(&RawReview::new(3.0, &"a".repeat(50), true)).features;
    assert!(!f.is_short_review);

    let f = extractor.extract(&RawReview::new(3.0, &"a".repeat(300), true)).features;
    assert!(!f.is_detailed_review);
    let f = extractor.extract(&RawReview::new(3.0, &"a".repeat(301), true)).features;
    assert!(f.is_detailed_review);
}

#[test]
fn emphasis_counts() {
    let review = RawReview::new(5.0, "WOW!! This is GREAT and REALLY GOOD stuff?! Yes!!!", true);
    let f = FeatureExtractor::default().extract(&review).features;
    assert_eq!(f.excessive_punctuation, 3);
    assert!(f.has_excessive_punctuation);
    assert_eq!(f.all_caps_count, 3);
    assert!(f.has_excessive_caps);
}

#[test]
fn marketing_language_detected() {
    let review = RawReview::new(5.0, "Limited time offer, order today for the best deal!", false);
    let f = FeatureExtractor::default().extract(&review).features;
    assert_eq!(f.marketing_language_count, 3);
    assert!(f.has_marketing_language);
}

#[test]
fn repeated_words_flagged_above_three() {
    let review = RawReview::new(
        5.0,
        "great great great great sound from this speaker honestly",
        true,
    );
    let f = FeatureExtractor::default().extract(&review).features;
    assert_eq!(f.max_word_repetition, 4);
    assert!(f.has_repetitive_words);
}

#[test]
fn negative_text_with_high_rating_is_mismatch() {
    let review = RawReview::new(
        5.0,
        "Terrible. Awful build, the worst purchase, broken in a week.",
        true,
    );
    let f = FeatureExtractor::default().extract(&review).features;
    assert!(f.sentiment_polarity < -0.3);
    assert!(f.sentiment_rating_mismatch);
}

#[test]
fn markup_and_urls_are_cleaned() {
    let review = RawReview::new(
        4.0,
        "<p>Works fine</p> see https://example.com/x or mail me@example.com",
        true,
    );
    let extracted = FeatureExtractor::default().extract(&review);
    assert_eq!(extracted.cleaned_text, "Works fine see or mail");
}

// ============================================================
// Sentiment ranges and fallback
// ============================================================

#[test]
fn sentiment_always_in_range() {
    let texts = [
        "",
        "extremely extremely perfect perfect",
        "not not not terrible",
        "very awful, extremely horrible, really worst",
        "plain words with no opinion",
        FAKE_TEXT,
        GENUINE_TEXT,
    ];
    for extractor in [FeatureExtractor::default(), FeatureExtractor::lexicon_only()] {
        for text in texts {
            let f = extractor.extract(&RawReview::new(3.0, text, true)).features;
            assert!((-1.0..=1.0).contains(&f.sentiment_polarity), "{text}");
            assert!((0.0..=1.0).contains(&f.sentiment_subjectivity), "{text}");
        }
    }
}

#[test]
fn failing_estimator_degrades_to_lexicon() {
    let review = RawReview::new(5.0, FAKE_TEXT, false);
    let broken = FeatureExtractor::with_estimator(Box::new(BrokenEstimator))
        .extract(&review)
        .features;
    let lexicon = FeatureExtractor::lexicon_only().extract(&review).features;
    assert_eq!(broken, lexicon);
    assert_eq!(broken.sentiment_subjectivity, 0.5);
}

// ============================================================
// Edge cases
// ============================================================

#[test]
fn empty_body_is_well_defined() {
    let f = FeatureExtractor::default()
        .extract(&RawReview::new(3.0, "", true))
        .features;
    assert_eq!(f.text_length, 0);
    assert_eq!(f.word_count, 0);
    assert_eq!(f.fake_phrase_count, 0);
    assert_eq!(f.marketing_language_count, 0);
    assert_eq!(f.excessive_punctuation, 0);
    assert_eq!(f.all_caps_count, 0);
    assert_eq!(f.max_word_repetition, 0);
    assert_eq!(f.specificity_score, 0);
    assert!(!f.is_generic);
    assert!(!f.has_fake_phrases);
    assert_eq!(f.sentiment_polarity, 0.0);
}

#[test]
fn extraction_is_deterministic() {
    let review = RawReview::new(5.0, FAKE_TEXT, false).with_title("Best ever!!");
    let extractor = FeatureExtractor::default();
    assert_eq!(extractor.extract(&review), extractor.extract(&review));
}

// ============================================================
// Red-flag weights
// ============================================================

fn clear_features() -> FeatureSet {
    FeatureExtractor::default()
        .extract(&RawReview::new(4.0, GENUINE_TEXT, true))
        .features
}

#[test]
fn red_flag_weights_per_signal() {
    let clear = clear_features();
    assert_eq!(red_flag_score(&clear), 0);

    let cases: Vec<(&str, fn(&mut FeatureSet), u32)> = vec![
        ("unverified", |f: &mut FeatureSet| f.is_verified_purchase = false, 2),
        ("short", |f: &mut FeatureSet| f.is_short_review = true, 1),
        ("fake phrases", |f: &mut FeatureSet| f.has_fake_phrases = true, 2),
        ("marketing", |f: &mut FeatureSet| f.has_marketing_language = true, 2),
        ("positivity", |f: &mut FeatureSet| f.excessive_positivity = true, 2),
        ("mismatch", |f: &mut FeatureSet| f.sentiment_rating_mismatch = true, 1),
        ("generic", |f: &mut FeatureSet| f.is_generic = true, 1),
        ("punctuation", |f: &mut FeatureSet| f.has_excessive_punctuation = true, 1),
        ("caps", |f: &mut FeatureSet| f.has_excessive_caps = true, 1),
    ];

    let mut all = clear.clone();
    for (name, apply, weight) in &cases {
        let mut features = clear.clone();
        apply(&mut features);
        assert_eq!(red_flag_score(&features), *weight, "{name}");
        apply(&mut all);
    }
    assert_eq!(red_flag_score(&all), 13);
}

#[test]
fn red_flag_score_is_diagnostic_only() {
    use reviewlens::classifier::rules::{score_rules, RuleWeights};

    let mut features = clear_features();
    let weights = RuleWeights::default();
    let before = score_rules(&features, &weights);
    features.red_flag_score = 99;
    assert_eq!(score_rules(&features, &weights), before);
}
