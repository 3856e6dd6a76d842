// Rule scoring — fixed weights keyed on individual features.
//
// Each rule that fires moves the score toward "fake" (or, for the three
// credit rules, toward "genuine") and the suspicious ones leave a reason
// behind. The weights have no learned derivation; they are design constants.

use crate::features::extractor::FeatureSet;

/// Fake-phrase count above which the strong phrase rule fires.
pub const MANY_FAKE_PHRASES_ABOVE: u32 = 3;
/// Fake-phrase count above which the weak phrase rule fires.
pub const SOME_FAKE_PHRASES_ABOVE: u32 = 1;
/// Specificity above which the score is credited toward genuine.
pub const HIGH_SPECIFICITY_ABOVE: u32 = 4;
/// Specificity above which a genuine verdict cites product details.
pub const DETAIL_REASON_SPECIFICITY_ABOVE: u32 = 3;

pub const REASON_UNVERIFIED: &str = "Unverified purchase";
pub const REASON_SHORT_GENERIC: &str = "Short, generic review without specific details";
pub const REASON_SHORT: &str = "Very short review";
pub const REASON_PROMOTIONAL_PHRASES: &str = "Contains promotional language";
pub const REASON_MARKETING: &str = "Contains marketing/promotional language";
pub const REASON_EXCESSIVE_POSITIVITY: &str = "Excessive positivity without specific details";
pub const REASON_SENTIMENT_MISMATCH: &str = "Sentiment does not match star rating";
pub const REASON_PUNCTUATION: &str = "Excessive punctuation usage";
pub const REASON_CAPS: &str = "Excessive use of capital letters";
pub const REASON_GENERIC_FIVE_STAR: &str = "Generic 5-star review lacking specific feedback";
pub const REASON_REPETITIVE: &str = "Repetitive word usage";
/// Used for a fake verdict when no rule fired (the model alone decided).
pub const REASON_FALLBACK_FAKE: &str = "Suspicious patterns detected";

pub const REASON_VERIFIED: &str = "Verified purchase";
pub const REASON_DETAILED: &str = "Detailed review with specific information";
pub const REASON_SPECIFIC: &str = "Contains specific product details";
pub const REASON_BALANCED: &str = "Balanced rating (not extreme)";
pub const REASON_CONSISTENT: &str = "Sentiment consistent with rating";
pub const REASON_NOTHING_SUSPICIOUS: &str = "No suspicious patterns detected";

/// Configurable weights for the rule score.
///
/// Positive weights push toward fake; the `*_credit` weights are subtracted.
/// The final score is clamped to 0.0..=1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleWeights {
    pub unverified: f64,
    pub short_generic: f64,
    pub short: f64,
    pub many_fake_phrases: f64,
    pub some_fake_phrases: f64,
    pub marketing: f64,
    pub excessive_positivity: f64,
    pub sentiment_mismatch: f64,
    pub excessive_punctuation: f64,
    pub excessive_caps: f64,
    pub generic_five_star: f64,
    pub repetitive_words: f64,
    /// Verified purchase with a detailed body
    pub verified_detailed_credit: f64,
    pub high_specificity_credit: f64,
    /// Rating other than 1 or 5 stars
    pub balanced_rating_credit: f64,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            unverified: 0.25,
            short_generic: 0.20,
            short: 0.10,
            many_fake_phrases: 0.25,
            some_fake_phrases: 0.10,
            marketing: 0.15,
            excessive_positivity: 0.20,
            sentiment_mismatch: 0.15,
            excessive_punctuation: 0.10,
            excessive_caps: 0.10,
            generic_five_star: 0.15,
            repetitive_words: 0.10,
            verified_detailed_credit: 0.20,
            high_specificity_credit: 0.15,
            balanced_rating_credit: 0.10,
        }
    }
}

/// Score a feature set against the rules.
///
/// Returns the clamped score (0.0 genuine .. 1.0 fake) and the reasons of
/// every suspicious rule that fired, in evaluation order.
pub fn score_rules(f: &FeatureSet, w: &RuleWeights) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let mut fire = |weight: f64, reason: String| {
        score += weight;
        reasons.push(reason);
    };

    if !f.is_verified_purchase {
        fire(w.unverified, REASON_UNVERIFIED.to_string());
    }

    if f.is_short_review && f.is_generic {
        fire(w.short_generic, REASON_SHORT_GENERIC.to_string());
    } else if f.is_short_review {
        fire(w.short, REASON_SHORT.to_string());
    }

    if f.fake_phrase_count > MANY_FAKE_PHRASES_ABOVE {
        fire(
            w.many_fake_phrases,
            format!(
                "Contains {} common fake review phrases",
                f.fake_phrase_count
            ),
        );
    } else if f.fake_phrase_count > SOME_FAKE_PHRASES_ABOVE {
        fire(w.some_fake_phrases, REASON_PROMOTIONAL_PHRASES.to_string());
    }

    if f.has_marketing_language {
        fire(w.marketing, REASON_MARKETING.to_string());
    }
    if f.excessive_positivity {
        fire(w.excessive_positivity, REASON_EXCESSIVE_POSITIVITY.to_string());
    }
    if f.sentiment_rating_mismatch {
        fire(w.sentiment_mismatch, REASON_SENTIMENT_MISMATCH.to_string());
    }
    if f.has_excessive_punctuation {
        fire(w.excessive_punctuation, REASON_PUNCTUATION.to_string());
    }
    if f.has_excessive_caps {
        fire(w.excessive_caps, REASON_CAPS.to_string());
    }
    if f.is_generic && f.rating == 5.0 {
        fire(w.generic_five_star, REASON_GENERIC_FIVE_STAR.to_string());
    }
    if f.has_repetitive_words {
        fire(w.repetitive_words, REASON_REPETITIVE.to_string());
    }

    // Genuine indicators: credited silently
    if f.is_verified_purchase && f.is_detailed_review {
        score -= w.verified_detailed_credit;
    }
    if f.specificity_score > HIGH_SPECIFICITY_ABOVE {
        score -= w.high_specificity_credit;
    }
    if !f.is_extreme_rating {
        score -= w.balanced_rating_credit;
    }

    (score.clamp(0.0, 1.0), reasons)
}

/// Positive signals explaining a genuine verdict, built from the features
/// alone (independent of which rules fired).
pub fn genuine_reasons(f: &FeatureSet) -> Vec<String> {
    let mut reasons: Vec<String> = [
        (f.is_verified_purchase, REASON_VERIFIED),
        (f.is_detailed_review, REASON_DETAILED),
        (
            f.specificity_score > DETAIL_REASON_SPECIFICITY_ABOVE,
            REASON_SPECIFIC,
        ),
        (!f.is_extreme_rating, REASON_BALANCED),
        (!f.sentiment_rating_mismatch, REASON_CONSISTENT),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, reason)| reason.to_string())
    .collect();

    if reasons.is_empty() {
        reasons.push(REASON_NOTHING_SUSPICIOUS.to_string());
    }
    reasons
}
