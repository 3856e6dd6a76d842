// Cross-review pattern detection over fake-labelled reviews.

use serde::{Deserialize, Serialize};

use crate::classifier::verdict::ClassifiedReview;

/// Fake-phrase count above which a review counts toward repetitive phrasing.
pub const REPETITIVE_PHRASES_ABOVE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    ExcessivePositivity,
    ShortGeneric,
    #[serde(rename = "unverified_5star")]
    Unverified5Star,
    MarketingLanguage,
    RepetitivePhrases,
    ExcessiveEmphasis,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::ExcessivePositivity => "excessive_positivity",
            PatternType::ShortGeneric => "short_generic",
            PatternType::Unverified5Star => "unverified_5star",
            PatternType::MarketingLanguage => "marketing_language",
            PatternType::RepetitivePhrases => "repetitive_phrases",
            PatternType::ExcessiveEmphasis => "excessive_emphasis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatternType::ExcessivePositivity => {
                "Reviews showing unnaturally positive sentiment without specific details"
            }
            PatternType::ShortGeneric => {
                "Short, generic reviews lacking product-specific information"
            }
            PatternType::Unverified5Star => "5-star reviews from unverified purchases",
            PatternType::MarketingLanguage => {
                "Reviews containing promotional or marketing language"
            }
            PatternType::RepetitivePhrases => {
                "Similar phrasing or common fake review expressions"
            }
            PatternType::ExcessiveEmphasis => {
                "Excessive use of punctuation (!!!!) or capital letters"
            }
        }
    }

    /// Whether a single review exhibits this pattern.
    pub fn matches(&self, r: &ClassifiedReview) -> bool {
        let f = &r.features;
        match self {
            PatternType::ExcessivePositivity => f.excessive_positivity,
            PatternType::ShortGeneric => f.is_short_review && f.is_generic,
            PatternType::Unverified5Star => !f.is_verified_purchase && r.rating() == 5.0,
            PatternType::MarketingLanguage => f.has_marketing_language,
            PatternType::RepetitivePhrases => f.fake_phrase_count > REPETITIVE_PHRASES_ABOVE,
            PatternType::ExcessiveEmphasis => f.has_excessive_punctuation || f.has_excessive_caps,
        }
    }
}

/// Evaluation order; also the tie order after sorting.
pub const ALL_PATTERNS: [PatternType; 6] = [
    PatternType::ExcessivePositivity,
    PatternType::ShortGeneric,
    PatternType::Unverified5Star,
    PatternType::MarketingLanguage,
    PatternType::RepetitivePhrases,
    PatternType::ExcessiveEmphasis,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInsight {
    pub pattern_type: PatternType,
    pub description: String,
    /// Number of fake reviews exhibiting the pattern
    pub frequency: usize,
}

/// Count each pattern across fake reviews, most frequent first.
pub fn detect_patterns(reviews: &[ClassifiedReview]) -> Vec<PatternInsight> {
    let fakes: Vec<&ClassifiedReview> = reviews.iter().filter(|r| r.is_fake()).collect();
    if fakes.is_empty() {
        return Vec::new();
    }

    let mut insights: Vec<PatternInsight> = ALL_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let frequency = fakes.iter().filter(|r| pattern.matches(r)).count();
            (frequency > 0).then(|| PatternInsight {
                pattern_type: *pattern,
                description: pattern.description().to_string(),
                frequency,
            })
        })
        .collect();

    // sort_by is stable: equal frequencies keep evaluation order
    insights.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_type_names() {
        for pattern in ALL_PATTERNS {
            let json = serde_json::to_string(&pattern).unwrap();
            assert_eq!(json, format!("\"{}\"", pattern.as_str()));
        }
    }

    #[test]
    fn test_no_reviews_no_patterns() {
        assert!(detect_patterns(&[]).is_empty());
    }
}
