// Sentiment estimation — trait-based so the estimator can be swapped.
//
// The default estimator grades opinion words (with intensifiers and
// negation) and averages them, the way pattern-based analyzers do. When no
// estimator is configured, or the configured one fails, the extractor falls
// back to `lexicon_count_sentiment`, which can never fail.

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::Result;

use super::lexicon::{INTENSIFIERS, NEGATIONS, NEGATIVE_WORDS, OPINION_WORDS, POSITIVE_WORDS};

/// Neutral subjectivity reported by the lexicon-count fallback.
pub const FALLBACK_SUBJECTIVITY: f64 = 0.5;

/// Polarity multiplier applied to an opinion word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// How many preceding tokens are searched for a negation.
const NEGATION_WINDOW: usize = 2;

static OPINIONS: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    OPINION_WORDS
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

static INTENSITY: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

/// Polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: FALLBACK_SUBJECTIVITY,
    };

    /// Force both values into range; NaN becomes neutral.
    pub fn clamped(self) -> Self {
        let polarity = if self.polarity.is_nan() {
            0.0
        } else {
            self.polarity.clamp(-1.0, 1.0)
        };
        let subjectivity = if self.subjectivity.is_nan() {
            FALLBACK_SUBJECTIVITY
        } else {
            self.subjectivity.clamp(0.0, 1.0)
        };
        Self {
            polarity,
            subjectivity,
        }
    }
}

/// Trait for estimating the sentiment of a review body.
///
/// Implementations may fail (e.g. a remote service); the extractor absorbs
/// the failure and uses the lexicon-count fallback instead.
pub trait SentimentEstimator: Send + Sync {
    /// Estimate the sentiment of cleaned review text.
    fn estimate(&self, text: &str) -> Result<Sentiment>;

    /// Short name for logs and status output.
    fn name(&self) -> &'static str;
}

/// Averaged opinion-word estimator.
///
/// Each graded opinion word contributes its polarity and subjectivity,
/// scaled by a directly preceding intensifier and flipped (x -0.5) by a
/// negation within the two preceding tokens. Text without opinion words is
/// neutral with zero subjectivity.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternSentiment;

impl SentimentEstimator for PatternSentiment {
    fn estimate(&self, text: &str) -> Result<Sentiment> {
        let tokens = tokenize(text);

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(polarity, subjectivity)) = OPINIONS.get(token.as_str()) else {
                continue;
            };

            let intensity = i
                .checked_sub(1)
                .and_then(|prev| INTENSITY.get(tokens[prev].as_str()))
                .copied()
                .unwrap_or(1.0);

            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| NEGATIONS.contains(&t.as_str()));

            let mut p = (polarity * intensity).clamp(-1.0, 1.0);
            if negated {
                p *= NEGATION_FACTOR;
            }
            polarities.push(p);
            subjectivities.push((subjectivity * intensity).clamp(0.0, 1.0));
        }

        if polarities.is_empty() {
            return Ok(Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let n = polarities.len() as f64;
        Ok(Sentiment {
            polarity: polarities.iter().sum::<f64>() / n,
            subjectivity: subjectivities.iter().sum::<f64>() / n,
        }
        .clamped())
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

/// Lexicon-count fallback over lower-cased text.
///
/// polarity = (positive - negative) / (positive + negative), 0 when no
/// lexicon term occurs; subjectivity is always the neutral 0.5. Each
/// lexicon term counts once if it occurs anywhere (substring match).
pub fn lexicon_count_sentiment(text_lower: &str) -> Sentiment {
    let positive = POSITIVE_WORDS
        .iter()
        .filter(|w| text_lower.contains(*w))
        .count() as f64;
    let negative = NEGATIVE_WORDS
        .iter()
        .filter(|w| text_lower.contains(*w))
        .count() as f64;

    let total = positive + negative;
    let polarity = if total > 0.0 {
        (positive - negative) / total
    } else {
        0.0
    };

    Sentiment {
        polarity,
        subjectivity: FALLBACK_SUBJECTIVITY,
    }
}

/// Lower-cased word tokens; apostrophes are kept so "don't" stays whole.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_fallback_polarity() {
        let s = lexicon_count_sentiment("great sound, but the case arrived broken");
        // one positive, one negative
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, FALLBACK_SUBJECTIVITY);

        let s = lexicon_count_sentiment("amazing, best purchase, perfect");
        assert_eq!(s.polarity, 1.0);
    }

    #[test]
    fn test_lexicon_fallback_no_hits_is_neutral() {
        assert_eq!(lexicon_count_sentiment(""), Sentiment::NEUTRAL);
        assert_eq!(lexicon_count_sentiment("it is a cable"), Sentiment::NEUTRAL);
    }

    #[test]
    fn test_pattern_positive_text() {
        let s = PatternSentiment
            .estimate("Amazing product! Best quality! Perfect in every way!")
            .unwrap();
        assert!(s.polarity > 0.5, "got {}", s.polarity);
        assert!((0.0..=1.0).contains(&s.subjectivity));
    }

    #[test]
    fn test_pattern_negation_flips() {
        let plain = PatternSentiment.estimate("the sound is good").unwrap();
        let negated = PatternSentiment.estimate("the sound is not good").unwrap();
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn test_pattern_intensifier_stays_in_range() {
        let s = PatternSentiment.estimate("extremely perfect, extremely awesome").unwrap();
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
    }

    #[test]
    fn test_pattern_no_opinion_words() {
        let s = PatternSentiment.estimate("the cable is two meters").unwrap();
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn test_clamped_handles_nan() {
        let s = Sentiment {
            polarity: f64::NAN,
            subjectivity: 3.0,
        }
        .clamped();
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 1.0);
    }
}
