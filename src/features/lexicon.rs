// Static lexicons and fixed thresholds for feature extraction.
//
// Kept as data so the heuristics can be tuned and tested without touching
// the extraction control flow.

/// Body shorter than this (in characters) is a short review.
pub const SHORT_REVIEW_MAX_CHARS: usize = 50;
/// Body longer than this (in characters) is a detailed review.
pub const DETAILED_REVIEW_MIN_CHARS: usize = 300;
/// Body must be longer than this before a low specificity counts as generic.
pub const GENERIC_MIN_CHARS: usize = 20;
/// Fewer specificity cues than this marks a review as generic.
pub const GENERIC_MAX_SPECIFICITY: u32 = 2;
/// Words of this many characters or fewer are ignored by the repetition count.
pub const REPETITION_MIN_WORD_CHARS: usize = 3;

// Flag cut-offs: each boolean is `count > cut-off`
pub const FAKE_PHRASE_FLAG_ABOVE: u32 = 2;
pub const MARKETING_FLAG_ABOVE: u32 = 0;
pub const PUNCTUATION_FLAG_ABOVE: u32 = 1;
pub const CAPS_FLAG_ABOVE: u32 = 2;
pub const REPETITION_FLAG_ABOVE: u32 = 3;

/// Polarity beyond which text sentiment contradicts the star rating.
pub const MISMATCH_POLARITY: f64 = 0.3;
/// Polarity above which a 5-star review with stock phrases is over the top.
pub const EXCESSIVE_POSITIVITY_POLARITY: f64 = 0.5;

/// Stock phrases common in fabricated reviews (substring match, lowercase).
pub const FAKE_PHRASES: &[&str] = &[
    "best product",
    "amazing product",
    "best ever",
    "must buy",
    "highly recommend",
    "5 stars",
    "perfect",
    "excellent quality",
    "love it",
    "awesome",
    "fantastic",
    "wonderful",
    "great product",
    "best purchase",
    "worth every penny",
    "changed my life",
    "everyone should buy",
    "no complaints",
    "buy it now",
    "best in market",
    "superior quality",
    "game changer",
];

/// Marketing-language patterns; each pattern counts once if it matches.
pub const MARKETING_PATTERNS: &[&str] = &[
    r"buy\s*(it\s*)?now",
    r"limited\s*time",
    r"don'?t\s*miss",
    r"order\s*today",
    r"best\s*deal",
    r"free\s*shipping",
    r"act\s*fast",
];

/// Cues that a reviewer actually used the product: time units, purchase
/// process words, product attributes.
pub const SPECIFICITY_CUES: &[&str] = &[
    "week",
    "month",
    "day",
    "hour",
    "minute",
    "bought",
    "purchased",
    "ordered",
    "received",
    "battery",
    "quality",
    "feature",
    "works",
    "doesn't work",
    "size",
    "color",
    "weight",
    "price",
    "value",
    "packaging",
    "delivery",
    "shipping",
    "arrived",
];

/// Fallback sentiment lexicon: positive terms.
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "best", "perfect", "awesome",
];

/// Fallback sentiment lexicon: negative terms.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "terrible", "awful", "worst", "hate", "broken", "useless",
];

/// Graded opinion words for the statistical estimator:
/// (word, polarity in [-1, 1], subjectivity in [0, 1]).
pub const OPINION_WORDS: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("cheap", 0.4, 0.7),
    ("comfortable", 0.4, 0.6),
    ("decent", 0.17, 0.5),
    ("durable", 0.3, 0.5),
    ("easy", 0.43, 0.83),
    ("excellent", 1.0, 1.0),
    ("fair", 0.7, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.42, 0.5),
    ("gentle", 0.2, 0.6),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("love", 0.5, 0.6),
    ("loves", 0.5, 0.6),
    ("modern", 0.2, 0.3),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("recommended", 0.4, 0.5),
    ("reliable", 0.5, 0.6),
    ("revolutionary", 0.5, 0.8),
    ("satisfied", 0.5, 1.0),
    ("satisfactory", 0.3, 0.6),
    ("sleek", 0.3, 0.6),
    ("solid", 0.3, 0.5),
    ("straightforward", 0.3, 0.5),
    ("super", 0.33, 0.67),
    ("superior", 0.7, 0.9),
    ("well", 0.3, 0.3),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    ("adequate", 0.1, 0.4),
    ("average", -0.15, 0.4),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("broken", -0.4, 0.4),
    ("complicated", -0.5, 1.0),
    ("concerning", -0.3, 0.6),
    ("confusing", -0.3, 0.6),
    ("defective", -0.7, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("flimsy", -0.5, 0.8),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("terrible", -1.0, 1.0),
    ("useless", -0.5, 0.2),
    ("waste", -0.2, 0.1),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that scale the next opinion word: (word, multiplier).
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("so", 1.2),
    ("quite", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("bit", 0.7),
];

/// Words that flip (and damp) the polarity of the following opinion word.
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "wasn't", "won't", "cannot",
    "can't", "nothing",
];

/// Red-flag weights for the diagnostic composite score.
pub mod red_flags {
    pub const UNVERIFIED: u32 = 2;
    pub const SHORT_REVIEW: u32 = 1;
    pub const FAKE_PHRASES: u32 = 2;
    pub const MARKETING: u32 = 2;
    pub const EXCESSIVE_POSITIVITY: u32 = 2;
    pub const SENTIMENT_MISMATCH: u32 = 1;
    pub const GENERIC: u32 = 1;
    pub const EXCESSIVE_PUNCTUATION: u32 = 1;
    pub const EXCESSIVE_CAPS: u32 = 1;
}
