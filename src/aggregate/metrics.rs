// Product-level metrics and the authenticity grade.
//
// Recomputed from scratch on every call. Values are kept unrounded so that
// the count/percentage invariants hold exactly; rounding is a display concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::verdict::ClassifiedReview;

pub const EMPTY_GRADE_DESCRIPTION: &str = "No reviews available for analysis";

/// Letter grade derived from the share of fake reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthenticityGrade {
    A,
    B,
    C,
    D,
    F,
    /// No reviews to grade
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl AuthenticityGrade {
    /// Grade bands are half-open on fake percentage:
    /// [0,5) A, [5,15) B, [15,30) C, [30,50) D, anything else F.
    pub fn from_fake_percentage(pct: f64) -> Self {
        match pct {
            p if (0.0..5.0).contains(&p) => AuthenticityGrade::A,
            p if (5.0..15.0).contains(&p) => AuthenticityGrade::B,
            p if (15.0..30.0).contains(&p) => AuthenticityGrade::C,
            p if (30.0..50.0).contains(&p) => AuthenticityGrade::D,
            _ => AuthenticityGrade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticityGrade::A => "A",
            AuthenticityGrade::B => "B",
            AuthenticityGrade::C => "C",
            AuthenticityGrade::D => "D",
            AuthenticityGrade::F => "F",
            AuthenticityGrade::NotAvailable => "N/A",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AuthenticityGrade::A => {
                "Excellent authenticity - Very few suspicious reviews detected"
            }
            AuthenticityGrade::B => "Good authenticity - Minor concerns with some reviews",
            AuthenticityGrade::C => {
                "Moderate authenticity concerns - 15-30% suspicious reviews detected"
            }
            AuthenticityGrade::D => {
                "Significant authenticity issues - Many suspicious reviews detected"
            }
            AuthenticityGrade::F => "Poor authenticity - Majority of reviews appear suspicious",
            AuthenticityGrade::NotAvailable => EMPTY_GRADE_DESCRIPTION,
        }
    }
}

impl std::fmt::Display for AuthenticityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_reviews: usize,
    pub fake_count: usize,
    pub genuine_count: usize,
    /// 0.0 to 100.0
    pub fake_percentage: f64,
    /// Mean rating over all reviews
    pub original_rating: f64,
    /// Mean rating over genuine reviews (original when none are genuine)
    pub adjusted_rating: f64,
    /// original_rating - adjusted_rating
    pub rating_difference: f64,
    pub authenticity_grade: AuthenticityGrade,
    pub grade_description: String,
}

impl Metrics {
    /// The shape returned for an empty review list.
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            fake_count: 0,
            genuine_count: 0,
            fake_percentage: 0.0,
            original_rating: 0.0,
            adjusted_rating: 0.0,
            rating_difference: 0.0,
            authenticity_grade: AuthenticityGrade::NotAvailable,
            grade_description: EMPTY_GRADE_DESCRIPTION.to_string(),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Tally verdicts into product-level metrics.
pub fn compute(reviews: &[ClassifiedReview]) -> Metrics {
    let total = reviews.len();
    if total == 0 {
        return Metrics::empty();
    }

    let fake_count = reviews.iter().filter(|r| r.is_fake()).count();
    let genuine_count = total - fake_count;
    let fake_percentage = 100.0 * fake_count as f64 / total as f64;

    let all: Vec<f64> = reviews.iter().map(|r| r.rating()).collect();
    let genuine: Vec<f64> = reviews
        .iter()
        .filter(|r| !r.is_fake())
        .map(|r| r.rating())
        .collect();

    let original_rating = mean(&all).unwrap_or(0.0);
    let adjusted_rating = mean(&genuine).unwrap_or(original_rating);
    let grade = AuthenticityGrade::from_fake_percentage(fake_percentage);

    Metrics {
        total_reviews: total,
        fake_count,
        genuine_count,
        fake_percentage,
        original_rating,
        adjusted_rating,
        rating_difference: original_rating - adjusted_rating,
        authenticity_grade: grade,
        grade_description: grade.description().to_string(),
    }
}

/// Star counts (1-5) for genuine and fake reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub genuine: BTreeMap<u8, usize>,
    pub fake: BTreeMap<u8, usize>,
}

/// Bucket ratings by star (truncated, clamped to 1..=5) and verdict.
pub fn rating_distribution(reviews: &[ClassifiedReview]) -> RatingDistribution {
    let zeroed = || (1..=5u8).map(|star| (star, 0)).collect::<BTreeMap<u8, usize>>();
    let mut dist = RatingDistribution {
        genuine: zeroed(),
        fake: zeroed(),
    };

    for review in reviews {
        let star = (review.rating().trunc() as i64).clamp(1, 5) as u8;
        let bucket = if review.is_fake() {
            &mut dist.fake
        } else {
            &mut dist.genuine
        };
        *bucket.entry(star).or_insert(0) += 1;
    }
    dist
}
