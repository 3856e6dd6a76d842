// Narrative summary of an analysis.
//
// Tone and recommendation are picked by grade; findings are appended only
// when they carry information (a rating drop, a dominant pattern).

use super::metrics::{AuthenticityGrade, Metrics};
use super::patterns::PatternInsight;

pub const NO_REVIEWS_SUMMARY: &str = "No reviews were available for analysis.";

/// Rating drop above which the summary calls it out as a drop.
pub const SIGNIFICANT_RATING_DROP: f64 = 0.3;

/// (tone, recommendation) for a grade.
fn tone_for(grade: AuthenticityGrade) -> (&'static str, &'static str) {
    match grade {
        AuthenticityGrade::A => (
            "This product has highly authentic reviews.",
            "The reviews appear trustworthy - you can rely on the displayed rating.",
        ),
        AuthenticityGrade::B => (
            "This product has generally authentic reviews with minor concerns.",
            "Most reviews appear genuine - the rating is fairly reliable.",
        ),
        AuthenticityGrade::C => (
            "This product shows moderate authenticity concerns.",
            "Exercise caution and focus on verified purchase reviews for accurate feedback.",
        ),
        AuthenticityGrade::D => (
            "This product has significant authenticity issues with its reviews.",
            "Be skeptical of the displayed rating - many reviews appear suspicious.",
        ),
        AuthenticityGrade::F | AuthenticityGrade::NotAvailable => (
            "This product's reviews show major authenticity problems.",
            "The majority of reviews appear fake or incentivized - consider alternatives.",
        ),
    }
}

/// Compose the summary text from metrics and detected patterns.
pub fn summarize(metrics: &Metrics, patterns: &[PatternInsight]) -> String {
    if metrics.total_reviews == 0 {
        return NO_REVIEWS_SUMMARY.to_string();
    }

    let (tone, recommendation) = tone_for(metrics.authenticity_grade);

    let mut findings = vec![format!(
        "- {:.1}% of reviews ({} out of {}) show characteristics of fake or incentivized reviews",
        metrics.fake_percentage, metrics.fake_count, metrics.total_reviews
    )];

    // Compare at two decimals so float noise never reads as a drop
    let drop = (metrics.rating_difference * 100.0).round() / 100.0;
    if drop > SIGNIFICANT_RATING_DROP {
        findings.push(format!(
            "- The adjusted rating (excluding suspicious reviews) drops from {:.1} to {:.1} stars",
            metrics.original_rating, metrics.adjusted_rating
        ));
    } else if drop > 0.0 {
        findings.push(format!(
            "- The adjusted rating is slightly lower at {:.1} stars (vs {:.1} original)",
            metrics.adjusted_rating, metrics.original_rating
        ));
    }

    if let Some(top) = patterns.first() {
        findings.push(format!("- Most common issue: {}", top.description));
    }

    format!(
        "Based on our analysis of {} reviews, {}\n\n**Key Findings:**\n{}\n\n**Recommendation:** {}",
        metrics.total_reviews,
        tone,
        findings.join("\n"),
        recommendation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::patterns::PatternType;

    fn metrics(fake: usize, total: usize, original: f64, adjusted: f64) -> Metrics {
        let pct = 100.0 * fake as f64 / total as f64;
        let grade = AuthenticityGrade::from_fake_percentage(pct);
        Metrics {
            total_reviews: total,
            fake_count: fake,
            genuine_count: total - fake,
            fake_percentage: pct,
            original_rating: original,
            adjusted_rating: adjusted,
            rating_difference: original - adjusted,
            authenticity_grade: grade,
            grade_description: grade.description().to_string(),
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(summarize(&Metrics::empty(), &[]), NO_REVIEWS_SUMMARY);
    }

    #[test]
    fn test_significant_drop_and_top_pattern() {
        let m = metrics(4, 10, 4.5, 3.8);
        let patterns = vec![PatternInsight {
            pattern_type: PatternType::Unverified5Star,
            description: PatternType::Unverified5Star.description().to_string(),
            frequency: 3,
        }];
        let text = summarize(&m, &patterns);
        assert!(text.starts_with("Based on our analysis of 10 reviews, This product has significant"));
        assert!(text.contains("- 40.0% of reviews (4 out of 10)"));
        assert!(text.contains("drops from 4.5 to 3.8 stars"));
        assert!(text.contains("- Most common issue: 5-star reviews from unverified purchases"));
        assert!(text.contains("**Recommendation:** Be skeptical"));
    }

    #[test]
    fn test_tone_follows_grade() {
        for (fake, tone) in [
            (0, "This product has highly authentic reviews."),
            (1, "This product has generally authentic reviews with minor concerns."),
            (2, "This product shows moderate authenticity concerns."),
            (4, "This product has significant authenticity issues with its reviews."),
            (5, "This product's reviews show major authenticity problems."),
        ] {
            let text = summarize(&metrics(fake, 10, 4.0, 4.0), &[]);
            let first_line = text.lines().next().unwrap();
            assert_eq!(
                first_line,
                format!("Based on our analysis of 10 reviews, {tone}")
            );
        }
    }

    #[test]
    fn test_slight_drop_wording() {
        let text = summarize(&metrics(1, 20, 4.2, 4.0), &[]);
        assert!(text.contains("slightly lower at 4.0 stars (vs 4.2 original)"));
        assert!(!text.contains("Most common issue"));
    }

    #[test]
    fn test_no_drop_line_without_difference() {
        let text = summarize(&metrics(0, 5, 4.0, 4.0), &[]);
        assert!(!text.contains("adjusted rating"));
        assert!(text.contains("highly authentic"));
    }
}
