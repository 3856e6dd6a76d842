// Unit tests for aggregation: metrics, grade bands, rating distribution,
// pattern detection and the summary template.

use reviewlens::aggregate::metrics::{compute, rating_distribution, AuthenticityGrade};
use reviewlens::aggregate::patterns::{detect_patterns, PatternType};
use reviewlens::aggregate::summary::{summarize, NO_REVIEWS_SUMMARY};
use reviewlens::classifier::verdict::{ClassificationResult, ClassifiedReview, ReviewLabel};
use reviewlens::features::extractor::FeatureExtractor;
use reviewlens::reviews::models::RawReview;

fn classified(rating: f64, text: &str, verified: bool, label: ReviewLabel) -> ClassifiedReview {
    let review = RawReview::new(rating, text, verified);
    let extracted = FeatureExtractor::default().extract(&review);
    ClassifiedReview::new(
        review,
        extracted,
        ClassificationResult {
            label,
            confidence: 0.8,
            reasons: Vec::new(),
        },
    )
}

fn genuine(rating: f64) -> ClassifiedReview {
    classified(
        rating,
        "Bought it last month, battery holds up and the size is right.",
        true,
        ReviewLabel::Genuine,
    )
}

// ============================================================
// Metrics
// ============================================================

#[test]
fn forty_of_hundred_is_grade_d() {
    let mut reviews: Vec<ClassifiedReview> = (0..60).map(|_| genuine(4.0)).collect();
    reviews.extend((0..40).map(|_| classified(5.0, "Love it!", false, ReviewLabel::Fake)));

    let m = compute(&reviews);
    assert_eq!(m.total_reviews, 100);
    assert_eq!(m.fake_count, 40);
    assert_eq!(m.genuine_count, 60);
    assert_eq!(m.fake_percentage, 40.0);
    assert_eq!(m.authenticity_grade.as_str(), "D");
    assert!((m.original_rating - 4.4).abs() < 1e-9);
    assert!((m.adjusted_rating - 4.0).abs() < 1e-9);
    assert!((m.rating_difference - 0.4).abs() < 1e-9);
}

#[test]
fn all_genuine_has_no_rating_difference() {
    let reviews: Vec<ClassifiedReview> = [5.0, 4.0, 3.0, 4.0, 2.0, 5.0, 1.0]
        .into_iter()
        .map(genuine)
        .collect();
    let m = compute(&reviews);
    assert_eq!(m.adjusted_rating, m.original_rating);
    assert_eq!(m.rating_difference, 0.0);
    assert_eq!(m.authenticity_grade, AuthenticityGrade::A);
}

#[test]
fn all_fake_falls_back_to_original_rating() {
    let reviews: Vec<ClassifiedReview> = (0..3)
        .map(|_| classified(5.0, "Best ever!", false, ReviewLabel::Fake))
        .collect();
    let m = compute(&reviews);
    assert_eq!(m.genuine_count, 0);
    assert_eq!(m.adjusted_rating, m.original_rating);
    assert_eq!(m.fake_percentage, 100.0);
    assert_eq!(m.authenticity_grade, AuthenticityGrade::F);
}

#[test]
fn counts_always_add_up() {
    for fake in 0..=7 {
        let mut reviews: Vec<ClassifiedReview> = (0..(7 - fake)).map(|_| genuine(4.0)).collect();
        reviews.extend((0..fake).map(|_| classified(5.0, "Wow", false, ReviewLabel::Fake)));
        let m = compute(&reviews);
        assert_eq!(m.fake_count + m.genuine_count, m.total_reviews);
        assert!((0.0..=100.0).contains(&m.fake_percentage));
    }
}

#[test]
fn empty_list_is_na() {
    let m = compute(&[]);
    assert_eq!(m.authenticity_grade.as_str(), "N/A");
    assert_eq!(m.total_reviews, 0);
    assert_eq!(m.fake_count, 0);
    assert_eq!(m.genuine_count, 0);
    assert_eq!(m.fake_percentage, 0.0);
    assert_eq!(m.grade_description, "No reviews available for analysis");
    assert_eq!(summarize(&m, &[]), NO_REVIEWS_SUMMARY);
}

// ============================================================
// Rating distribution
// ============================================================

#[test]
fn distribution_splits_by_label() {
    let reviews = vec![
        genuine(4.0),
        genuine(4.5),
        genuine(1.0),
        classified(5.0, "Perfect!", false, ReviewLabel::Fake),
    ];
    let dist = rating_distribution(&reviews);
    assert_eq!(dist.genuine[&4], 2);
    assert_eq!(dist.genuine[&1], 1);
    assert_eq!(dist.genuine[&5], 0);
    assert_eq!(dist.fake[&5], 1);
    assert_eq!(dist.fake.values().sum::<usize>(), 1);
}

// ============================================================
// Patterns
// ============================================================

#[test]
fn all_genuine_has_no_patterns() {
    let reviews: Vec<ClassifiedReview> = (0..5).map(|_| genuine(5.0)).collect();
    assert!(detect_patterns(&reviews).is_empty());
}

#[test]
fn patterns_sorted_by_frequency_with_stable_ties() {
    let reviews = vec![
        // unverified 5-star, short generic, emphasis
        classified(5.0, "Great stuff for everyone!!! WOW WOW WOW!!", false, ReviewLabel::Fake),
        // unverified 5-star, marketing
        classified(
            5.0,
            "Limited time offer on this one, order today and you will see why it sells.",
            false,
            ReviewLabel::Fake,
        ),
        // unverified 5-star only
        classified(
            5.0,
            "This thing arrived and I bought another for my brother who wanted one.",
            false,
            ReviewLabel::Fake,
        ),
        // genuine reviews never count
        classified(5.0, "Great stuff for everyone!!! WOW WOW WOW!!", false, ReviewLabel::Genuine),
    ];
    let patterns = detect_patterns(&reviews);
    let types: Vec<PatternType> = patterns.iter().map(|p| p.pattern_type).collect();
    assert_eq!(
        types,
        vec![
            PatternType::Unverified5Star,
            PatternType::ShortGeneric,
            PatternType::MarketingLanguage,
            PatternType::ExcessiveEmphasis,
        ]
    );
    assert_eq!(patterns[0].frequency, 3);
    assert!(patterns[1..].iter().all(|p| p.frequency == 1));
}

#[test]
fn summary_mentions_top_pattern() {
    let mut reviews: Vec<ClassifiedReview> = (0..6).map(|_| genuine(3.0)).collect();
    reviews.extend((0..4).map(|_| classified(5.0, "Love it!", false, ReviewLabel::Fake)));

    let m = compute(&reviews);
    let patterns = detect_patterns(&reviews);
    let text = summarize(&m, &patterns);

    assert!(text.starts_with("Based on our analysis of 10 reviews,"));
    assert!(text.contains("**Key Findings:**"));
    assert!(text.contains("- 40.0% of reviews (4 out of 10)"));
    assert!(text.contains("drops from 3.8 to 3.0 stars"));
    assert!(text.contains(&format!(
        "- Most common issue: {}",
        patterns[0].description
    )));
    assert!(text.contains("**Recommendation:**"));
}
