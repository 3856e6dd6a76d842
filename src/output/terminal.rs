// Colored terminal output for analysis reports and training evaluations.
//
// main.rs delegates all report formatting here; `--json` bypasses it.

use colored::Colorize;

use crate::aggregate::metrics::{AuthenticityGrade, RatingDistribution};
use crate::classifier::verdict::{ClassifiedReview, ReviewLabel};
use crate::model::training::{ClassMetrics, EvaluationReport};
use crate::pipeline::analysis::AnalysisReport;

/// Display a full analysis report.
pub fn display_report(report: &AnalysisReport) {
    let m = &report.metrics;

    let heading = match &report.product_title {
        Some(title) => format!("=== Review Analysis: {} ===", super::truncate_chars(title, 60)),
        None => "=== Review Analysis ===".to_string(),
    };
    println!("\n{}", heading.bold());
    if let Some(asin) = &report.asin {
        println!("  ASIN: {asin}");
    }
    if report.is_demo_data {
        println!("  {}", "Sample data (not fetched from a review source)".yellow());
    }
    println!();

    println!(
        "  Authenticity grade: {}  {}",
        colorize_grade(m.authenticity_grade),
        m.grade_description.dimmed()
    );
    println!(
        "  Reviews: {} total, {} fake ({:.1}%), {} genuine",
        m.total_reviews, m.fake_count, m.fake_percentage, m.genuine_count
    );
    if m.total_reviews > 0 {
        println!(
            "  Rating: {:.1} original -> {:.1} adjusted ({:+.2})",
            m.original_rating, m.adjusted_rating, -m.rating_difference
        );
    }

    if m.total_reviews > 0 {
        display_distribution(&report.rating_distribution);
    }

    if !report.patterns.is_empty() {
        println!("\n  {}", "Patterns in fake reviews:".bold());
        for p in &report.patterns {
            println!("    {:>3}x  {}", p.frequency, p.description);
        }
    }

    if !report.reviews.is_empty() {
        println!("\n  {}", "Reviews:".bold());
        for (i, review) in report.reviews.iter().enumerate() {
            display_review(i + 1, review);
        }
    }

    println!("\n{}\n", report.summary);
}

fn display_distribution(dist: &RatingDistribution) {
    println!("\n  {}", "Rating distribution (genuine / fake):".bold());
    for star in (1..=5u8).rev() {
        let genuine = dist.genuine.get(&star).copied().unwrap_or(0);
        let fake = dist.fake.get(&star).copied().unwrap_or(0);
        println!(
            "    {} star  {:>4} / {:<4} {}{}",
            star,
            genuine,
            fake,
            "#".repeat(genuine.min(40)).green(),
            "#".repeat(fake.min(40)).red(),
        );
    }
}

fn display_review(index: usize, review: &ClassifiedReview) {
    let label = colorize_label(review.label());
    let verified = if review.review.verified_purchase {
        "verified".green().to_string()
    } else {
        "unverified".dimmed().to_string()
    };
    println!(
        "  {:>4}. [{} {:.0}%] {:.0}* {} {}",
        index,
        label,
        review.verdict.confidence * 100.0,
        review.rating(),
        verified,
        super::truncate_chars(&review.cleaned_text, 80).dimmed()
    );
    if review.is_fake() {
        for reason in &review.verdict.reasons {
            println!("          - {reason}");
        }
    }
}

/// Display the held-out evaluation of a freshly trained model.
pub fn display_evaluation(report: &EvaluationReport) {
    println!(
        "\n{}",
        format!("=== Evaluation ({} held-out samples) ===", report.test_samples).bold()
    );
    println!(
        "  {:<8} {:>9} {:>7} {:>6} {:>8}",
        "".dimmed(),
        "precision".dimmed(),
        "recall".dimmed(),
        "f1".dimmed(),
        "support".dimmed()
    );
    print_class_row("genuine", &report.genuine);
    print_class_row("fake", &report.fake);
    println!("\n  Accuracy: {:.2}", report.accuracy);
}

fn print_class_row(name: &str, c: &ClassMetrics) {
    println!(
        "  {:<8} {:>9.2} {:>7.2} {:>6.2} {:>8}",
        name, c.precision, c.recall, c.f1, c.support
    );
}

/// Colorize an authenticity grade.
fn colorize_grade(grade: AuthenticityGrade) -> colored::ColoredString {
    let s = grade.as_str();
    match grade {
        AuthenticityGrade::A => s.green().bold(),
        AuthenticityGrade::B => s.green(),
        AuthenticityGrade::C => s.yellow(),
        AuthenticityGrade::D => s.bright_red(),
        AuthenticityGrade::F => s.red().bold(),
        AuthenticityGrade::NotAvailable => s.dimmed(),
    }
}

fn colorize_label(label: ReviewLabel) -> colored::ColoredString {
    match label {
        ReviewLabel::Fake => label.as_str().red(),
        ReviewLabel::Genuine => label.as_str().green(),
    }
}
