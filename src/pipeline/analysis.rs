// Analysis pipeline: extract -> classify -> aggregate.
//
// Per-review work has no cross-review dependency, so the async entry point
// fans it out to the blocking pool with bounded concurrency. `buffered`
// (not `buffer_unordered`) keeps the classified list in input order, which
// makes reports deterministic for a given input.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::aggregate::metrics::{self, Metrics, RatingDistribution};
use crate::aggregate::patterns::{self, PatternInsight};
use crate::aggregate::summary;
use crate::classifier::hybrid::ReviewClassifier;
use crate::classifier::verdict::ClassifiedReview;
use crate::features::extractor::FeatureExtractor;
use crate::reviews::models::RawReview;

pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_MAX_REVIEWS: usize = 500;

/// Identity of the product under analysis. Every field is optional; the
/// core never needs them, it only carries them into the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub asin: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    /// Reviews are synthetic sample data, not fetched from a source
    pub is_demo_data: bool,
}

/// Everything produced for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub asin: Option<String>,
    pub product_title: Option<String>,
    pub product_image: Option<String>,
    pub product_url: Option<String>,
    pub analysis_date: DateTime<Utc>,
    pub metrics: Metrics,
    pub patterns: Vec<PatternInsight>,
    pub rating_distribution: RatingDistribution,
    pub summary: String,
    pub reviews: Vec<ClassifiedReview>,
    pub is_demo_data: bool,
}

/// Build the report from an already classified list.
pub fn build_report(product: ProductInfo, reviews: Vec<ClassifiedReview>) -> AnalysisReport {
    let metrics = metrics::compute(&reviews);
    let patterns = patterns::detect_patterns(&reviews);
    let rating_distribution = metrics::rating_distribution(&reviews);
    let summary = summary::summarize(&metrics, &patterns);

    // Review sources often carry product details on each record
    let product_title = product
        .title
        .or_else(|| reviews.iter().find_map(|r| r.review.product_title.clone()));
    let product_image = product
        .image
        .or_else(|| reviews.iter().find_map(|r| r.review.product_image.clone()));

    info!(
        total = metrics.total_reviews,
        fake = metrics.fake_count,
        grade = %metrics.authenticity_grade,
        "Analysis complete"
    );

    AnalysisReport {
        success: true,
        asin: product.asin,
        product_title,
        product_image,
        product_url: product.url,
        analysis_date: Utc::now(),
        metrics,
        patterns,
        rating_distribution,
        summary,
        reviews,
        is_demo_data: product.is_demo_data,
    }
}

fn classify_review(
    extractor: &FeatureExtractor,
    classifier: &ReviewClassifier,
    review: RawReview,
) -> ClassifiedReview {
    let extracted = extractor.extract(&review);
    let verdict = classifier.classify(&extracted.features, &extracted.cleaned_text);
    debug!(
        review_id = %review.review_id,
        label = %verdict.label,
        confidence = verdict.confidence,
        "Classified review"
    );
    ClassifiedReview::new(review, extracted, verdict)
}

/// The composed pipeline. Cheap to clone; extractor and classifier are
/// shared read-only.
#[derive(Clone)]
pub struct AnalysisService {
    extractor: Arc<FeatureExtractor>,
    classifier: Arc<ReviewClassifier>,
    concurrency: usize,
    max_reviews: usize,
}

impl AnalysisService {
    pub fn new(extractor: FeatureExtractor, classifier: ReviewClassifier) -> Self {
        Self {
            extractor: Arc::new(extractor),
            classifier: Arc::new(classifier),
            concurrency: DEFAULT_CONCURRENCY,
            max_reviews: DEFAULT_MAX_REVIEWS,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_reviews(mut self, max_reviews: usize) -> Self {
        self.max_reviews = max_reviews;
        self
    }

    pub fn classifier(&self) -> &ReviewClassifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// Extract and classify a single review.
    pub fn classify(&self, review: RawReview) -> ClassifiedReview {
        classify_review(&self.extractor, &self.classifier, review)
    }

    fn cap(&self, mut reviews: Vec<RawReview>) -> Vec<RawReview> {
        if reviews.len() > self.max_reviews {
            warn!(
                received = reviews.len(),
                kept = self.max_reviews,
                "Too many reviews, analyzing only the first batch"
            );
            reviews.truncate(self.max_reviews);
        }
        reviews
    }

    /// Run the whole pipeline on the current thread.
    pub fn analyze_blocking(&self, product: ProductInfo, reviews: Vec<RawReview>) -> AnalysisReport {
        let classified = self
            .cap(reviews)
            .into_iter()
            .map(|review| self.classify(review))
            .collect();
        build_report(product, classified)
    }

    /// Run the pipeline with per-review work on the blocking pool.
    ///
    /// Errors only if a worker task panics or is cancelled; bad review
    /// content never fails the batch.
    pub async fn analyze(
        &self,
        product: ProductInfo,
        reviews: Vec<RawReview>,
    ) -> Result<AnalysisReport> {
        let reviews = self.cap(reviews);
        info!(
            count = reviews.len(),
            concurrency = self.concurrency,
            model = %self.classifier.model_description(),
            "Analyzing reviews"
        );

        let results: Vec<_> = stream::iter(reviews.into_iter().map(|review| {
            let extractor = Arc::clone(&self.extractor);
            let classifier = Arc::clone(&self.classifier);
            tokio::task::spawn_blocking(move || classify_review(&extractor, &classifier, review))
        }))
        .buffered(self.concurrency)
        .collect()
        .await;

        let classified = results
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Review classification worker failed")?;

        Ok(build_report(product, classified))
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(FeatureExtractor::default(), ReviewClassifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::metrics::AuthenticityGrade;

    #[test]
    fn test_empty_input_report() {
        let report = AnalysisService::default().analyze_blocking(ProductInfo::default(), Vec::new());
        assert!(report.success);
        assert_eq!(report.metrics.authenticity_grade, AuthenticityGrade::NotAvailable);
        assert!(report.patterns.is_empty());
        assert_eq!(report.summary, summary::NO_REVIEWS_SUMMARY);
    }

    #[test]
    fn test_max_reviews_cap() {
        let reviews = (0..5)
            .map(|i| RawReview::new(4.0, &format!("Review number {i} about the battery"), true))
            .collect();
        let report = AnalysisService::default()
            .with_max_reviews(3)
            .analyze_blocking(ProductInfo::default(), reviews);
        assert_eq!(report.metrics.total_reviews, 3);
    }

    #[test]
    fn test_product_title_from_reviews() {
        let mut review = RawReview::new(4.0, "Fine.", true);
        review.product_title = Some("Desk Lamp".to_string());
        let report = AnalysisService::default().analyze_blocking(ProductInfo::default(), vec![review]);
        assert_eq!(report.product_title.as_deref(), Some("Desk Lamp"));
    }
}
