// Raw review records and upstream payload normalization.
//
// Review sources disagree on field names and types: ratings arrive as numbers
// or as "4.0 out of 5 stars", verified flags as booleans or "yes", helpful
// votes as counts or "12 people found this helpful". Everything is normalized
// here so that one malformed record degrades to safe defaults instead of
// aborting the batch.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Rating used when the upstream value is missing or unparsable.
pub const DEFAULT_RATING: f64 = 3.0;

/// Reviewer name used when the upstream record has none.
pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)").expect("valid number regex"));

/// A single review as received from the review source.
///
/// Immutable once built: the pipeline derives features and a verdict from it
/// but never edits the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    pub review_id: String,
    pub reviewer_name: String,
    /// Star rating, always within 1.0..=5.0
    pub rating: f64,
    pub title: String,
    pub text: String,
    pub date: String,
    pub verified_purchase: bool,
    pub helpful_votes: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
}

impl RawReview {
    /// Build a review with the given rating, text and verified flag; every
    /// other field takes its default. Handy for callers that already hold
    /// clean data.
    pub fn new(rating: f64, text: &str, verified_purchase: bool) -> Self {
        Self {
            review_id: String::new(),
            reviewer_name: ANONYMOUS_REVIEWER.to_string(),
            rating: clamp_rating(rating),
            title: String::new(),
            text: text.to_string(),
            date: String::new(),
            verified_purchase,
            helpful_votes: 0,
            images: Vec::new(),
            product_title: None,
            product_image: None,
        }
    }

    /// Set the review title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Normalize one upstream record. `index` is used to synthesize an id
    /// when the record carries none.
    pub fn from_payload(record: &Value, index: usize) -> Self {
        let rating = first_present(record, &["rating", "stars", "review_rating"])
            .map(normalize_rating)
            .unwrap_or(DEFAULT_RATING);

        let text = first_text(record, &["review_text", "text", "body", "content", "review"])
            .unwrap_or_default();
        let title = first_text(record, &["review_title", "title", "headline"]).unwrap_or_default();
        let reviewer_name = first_text(
            record,
            &["author_name", "reviewer_name", "author", "name", "reviewer"],
        )
        .unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string());
        let date = first_text(record, &["date", "review_date", "created_at", "timestamp"])
            .unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());

        let verified_purchase = first_present(record, &["verified_purchase", "verified"])
            .map(normalize_verified)
            .unwrap_or(false);
        let helpful_votes = first_present(record, &["helpful_votes", "helpful_count", "helpful"])
            .map(normalize_helpful_votes)
            .unwrap_or(0);

        let images = first_present(record, &["images", "review_images"])
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let review_id = first_present(record, &["review_id", "id"])
            .and_then(|v| match v {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| format!("review_{index}"));

        Self {
            review_id,
            reviewer_name,
            rating,
            title,
            text,
            date,
            verified_purchase,
            helpful_votes,
            images,
            product_title: first_text(record, &["product_title"]),
            product_image: first_text(record, &["product_image", "main_image"]),
        }
    }
}

/// Parse an upstream payload into reviews.
///
/// Accepts a bare array of review records, an array mixing records with
/// product wrappers (`{"title": ..., "reviews": [...]}`), or a single product
/// wrapper object. Product title/image from a wrapper are copied onto its
/// reviews. Entries that are not JSON objects are skipped with a warning.
pub fn parse_payload(payload: &Value) -> Vec<RawReview> {
    let entries: Vec<&Value> = match payload {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![payload],
        _ => {
            warn!("Review payload is neither an array nor an object");
            return Vec::new();
        }
    };

    let mut reviews = Vec::new();
    for entry in entries {
        if !entry.is_object() {
            warn!(index = reviews.len(), "Skipping non-object review entry");
            continue;
        }

        if let Some(nested) = entry.get("reviews").and_then(Value::as_array) {
            let product_title = first_text(entry, &["title", "product_title"]);
            let product_image = first_text(entry, &["image", "product_image", "main_image"]);
            for record in nested.iter().filter(|r| r.is_object()) {
                let mut review = RawReview::from_payload(record, reviews.len());
                if review.product_title.is_none() {
                    review.product_title = product_title.clone();
                }
                if review.product_image.is_none() {
                    review.product_image = product_image.clone();
                }
                reviews.push(review);
            }
            continue;
        }

        reviews.push(RawReview::from_payload(entry, reviews.len()));
    }

    debug!(count = reviews.len(), "Standardized review payload");
    reviews
}

/// Normalize a rating value of any JSON type to 1.0..=5.0.
///
/// Numbers are clamped; strings use their first number ("4.0 out of 5
/// stars" -> 4.0). Zero, negative, non-finite and unparsable values become
/// `DEFAULT_RATING`.
pub fn normalize_rating(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(sanitize_rating).unwrap_or(DEFAULT_RATING),
        Value::String(s) => parse_rating_text(s),
        _ => DEFAULT_RATING,
    }
}

/// Parse a textual rating such as "4.0 out of 5 stars".
pub fn parse_rating_text(text: &str) -> f64 {
    FIRST_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(sanitize_rating)
        .unwrap_or(DEFAULT_RATING)
}

fn sanitize_rating(rating: f64) -> f64 {
    if !rating.is_finite() || rating <= 0.0 {
        DEFAULT_RATING
    } else {
        clamp_rating(rating)
    }
}

fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        DEFAULT_RATING
    } else {
        rating.clamp(1.0, 5.0)
    }
}

/// Normalize a verified-purchase flag: booleans pass through, strings are
/// true for "true", "yes" or "verified" (case-insensitive).
pub fn normalize_verified(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "verified"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    }
}

/// Normalize a helpful-vote count: numbers are truncated to a non-negative
/// integer, strings use their first number.
pub fn normalize_helpful_votes(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.min(u32::MAX as f64) as u32)
            .unwrap_or(0),
        Value::String(s) => FIRST_NUMBER
            .captures(s)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().split('.').next().and_then(|d| d.parse().ok()))
            .unwrap_or(0),
        _ => 0,
    }
}

/// First key whose value is present and not null/false/empty, mirroring how
/// upstream payloads leave alternate fields blank.
fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|k| record.get(*k)).find(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn first_text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| record.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rating_from_text() {
        assert_eq!(parse_rating_text("4.0 out of 5 stars"), 4.0);
        assert_eq!(parse_rating_text("5 stars"), 5.0);
        assert_eq!(parse_rating_text("no rating here"), DEFAULT_RATING);
    }

    #[test]
    fn test_rating_clamped_to_star_range() {
        assert_eq!(normalize_rating(&json!(7.5)), 5.0);
        assert_eq!(normalize_rating(&json!(0.5)), 1.0);
        assert_eq!(normalize_rating(&json!(0)), DEFAULT_RATING);
        assert_eq!(normalize_rating(&json!(null)), DEFAULT_RATING);
    }

    #[test]
    fn test_verified_and_helpful_strings() {
        assert!(normalize_verified(&json!("Verified")));
        assert!(normalize_verified(&json!("yes")));
        assert!(!normalize_verified(&json!("no")));
        assert_eq!(normalize_helpful_votes(&json!("12 people found this helpful")), 12);
        assert_eq!(normalize_helpful_votes(&json!(-3)), 0);
    }

    #[test]
    fn test_from_payload_uses_aliases() {
        let record = json!({
            "review_text": "Works fine",
            "review_title": "OK",
            "stars": "4.0 out of 5 stars",
            "author": "Sam",
            "verified": "true",
        });
        let review = RawReview::from_payload(&record, 7);
        assert_eq!(review.text, "Works fine");
        assert_eq!(review.title, "OK");
        assert_eq!(review.rating, 4.0);
        assert_eq!(review.reviewer_name, "Sam");
        assert!(review.verified_purchase);
        assert_eq!(review.review_id, "review_7");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let review = RawReview::from_payload(&json!({}), 0);
        assert_eq!(review.rating, DEFAULT_RATING);
        assert_eq!(review.text, "");
        assert_eq!(review.reviewer_name, ANONYMOUS_REVIEWER);
        assert!(!review.verified_purchase);
        assert!(!review.date.is_empty());
    }

    #[test]
    fn test_product_wrapper_is_flattened() {
        let payload = json!([{
            "title": "Headphones",
            "image": "https://example.com/h.jpg",
            "reviews": [
                {"text": "Good", "rating": 4},
                {"text": "Bad", "rating": 1}
            ]
        }]);
        let reviews = parse_payload(&payload);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].product_title.as_deref(), Some("Headphones"));
        assert_eq!(reviews[1].review_id, "review_1");
        assert_eq!(reviews[1].rating, 1.0);
    }
}
