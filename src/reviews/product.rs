// Product identifier extraction from catalog URLs.
//
// Catalog URLs come in several shapes (/dp/, /gp/product/, /product/, slug
// paths with tracking suffixes, bare hosts without a scheme). The identifier
// is a 10-character alphanumeric key; users also paste the bare key.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex_lite::Regex;
use tracing::{debug, warn};

static PATH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)/dp/([A-Z0-9]{10})",
        r"(?i)/gp/product/([A-Z0-9]{10})",
        r"(?i)/product/([A-Z0-9]{10})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid product path regex"))
    .collect()
});

static FALLBACK_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/([A-Z0-9]{10})(?:/|$|\?)").expect("valid fallback regex")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{10}$").expect("valid bare id regex"));

/// Extract the product identifier from a URL (or a bare identifier).
///
/// Returns `None` if no identifier can be found.
pub fn extract_product_id(url: &str) -> Option<String> {
    let decoded = percent_decode_str(url.trim()).decode_utf8_lossy();
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        warn!("Empty product URL provided");
        return None;
    }

    let candidate = trimmed.to_uppercase();
    if BARE_ID.is_match(&candidate) {
        return Some(candidate);
    }

    let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    for pattern in PATH_PATTERNS.iter() {
        if let Some(id) = pattern.captures(&url).and_then(|c| c.get(1)) {
            debug!(id = id.as_str(), "Extracted product id from path");
            return Some(id.as_str().to_uppercase());
        }
    }

    // Generic 10-char path segment: only trusted when it looks like an id
    if let Some(id) = FALLBACK_SEGMENT.captures(&url).and_then(|c| c.get(1)) {
        let id = id.as_str().to_uppercase();
        if id.starts_with('B') || id.chars().any(|c| c.is_ascii_digit()) {
            return Some(id);
        }
    }

    warn!(url = %url, "Could not extract product id from URL");
    None
}

/// Whether a string has the shape of a product identifier.
pub fn is_valid_product_id(id: &str) -> bool {
    id.len() == 10 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shapes() {
        let cases = [
            "https://www.amazon.in/dp/B08N5WRWNW",
            "https://www.amazon.in/Apple-iPhone-13-128GB-Midnight/dp/B08N5WRWNW/ref=sr_1_1",
            "https://amazon.in/gp/product/B08N5WRWNW",
            "amazon.in/dp/B08N5WRWNW",
            "https://www.amazon.com/product/b08n5wrwnw?th=1",
            "B08N5WRWNW",
        ];
        for url in cases {
            assert_eq!(
                extract_product_id(url).as_deref(),
                Some("B08N5WRWNW"),
                "failed on {url}"
            );
        }
    }

    #[test]
    fn test_percent_encoded_url() {
        assert_eq!(
            extract_product_id("https%3A%2F%2Fwww.amazon.in%2Fdp%2FB08N5WRWNW").as_deref(),
            Some("B08N5WRWNW")
        );
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(extract_product_id("invalid-url"), None);
        assert_eq!(extract_product_id("   "), None);
    }

    #[test]
    fn test_validate_id() {
        assert!(is_valid_product_id("B08N5WRWNW"));
        assert!(!is_valid_product_id("B08N5"));
        assert!(!is_valid_product_id("B08N5-RWNW"));
    }
}
