// Text cleaning: markup, links, addresses, whitespace.

use std::sync::LazyLock;

use regex_lite::Regex;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));
static EMAIL_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("valid email regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip markup tags, URLs and email-like tokens, collapse whitespace, trim.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = MARKUP_TAG.replace_all(text, "");
    let text = URL.replace_all(&text, "");
    let text = EMAIL_LIKE.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// The lower-cased title + body string used for phrase and pattern matching.
pub fn combined_lowercase(cleaned_title: &str, cleaned_text: &str) -> String {
    format!("{cleaned_title} {cleaned_text}").to_lowercase()
}
