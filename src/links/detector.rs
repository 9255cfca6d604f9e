//! URL detection in text

use regex::Regex;
use std::sync::LazyLock;

/// Regex for detecting URLs: scheme followed by any run of non-whitespace
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// Return the first URL in a string, exactly as written
#[must_use]
pub fn first_url(text: &str) -> Option<&str> {
    URL_REGEX.find(text).map(|m| m.as_str())
}

/// Detect all URLs in a string
#[must_use]
pub fn detect_urls(text: &str) -> Vec<&str> {
    URL_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}
