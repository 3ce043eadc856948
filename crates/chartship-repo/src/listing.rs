//! HTML directory-listing parser
//!
//! Artifactory answers a GET on a directory path with a small HTML
//! page of anchor tags, one per entry. Only the link text is used;
//! navigation links (`../` and directory entries) are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="[^"]*">([^<]+)</a>"#).expect("valid anchor regex"));

/// Extract package entry names from an HTML directory listing body.
pub fn listing_entries(body: &str) -> Vec<String> {
    ANCHOR_RE
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .filter(|entry| !entry.ends_with('/'))
        .collect()
}
