//! Image micro-syntax extraction.
//!
//! # Invariants
//! - Matches are returned left to right and never overlap.
//! - Each call runs its own match iterator; no cursor survives a call.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid image regex"));

/// One `![alt](url)` occurrence. `start`/`end` are byte offsets into the
/// scanned text, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMatch {
    pub start: usize,
    pub end: usize,
    pub alt: String,
    pub url: String,
}

/// Scans `text` for image syntax. An empty result is the common case.
pub fn extract_images(text: &str) -> Vec<ImageMatch> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(ImageMatch {
                start: whole.start(),
                end: whole.end(),
                alt: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                url: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            })
        })
        .collect()
}
