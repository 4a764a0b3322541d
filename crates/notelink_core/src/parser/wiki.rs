//! Wiki-link micro-syntax extraction.
//!
//! # Invariants
//! - The returned segments cover the input exactly, in order.
//! - An unterminated `[[` stays literal text.

use crate::model::segment::ContentSegment;
use crate::parser::SpannedSegment;
use once_cell::sync::Lazy;
use regex::Regex;

static WIKI_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wiki link regex"));

/// Splits `text` into alternating text and wiki-link segments.
pub fn extract_wiki_links(text: &str) -> Vec<ContentSegment> {
    extract_wiki_links_spanned(text, 0)
        .into_iter()
        .map(|spanned| spanned.segment)
        .collect()
}

/// Same as [`extract_wiki_links`], with byte ranges shifted by `offset` so a
/// gap between images reports positions in the full note body.
pub(crate) fn extract_wiki_links_spanned(text: &str, offset: usize) -> Vec<SpannedSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in WIKI_LINK_RE.captures_iter(text) {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(SpannedSegment {
                range: offset + cursor..offset + whole.start(),
                segment: ContentSegment::text(&text[cursor..whole.start()]),
            });
        }
        segments.push(SpannedSegment {
            range: offset + whole.start()..offset + whole.end(),
            segment: ContentSegment::wiki_link(title.as_str()),
        });
        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(SpannedSegment {
            range: offset + cursor..offset + text.len(),
            segment: ContentSegment::text(&text[cursor..]),
        });
    }

    segments
}
