//! Content tokenizer composing image and wiki-link extraction.
//!
//! # Responsibility
//! - Produce one ordered segment list per note body.
//! - Give images precedence over wiki links.
//!
//! # Invariants
//! - Images are extracted first; each gap between images is scanned for
//!   wiki links independently, so alt text is never re-parsed as a link.
//! - Spans are contiguous, ordered, and cover the whole input.

use crate::model::segment::{wiki_link, ContentSegment};
use crate::parser::image::{extract_images, ImageMatch};
use crate::parser::options::parse_image_options;
use crate::parser::wiki::extract_wiki_links_spanned;
use crate::parser::SpannedSegment;
use log::debug;

/// Parses a note body into ordered segments.
///
/// Never fails; empty content yields an empty list.
pub fn parse_content(content: &str) -> Vec<ContentSegment> {
    tokenize(content)
        .into_iter()
        .map(|spanned| spanned.segment)
        .collect()
}

/// Parses a note body into segments paired with their byte ranges.
pub fn tokenize(content: &str) -> Vec<SpannedSegment> {
    if content.is_empty() {
        return Vec::new();
    }

    let images = extract_images(content);
    let segments = if images.is_empty() {
        extract_wiki_links_spanned(content, 0)
    } else {
        split_around_images(content, &images)
    };

    debug!(
        "event=tokenize module=parser status=ok bytes={} images={} segments={}",
        content.len(),
        images.len(),
        segments.len()
    );
    segments
}

fn split_around_images(content: &str, images: &[ImageMatch]) -> Vec<SpannedSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for image in images {
        if image.start > cursor {
            segments.extend(extract_wiki_links_spanned(
                &content[cursor..image.start],
                cursor,
            ));
        }
        let parsed = parse_image_options(&image.alt);
        segments.push(SpannedSegment {
            range: image.start..image.end,
            segment: ContentSegment::Image {
                url: image.url.clone(),
                caption: parsed.caption,
                alt: image.alt.clone(),
                options: parsed.options,
            },
        });
        cursor = image.end;
    }
    if cursor < content.len() {
        segments.extend(extract_wiki_links_spanned(&content[cursor..], cursor));
    }
    segments
}

/// Rewrites every wiki link titled `old_title` (case-insensitive) to
/// `new_title`.
///
/// Only real wiki-link segments are touched; text inside image markup is
/// left alone. Returns `None` when nothing matched.
pub fn rewrite_wiki_links(content: &str, old_title: &str, new_title: &str) -> Option<String> {
    let needle = old_title.to_lowercase();
    let mut rewritten = String::with_capacity(content.len());
    let mut changed = 0usize;

    for spanned in tokenize(content) {
        match &spanned.segment {
            ContentSegment::WikiLink { title } if title.to_lowercase() == needle => {
                rewritten.push_str(&wiki_link(new_title));
                changed += 1;
            }
            _ => rewritten.push_str(&content[spanned.range]),
        }
    }

    if changed == 0 {
        return None;
    }
    debug!("event=rewrite_wiki_links module=parser status=ok rewritten={changed}");
    Some(rewritten)
}
