//! Note body parsing.
//!
//! # Responsibility
//! - Recognize the wiki-link and annotated-image micro-syntaxes.
//! - Turn raw note text into ordered, typed segments.
//!
//! # Invariants
//! - Parsing never fails on any input string.
//! - Scanners are stateless across calls; every call owns its match cursor.

pub mod cache;
pub mod image;
pub mod options;
pub mod tokenizer;
pub mod wiki;

use crate::model::segment::ContentSegment;
use std::ops::Range;

/// A segment together with its byte range in the parsed note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedSegment {
    pub range: Range<usize>,
    pub segment: ContentSegment,
}
