//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the content engine to Dart via FRB as sync calls.
//! - Flatten engine types into simple records with string ids.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Notes with an unparsable id are skipped, never fatal.

use log::warn;
use notelink_core::{
    backlinks, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_content, parse_image_options, ping as ping_inner,
    serialize_image_alt as serialize_image_alt_inner, ContentSegment, ImageOptions,
    LinkMatchPolicy, LinkResolver, Note, NoteId,
};

const SEGMENT_KIND_TEXT: &str = "text";
const SEGMENT_KIND_WIKI_LINK: &str = "wiki_link";
const SEGMENT_KIND_IMAGE: &str = "image";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose engine crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes engine logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Note snapshot passed in from Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiNoteRef {
    /// UUID in string form.
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Flat image options record. Mirrors `ImageOptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FfiImageOptions {
    pub size: Option<String>,
    pub align: Option<String>,
    pub shape: Option<String>,
    pub show_caption: Option<bool>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub caption: Option<String>,
}

/// Flat segment record.
///
/// `kind` is `text|wiki_link|image`; `text` carries the literal run, the
/// link title, or the image alt text respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiSegment {
    pub kind: String,
    pub text: String,
    pub url: Option<String>,
    pub caption: Option<String>,
    pub options: Option<FfiImageOptions>,
}

/// Caption and options of one alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiParsedAlt {
    pub caption: String,
    pub options: FfiImageOptions,
}

/// Parses one note body into flat segments.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never fails; empty content returns an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_note_content(content: String) -> Vec<FfiSegment> {
    parse_content(content.as_str())
        .into_iter()
        .map(to_ffi_segment)
        .collect()
}

/// Resolves a wiki-link title to a note id.
///
/// `policy` is `exact_then_substring|first_match|exact`; `None` or an
/// unknown value uses the default policy.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_link(
    title: String,
    notes: Vec<FfiNoteRef>,
    policy: Option<String>,
) -> Option<String> {
    let notes = to_notes(notes);
    let resolver = LinkResolver::new(parse_policy(policy.as_deref()));
    resolver
        .resolve(title.as_str(), &notes)
        .map(|note| note.id.to_string())
}

/// Lists ids of notes whose body links to `title`, excluding `note_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_backlinks(note_id: String, title: String, notes: Vec<FfiNoteRef>) -> Vec<String> {
    let Ok(note_id) = NoteId::parse_str(note_id.trim()) else {
        warn!("event=ffi_backlinks module=ffi status=error reason=invalid_note_id");
        return Vec::new();
    };
    let notes = to_notes(notes);
    backlinks(note_id, title.as_str(), &notes)
        .into_iter()
        .map(|note| note.id.to_string())
        .collect()
}

/// Splits image alt text into caption and options.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_image_alt(alt: String) -> FfiParsedAlt {
    let parsed = parse_image_options(alt.as_str());
    FfiParsedAlt {
        caption: parsed.caption,
        options: to_ffi_options(parsed.options),
    }
}

/// Serializes caption and options back into alt text.
#[flutter_rust_bridge::frb(sync)]
pub fn serialize_image_alt(caption: String, options: FfiImageOptions) -> String {
    serialize_image_alt_inner(caption.as_str(), &from_ffi_options(options))
}

fn parse_policy(raw: Option<&str>) -> LinkMatchPolicy {
    let Some(raw) = raw.map(str::trim) else {
        return LinkMatchPolicy::default();
    };
    [
        LinkMatchPolicy::ExactThenSubstring,
        LinkMatchPolicy::FirstMatch,
        LinkMatchPolicy::Exact,
    ]
    .into_iter()
    .find(|policy| policy.as_str() == raw)
    .unwrap_or_default()
}

fn to_notes(notes: Vec<FfiNoteRef>) -> Vec<Note> {
    let total = notes.len();
    let parsed: Vec<Note> = notes
        .into_iter()
        .filter_map(|note| {
            NoteId::parse_str(note.id.trim())
                .ok()
                .map(|id| Note::with_id(id, note.title, note.content))
        })
        .collect();
    if parsed.len() != total {
        warn!(
            "event=ffi_notes module=ffi status=partial skipped={} total={}",
            total - parsed.len(),
            total
        );
    }
    parsed
}

fn to_ffi_segment(segment: ContentSegment) -> FfiSegment {
    match segment {
        ContentSegment::Text { content } => FfiSegment {
            kind: SEGMENT_KIND_TEXT.to_string(),
            text: content,
            url: None,
            caption: None,
            options: None,
        },
        ContentSegment::WikiLink { title } => FfiSegment {
            kind: SEGMENT_KIND_WIKI_LINK.to_string(),
            text: title,
            url: None,
            caption: None,
            options: None,
        },
        ContentSegment::Image {
            url,
            caption,
            alt,
            options,
        } => FfiSegment {
            kind: SEGMENT_KIND_IMAGE.to_string(),
            text: alt,
            url: Some(url),
            caption: Some(caption),
            options: Some(to_ffi_options(options)),
        },
    }
}

fn to_ffi_options(options: ImageOptions) -> FfiImageOptions {
    FfiImageOptions {
        size: options.size,
        align: options.align,
        shape: options.shape,
        show_caption: options.show_caption,
        offset_x: options.offset_x,
        offset_y: options.offset_y,
        width: options.width,
        height: options.height,
        caption: options.caption,
    }
}

fn from_ffi_options(options: FfiImageOptions) -> ImageOptions {
    ImageOptions {
        size: options.size,
        align: options.align,
        shape: options.shape,
        show_caption: options.show_caption,
        offset_x: options.offset_x,
        offset_y: options.offset_y,
        width: options.width,
        height: options.height,
        caption: options.caption,
    }
}
