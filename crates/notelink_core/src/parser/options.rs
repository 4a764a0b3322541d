//! Image alt option string parsing and serialization.
//!
//! # Responsibility
//! - Split an image alt text into its caption and `|key:value` directives.
//! - Serialize merged options back into alt text on live-edit commit.
//!
//! # Invariants
//! - Parsing never fails: unknown keys are dropped, non-numeric offsets
//!   become `0`, and `showCaption` is `true` only for the literal `"true"`.
//! - Enum-like values (`size`, `align`, `shape`) pass through unvalidated.

use crate::model::segment::ImageOptions;

const OPTION_SEPARATOR: char = '|';

const KEY_SIZE: &str = "size:";
const KEY_ALIGN: &str = "align:";
const KEY_SHAPE: &str = "shape:";
const KEY_SHOW_CAPTION: &str = "showCaption:";
const KEY_OFFSET_X: &str = "offsetX:";
const KEY_OFFSET_Y: &str = "offsetY:";

/// Caption and options split out of one image alt text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAlt {
    pub caption: String,
    pub options: ImageOptions,
}

/// Parses an image alt text into caption and options.
///
/// Without any `|`, the whole text is the caption and `options.caption`
/// mirrors it. Otherwise segment 0 is the caption and each following
/// trimmed segment is matched against the fixed key table.
pub fn parse_image_options(alt_text: &str) -> ParsedAlt {
    if !alt_text.contains(OPTION_SEPARATOR) {
        return ParsedAlt {
            caption: alt_text.to_string(),
            options: ImageOptions {
                caption: Some(alt_text.to_string()),
                ..ImageOptions::default()
            },
        };
    }

    let mut parts = alt_text.split(OPTION_SEPARATOR);
    let caption = parts.next().unwrap_or_default().to_string();
    let mut options = ImageOptions::default();

    for part in parts {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(KEY_SIZE) {
            options.size = Some(value.to_string());
        } else if let Some(value) = part.strip_prefix(KEY_ALIGN) {
            options.align = Some(value.to_string());
        } else if let Some(value) = part.strip_prefix(KEY_SHAPE) {
            options.shape = Some(value.to_string());
        } else if let Some(value) = part.strip_prefix(KEY_SHOW_CAPTION) {
            options.show_caption = Some(value == "true");
        } else if let Some(value) = part.strip_prefix(KEY_OFFSET_X) {
            options.offset_x = Some(parse_leading_int(value));
        } else if let Some(value) = part.strip_prefix(KEY_OFFSET_Y) {
            options.offset_y = Some(parse_leading_int(value));
        }
    }

    ParsedAlt { caption, options }
}

/// Serializes caption and options back into alt text.
///
/// Keys are emitted in the fixed order size, align, shape, showCaption,
/// offsetX, offsetY. `width`, `height` and `caption` have no key in the
/// grammar and are not written. With no keyed field set, the bare caption
/// is returned.
pub fn serialize_image_alt(caption: &str, options: &ImageOptions) -> String {
    let mut alt = caption.to_string();
    let mut push = |key: &str, value: &str| {
        alt.push(OPTION_SEPARATOR);
        alt.push_str(key);
        alt.push_str(value);
    };

    if let Some(size) = options.size.as_deref() {
        push(KEY_SIZE, size);
    }
    if let Some(align) = options.align.as_deref() {
        push(KEY_ALIGN, align);
    }
    if let Some(shape) = options.shape.as_deref() {
        push(KEY_SHAPE, shape);
    }
    if let Some(show_caption) = options.show_caption {
        push(KEY_SHOW_CAPTION, if show_caption { "true" } else { "false" });
    }
    if let Some(offset_x) = options.offset_x {
        push(KEY_OFFSET_X, &offset_x.to_string());
    }
    if let Some(offset_y) = options.offset_y {
        push(KEY_OFFSET_Y, &offset_y.to_string());
    }

    alt
}

/// Reads an optional sign and leading digits, ignoring trailing garbage.
///
/// Returns `0` when no digits are present and saturates on overflow.
fn parse_leading_int(value: &str) -> i32 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut magnitude: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return 0;
    }
    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
