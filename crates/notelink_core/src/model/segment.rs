//! Parsed content segments and image rendering options.
//!
//! # Responsibility
//! - Define the ordered, typed segment union produced per note body.
//! - Define image options as parsed from the option string, plus the
//!   render-time interpretation with defaults applied.
//!
//! # Invariants
//! - `ContentSegment::to_source()` returns the exact source text the segment
//!   was parsed from, so `reconstruct(parse_content(s)) == s`.
//! - `WikiLink` is resolution-agnostic: it stores the title only.
//! - Option values are not validated at parse time; unknown enum values are
//!   interpreted with a fallback by `ImageOptions::effective`.

use serde::{Deserialize, Serialize};

/// One unit of a parsed note body, in original document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSegment {
    /// Literal text run, rendered verbatim.
    Text { content: String },
    /// Unresolved reference by display title.
    WikiLink { title: String },
    /// Embedded image reference.
    Image {
        url: String,
        caption: String,
        /// Verbatim alt text (caption plus option string).
        alt: String,
        options: ImageOptions,
    },
}

impl ContentSegment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn wiki_link(title: impl Into<String>) -> Self {
        Self::WikiLink {
            title: title.into(),
        }
    }

    /// Returns the source text this segment was parsed from.
    pub fn to_source(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::WikiLink { title } => wiki_link(title),
            Self::Image { url, alt, .. } => image_markup(alt, url),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Builds the canonical wiki link markup for a title.
pub fn wiki_link(title: &str) -> String {
    format!("[[{title}]]")
}

/// Builds image markup from alt text and url.
pub fn image_markup(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

/// Concatenates the source form of every segment in order.
pub fn reconstruct(segments: &[ContentSegment]) -> String {
    segments.iter().map(ContentSegment::to_source).collect()
}

/// Image rendering directives parsed from the alt option string.
///
/// All fields are optional. Enum-like fields keep the raw string so that
/// invalid values survive parsing and are interpreted at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_caption: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<i32>,
    /// Render-only pixel width; not part of the option string grammar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Render-only pixel height; not part of the option string grammar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Set only for the caption-only alt form (no `|`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageOptions {
    /// Returns options with renderer defaults applied.
    ///
    /// `caption` is the segment caption; it decides the `show_caption`
    /// default when the option string does not set it.
    pub fn effective(&self, caption: &str) -> EffectiveImageOptions {
        EffectiveImageOptions {
            size: self
                .size
                .as_deref()
                .and_then(ImageSize::parse_lenient)
                .unwrap_or_default(),
            align: self
                .align
                .as_deref()
                .and_then(ImageAlign::parse_lenient)
                .unwrap_or_default(),
            shape: self
                .shape
                .as_deref()
                .and_then(ImageShape::parse_lenient)
                .unwrap_or_default(),
            show_caption: self.show_caption.unwrap_or(!caption.is_empty()),
            offset_x: self.offset_x.unwrap_or(0),
            offset_y: self.offset_y.unwrap_or(0),
            width: self.width,
            height: self.height,
        }
    }
}

/// Image options after defaults and enum fallbacks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveImageOptions {
    pub size: ImageSize,
    pub align: ImageAlign,
    pub shape: ImageShape,
    pub show_caption: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Rendered image size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Full => "full",
        }
    }

    /// Maps an option value to a size; unknown values yield `None`.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

/// Horizontal image alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl ImageAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Image frame shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageShape {
    #[default]
    Rounded,
    Circle,
    Bordered,
}

impl ImageShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Circle => "circle",
            Self::Bordered => "bordered",
        }
    }

    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim() {
            "rounded" => Some(Self::Rounded),
            "circle" => Some(Self::Circle),
            "bordered" => Some(Self::Bordered),
            _ => None,
        }
    }
}
