//! Live edit session for one embedded image.

use crate::model::segment::{
    image_markup, ContentSegment, ImageAlign, ImageOptions, ImageShape, ImageSize,
};
use crate::parser::options::serialize_image_alt;
use crate::parser::tokenizer::tokenize;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Option patch applied over parsed image options.
///
/// Unset fields leave the base value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOverlay {
    pub size: Option<ImageSize>,
    pub align: Option<ImageAlign>,
    pub shape: Option<ImageShape>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageOverlay {
    /// Shallow override: every set overlay field replaces the base field.
    pub fn apply(&self, base: &ImageOptions) -> ImageOptions {
        let mut merged = base.clone();
        if let Some(size) = self.size {
            merged.size = Some(size.as_str().to_string());
        }
        if let Some(align) = self.align {
            merged.align = Some(align.as_str().to_string());
        }
        if let Some(shape) = self.shape {
            merged.shape = Some(shape.as_str().to_string());
        }
        if self.offset_x.is_some() {
            merged.offset_x = self.offset_x;
        }
        if self.offset_y.is_some() {
            merged.offset_y = self.offset_y;
        }
        if self.width.is_some() {
            merged.width = self.width;
        }
        if self.height.is_some() {
            merged.height = self.height;
        }
        merged
    }

    /// Folds a newer patch into this one.
    pub fn extend(&mut self, patch: ImageOverlay) {
        self.size = patch.size.or(self.size);
        self.align = patch.align.or(self.align);
        self.shape = patch.shape.or(self.shape);
        self.offset_x = patch.offset_x.or(self.offset_x);
        self.offset_y = patch.offset_y.or(self.offset_y);
        self.width = patch.width.or(self.width);
        self.height = patch.height.or(self.height);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Live edit failures. None of these touch note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// No segment is selected.
    NoActiveEdit,
    /// Content no longer has a segment at the selected index.
    SegmentOutOfRange { index: usize, len: usize },
    /// The selected segment is not an image.
    NotAnImage(usize),
}

impl Display for OverlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveEdit => write!(f, "no image segment is in live edit"),
            Self::SegmentOutOfRange { index, len } => {
                write!(f, "segment index {index} out of range for {len} segments")
            }
            Self::NotAnImage(index) => write!(f, "segment {index} is not an image"),
        }
    }
}

impl Error for OverlayError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveEdit {
    index: usize,
    overlay: ImageOverlay,
}

/// Tracks the single image segment currently being adjusted.
#[derive(Debug, Clone, Default)]
pub struct LiveEditSession {
    active: Option<ActiveEdit>,
}

impl LiveEditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts segment `index` into live edit.
    ///
    /// Selecting another segment discards the previous overlay; reselecting
    /// the active segment keeps it.
    pub fn select(&mut self, index: usize) {
        if let Some(active) = &self.active {
            if active.index == index {
                return;
            }
            debug!(
                "event=live_edit_discard module=overlay status=ok index={} reason=reselect",
                active.index
            );
        }
        self.active = Some(ActiveEdit {
            index,
            overlay: ImageOverlay::default(),
        });
    }

    /// Leaves live edit, returning the discarded overlay if any.
    pub fn deselect(&mut self) -> Option<ImageOverlay> {
        self.active.take().map(|active| active.overlay)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.index)
    }

    pub fn overlay(&self) -> Option<&ImageOverlay> {
        self.active.as_ref().map(|active| &active.overlay)
    }

    /// Folds `patch` into the active overlay.
    pub fn adjust(&mut self, patch: ImageOverlay) -> Result<(), OverlayError> {
        let active = self.active.as_mut().ok_or(OverlayError::NoActiveEdit)?;
        active.overlay.extend(patch);
        Ok(())
    }

    /// Options to render for segment `index` this frame.
    pub fn merged(&self, index: usize, base: &ImageOptions) -> ImageOptions {
        match &self.active {
            Some(active) if active.index == index => active.overlay.apply(base),
            _ => base.clone(),
        }
    }

    /// Writes the merged options of the active image into `content`.
    ///
    /// Returns the new content and ends the session. On error the session
    /// is left as is and `content` is not modified.
    pub fn commit(&mut self, content: &str) -> Result<String, OverlayError> {
        let active = self.active.as_ref().ok_or(OverlayError::NoActiveEdit)?;
        let spanned = tokenize(content);
        let len = spanned.len();
        let target = spanned
            .into_iter()
            .nth(active.index)
            .ok_or(OverlayError::SegmentOutOfRange {
                index: active.index,
                len,
            })?;

        let ContentSegment::Image {
            url,
            caption,
            options,
            ..
        } = &target.segment
        else {
            return Err(OverlayError::NotAnImage(active.index));
        };

        let merged = active.overlay.apply(options);
        let markup = image_markup(&serialize_image_alt(caption, &merged), url);
        let mut committed = String::with_capacity(content.len() + markup.len());
        committed.push_str(&content[..target.range.start]);
        committed.push_str(&markup);
        committed.push_str(&content[target.range.end..]);

        info!(
            "event=live_edit_commit module=overlay status=ok index={}",
            active.index
        );
        self.active = None;
        Ok(committed)
    }
}
