//! Note content parsing and cross-reference engine.
//!
//! Turns raw note text into renderable segments, resolves `[[Title]]` links
//! against a caller-supplied note collection, and derives backlinks.

pub mod config;
pub mod links;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod parser;

pub use config::{ConfigError, EngineConfig, LinkMatchPolicy};
pub use links::backlinks::{backlinks, references_title};
pub use links::index::LinkIndex;
pub use links::resolver::{outgoing_links, resolve, LinkResolver, OutgoingLink};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use model::segment::{
    image_markup, reconstruct, wiki_link, ContentSegment, EffectiveImageOptions, ImageAlign,
    ImageOptions, ImageShape, ImageSize,
};
pub use overlay::live_edit::{ImageOverlay, LiveEditSession, OverlayError};
pub use parser::cache::SegmentCache;
pub use parser::image::{extract_images, ImageMatch};
pub use parser::options::{parse_image_options, serialize_image_alt, ParsedAlt};
pub use parser::tokenizer::{parse_content, rewrite_wiki_links, tokenize};
pub use parser::wiki::extract_wiki_links;
pub use parser::SpannedSegment;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the engine crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
