//! Wiki-link title resolution.
//!
//! # Responsibility
//! - Map a bare link title to a note of the caller's collection.
//! - Report outgoing links of a note body with their resolution.
//!
//! # Invariants
//! - Collection order breaks ties within each policy tier.
//! - Unresolved is `None`, not an error.

use crate::config::{EngineConfig, LinkMatchPolicy};
use crate::model::note::{Note, NoteId};
use crate::model::segment::ContentSegment;
use crate::parser::tokenizer::parse_content;
use log::debug;

/// Resolves `title` with the legacy first-match policy.
///
/// Returns the first note, in collection order, whose title
/// case-insensitively equals or contains `title`.
pub fn resolve<'a>(title: &str, notes: &'a [Note]) -> Option<&'a Note> {
    LinkResolver::new(LinkMatchPolicy::FirstMatch).resolve(title, notes)
}

/// Title resolver bound to one matching policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkResolver {
    policy: LinkMatchPolicy,
}

impl LinkResolver {
    pub fn new(policy: LinkMatchPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.link_match)
    }

    pub fn policy(&self) -> LinkMatchPolicy {
        self.policy
    }

    /// Resolves `title` against `notes` using the configured policy.
    pub fn resolve<'a>(&self, title: &str, notes: &'a [Note]) -> Option<&'a Note> {
        let needle = title.to_lowercase();
        match self.policy {
            LinkMatchPolicy::FirstMatch => notes.iter().find(|note| {
                let candidate = note.title.to_lowercase();
                candidate == needle || candidate.contains(&needle)
            }),
            LinkMatchPolicy::Exact => find_exact(&needle, notes),
            LinkMatchPolicy::ExactThenSubstring => find_exact(&needle, notes).or_else(|| {
                notes
                    .iter()
                    .find(|note| note.title.to_lowercase().contains(&needle))
            }),
        }
    }
}

fn find_exact<'a>(needle: &str, notes: &'a [Note]) -> Option<&'a Note> {
    notes
        .iter()
        .find(|note| note.title.to_lowercase() == needle)
}

/// One wiki link found in a note body, with its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingLink {
    pub title: String,
    /// `None` marks a broken link.
    pub target: Option<NoteId>,
}

impl OutgoingLink {
    pub fn is_broken(&self) -> bool {
        self.target.is_none()
    }
}

/// Lists every wiki link in `content`, in parse order, with its target.
pub fn outgoing_links(content: &str, notes: &[Note], resolver: &LinkResolver) -> Vec<OutgoingLink> {
    let links: Vec<OutgoingLink> = parse_content(content)
        .into_iter()
        .filter_map(|segment| match segment {
            ContentSegment::WikiLink { title } => {
                let target = resolver.resolve(&title, notes).map(|note| note.id);
                Some(OutgoingLink { title, target })
            }
            _ => None,
        })
        .collect();

    debug!(
        "event=outgoing_links module=links status=ok policy={} links={} broken={}",
        resolver.policy().as_str(),
        links.len(),
        links.iter().filter(|link| link.is_broken()).count()
    );
    links
}
