//! Backlinks by full collection scan.
//!
//! # Invariants
//! - A note never appears in its own backlink set.
//! - Matching is exact on the current title, case-insensitive, and literal:
//!   the body must contain `[[title]]`.
//! - Cost is O(notes × content length) per call; see [`crate::LinkIndex`]
//!   for the indexed variant.

use crate::model::note::{Note, NoteId};
use crate::model::segment::wiki_link;
use log::debug;

/// Returns the notes other than `note_id` whose body references
/// `note_title`, in collection order.
pub fn backlinks<'a>(note_id: NoteId, note_title: &str, all_notes: &'a [Note]) -> Vec<&'a Note> {
    let pattern = wiki_link(&note_title.to_lowercase());
    let sources: Vec<&Note> = all_notes
        .iter()
        .filter(|note| note.id != note_id)
        .filter(|note| note.content.to_lowercase().contains(&pattern))
        .collect();

    debug!(
        "event=backlinks_scan module=links status=ok note_id={} scanned={} found={}",
        note_id,
        all_notes.len(),
        sources.len()
    );
    sources
}

/// Returns whether `content` contains the literal `[[title]]` pattern,
/// ignoring case.
pub fn references_title(content: &str, title: &str) -> bool {
    content
        .to_lowercase()
        .contains(&wiki_link(&title.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::{backlinks, references_title};
    use crate::model::note::Note;

    #[test]
    fn matches_exact_title_case_insensitively() {
        let target = Note::new("Plan", "");
        let source = Note::new("Source", "see [[PLAN]]");
        let partial = Note::new("Partial", "see [[Plan B]]");
        let notes = vec![target.clone(), source.clone(), partial];

        let found = backlinks(target.id, &target.title, &notes);
        assert_eq!(found, vec![&source]);
    }

    #[test]
    fn excludes_self_references() {
        let note = Note::new("Loop", "I link to [[Loop]]");
        let notes = vec![note.clone()];
        assert!(backlinks(note.id, &note.title, &notes).is_empty());
    }

    #[test]
    fn literal_test_ignores_link_boundaries() {
        assert!(references_title("x [[[plan]] y", "Plan"));
        assert!(!references_title("x [[plan y", "Plan"));
    }
}
