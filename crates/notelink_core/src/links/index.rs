//! Inverted backlink index.
//!
//! # Responsibility
//! - Map lowercase titles to the ids of notes whose body references them,
//!   so backlink queries do not rescan every note body.
//! - Stay current through per-note `upsert`/`remove` on save and delete.
//!
//! # Invariants
//! - `backlinks` returns exactly what [`crate::links::backlinks::backlinks`]
//!   returns for the indexed bodies, in the caller's collection order.
//! - Keys are taken from every `[[` opener, including overlapping ones, up
//!   to the first following `]]`.

use crate::links::backlinks::references_title;
use crate::model::note::{Note, NoteId};
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};

const LINK_OPEN: &[u8] = b"[[";
const LINK_CLOSE: &str = "]]";

struct IndexedNote {
    keys: BTreeSet<String>,
    lowered: String,
}

/// Side table from referenced title to referencing note ids.
#[derive(Default)]
pub struct LinkIndex {
    by_title: BTreeMap<String, BTreeSet<NoteId>>,
    by_note: BTreeMap<NoteId, IndexedNote>,
}

impl LinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over a whole collection.
    pub fn build(notes: &[Note]) -> Self {
        let mut index = Self::new();
        for note in notes {
            index.upsert(note);
        }
        info!(
            "event=link_index_build module=links status=ok notes={} titles={}",
            index.by_note.len(),
            index.by_title.len()
        );
        index
    }

    /// Re-indexes one note body. Call on every note save.
    pub fn upsert(&mut self, note: &Note) {
        self.remove(note.id);

        let lowered = note.content.to_lowercase();
        let keys = referenced_keys(&lowered);
        for key in &keys {
            self.by_title.entry(key.clone()).or_default().insert(note.id);
        }
        debug!(
            "event=link_index_upsert module=links status=ok note_id={} keys={}",
            note.id,
            keys.len()
        );
        self.by_note.insert(note.id, IndexedNote { keys, lowered });
    }

    /// Drops one note from the index. Unknown ids are ignored.
    pub fn remove(&mut self, note_id: NoteId) {
        let Some(previous) = self.by_note.remove(&note_id) else {
            return;
        };
        for key in previous.keys {
            if let Some(ids) = self.by_title.get_mut(&key) {
                ids.remove(&note_id);
                if ids.is_empty() {
                    self.by_title.remove(&key);
                }
            }
        }
    }

    /// Ids of indexed notes, other than `note_id`, referencing `note_title`.
    pub fn backlink_ids(&self, note_id: NoteId, note_title: &str) -> BTreeSet<NoteId> {
        let key = note_title.to_lowercase();
        let mut ids = if is_indexable(&key) {
            self.by_title.get(&key).cloned().unwrap_or_default()
        } else {
            self.by_note
                .iter()
                .filter(|(_, indexed)| references_title(&indexed.lowered, &key))
                .map(|(id, _)| *id)
                .collect()
        };
        ids.remove(&note_id);
        ids
    }

    /// Backlink notes of `note_id`, drawn from `notes` in collection order.
    pub fn backlinks<'a>(
        &self,
        note_id: NoteId,
        note_title: &str,
        notes: &'a [Note],
    ) -> Vec<&'a Note> {
        let ids = self.backlink_ids(note_id, note_title);
        notes.iter().filter(|note| ids.contains(&note.id)).collect()
    }

    pub fn contains(&self, note_id: NoteId) -> bool {
        self.by_note.contains_key(&note_id)
    }

    pub fn len(&self) -> usize {
        self.by_note.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_note.is_empty()
    }
}

/// A title whose `[[title]]` form is always recovered by `referenced_keys`.
fn is_indexable(key: &str) -> bool {
    !key.contains(LINK_CLOSE) && !key.ends_with(']')
}

fn referenced_keys(lowered: &str) -> BTreeSet<String> {
    let bytes = lowered.as_bytes();
    let mut keys = BTreeSet::new();
    for start in 0..bytes.len().saturating_sub(1) {
        if &bytes[start..start + 2] != LINK_OPEN {
            continue;
        }
        let body_start = start + LINK_OPEN.len();
        if let Some(close) = lowered[body_start..].find(LINK_CLOSE) {
            keys.insert(lowered[body_start..body_start + close].to_string());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::{referenced_keys, LinkIndex};
    use crate::links::backlinks::backlinks;
    use crate::model::note::Note;

    #[test]
    fn keys_include_overlapping_openers() {
        let keys = referenced_keys("[[[plan]] and [[a]]");
        assert!(keys.contains("[plan"));
        assert!(keys.contains("plan"));
        assert!(keys.contains("a"));
    }

    #[test]
    fn upsert_and_remove_keep_index_current() {
        let target = Note::new("Plan", "");
        let mut source = Note::new("Source", "[[plan]]");
        let notes = vec![target.clone(), source.clone()];
        let mut index = LinkIndex::build(&notes);
        assert_eq!(index.backlinks(target.id, "Plan", &notes), vec![&notes[1]]);

        source.content = "no links now".to_string();
        index.upsert(&source);
        assert!(index.backlink_ids(target.id, "Plan").is_empty());

        index.remove(source.id);
        assert!(!index.contains(source.id));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn bracket_titles_fall_back_to_cached_bodies() {
        let target = Note::new("odd]", "");
        let source = Note::new("Source", "see [[ODD]]]");
        let notes = vec![target.clone(), source];
        let index = LinkIndex::build(&notes);
        assert_eq!(
            index.backlinks(target.id, &target.title, &notes),
            backlinks(target.id, &target.title, &notes)
        );
        assert_eq!(index.backlink_ids(target.id, &target.title).len(), 1);
    }
}
