//! Memoized segment lists keyed by note identity and raw content.
//!
//! # Invariants
//! - A cached entry is returned only when the stored raw content equals the
//!   requested content byte for byte.
//! - Entry count never exceeds the configured capacity; the oldest inserted
//!   note is evicted first.

use crate::config::EngineConfig;
use crate::model::note::{Note, NoteId};
use crate::model::segment::ContentSegment;
use crate::parser::tokenizer::parse_content;
use log::trace;
use std::collections::{HashMap, VecDeque};

struct CachedSegments {
    content: String,
    segments: Vec<ContentSegment>,
}

/// Per-note memo for [`parse_content`].
pub struct SegmentCache {
    capacity: usize,
    entries: HashMap<NoteId, CachedSegments>,
    insertion_order: VecDeque<NoteId>,
}

impl SegmentCache {
    /// Creates a cache holding at most `capacity` notes (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_cached_notes)
    }

    /// Returns segments for `note`, reparsing only when its content changed.
    pub fn segments(&mut self, note: &Note) -> &[ContentSegment] {
        self.segments_for(note.id, &note.content)
    }

    /// Returns segments for `content` under the `note_id` key.
    pub fn segments_for(&mut self, note_id: NoteId, content: &str) -> &[ContentSegment] {
        let stale = self
            .entries
            .get(&note_id)
            .map_or(true, |cached| cached.content != content);

        if stale {
            trace!("event=segment_cache module=parser status=miss note_id={note_id}");
            if !self.entries.contains_key(&note_id) {
                self.evict_to_fit();
                self.insertion_order.push_back(note_id);
            }
            self.entries.insert(
                note_id,
                CachedSegments {
                    content: content.to_string(),
                    segments: parse_content(content),
                },
            );
        }

        self.entries
            .get(&note_id)
            .map(|cached| cached.segments.as_slice())
            .unwrap_or_default()
    }

    /// Drops the entry for one note.
    pub fn invalidate(&mut self, note_id: NoteId) {
        if self.entries.remove(&note_id).is_some() {
            self.insertion_order.retain(|id| *id != note_id);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_to_fit(&mut self) {
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentCache;
    use crate::config::EngineConfig;
    use crate::model::note::Note;
    use crate::model::segment::ContentSegment;

    #[test]
    fn reparses_only_when_content_changes() {
        let mut cache = SegmentCache::new(4);
        let mut note = Note::new("N", "[[A]]");
        assert_eq!(cache.segments(&note), [ContentSegment::wiki_link("A")]);

        note.content = "[[B]]".to_string();
        assert_eq!(cache.segments(&note), [ContentSegment::wiki_link("B")]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_oldest_note_when_full() {
        let mut cache = SegmentCache::new(2);
        let first = Note::new("1", "one");
        let second = Note::new("2", "two");
        let third = Note::new("3", "three");
        cache.segments(&first);
        cache.segments(&second);
        cache.segments(&third);
        assert_eq!(cache.len(), 2);
        assert!(!cache.entries.contains_key(&first.id));
        assert!(cache.entries.contains_key(&second.id));
        assert!(cache.entries.contains_key(&third.id));

        cache.segments(&first);
        assert!(!cache.entries.contains_key(&second.id));
        assert!(cache.entries.contains_key(&third.id));
        assert_eq!(
            cache.insertion_order.iter().copied().collect::<Vec<_>>(),
            vec![third.id, first.id]
        );

        cache.invalidate(third.id);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_comes_from_config() {
        let config = EngineConfig {
            max_cached_notes: 1,
            ..EngineConfig::default()
        };
        let mut cache = SegmentCache::from_config(&config);
        cache.segments(&Note::new("1", "one"));
        cache.segments(&Note::new("2", "two"));
        assert_eq!(cache.len(), 1);
    }
}
