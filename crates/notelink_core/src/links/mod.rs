//! Cross-reference derivation over a note collection.
//!
//! # Responsibility
//! - Resolve wiki-link titles to notes.
//! - Derive backlinks, either by full scan or through an inverted index.
//!
//! # Invariants
//! - The note collection is always an explicit read-only parameter.
//! - Nothing here mutates notes or persists link edges.
//! - An unresolved link is a normal state, not an error.

pub mod backlinks;
pub mod index;
pub mod resolver;
