//! Domain model read and produced by the content engine.
//!
//! # Responsibility
//! - Define the note shape the engine reads from the external store.
//! - Define the parsed segment model produced per note body.
//!
//! # Invariants
//! - The engine never mutates a `Note`; only raw `content` is durable.
//! - Segments are ephemeral and recomputed from raw content.

pub mod note;
pub mod segment;
