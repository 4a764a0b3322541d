//! Flutter-facing bindings for the note content engine.

pub mod api;
