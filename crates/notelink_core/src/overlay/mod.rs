//! Transient image option overrides during interactive editing.
//!
//! # Responsibility
//! - Hold uncommitted size/position/shape edits for one image segment.
//! - Merge them over parsed options for intermediate renders.
//! - Write the merged options back into note text on explicit commit.
//!
//! # Invariants
//! - At most one segment is in live edit at a time.
//! - The overlay is never written into content before `commit`.

pub mod live_edit;
