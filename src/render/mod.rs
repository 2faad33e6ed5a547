//! Presentation handoff: terminal rendering and serialisable snapshots.

pub mod array;
pub mod snapshot;
pub mod tree;

pub use array::render_array;
pub use snapshot::{NodeSnapshot, TreeSnapshot};
pub use tree::{TreeRender, EMPTY_TREE, MAX_TEXT_DEPTH, MISSING_CHILD, TRUNCATED};
