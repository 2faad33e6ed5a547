//! Domain layer: sequences, binary trees and heaps
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod heap;
pub mod layout;
pub mod sequence;

pub use arena::{BinaryTree, NodeKind, Side, TreeNode};
pub use builder::{build_bst, build_level_order};
pub use error::{DomainError, DomainResult};
pub use heap::{heapify_max, heapify_max_sift_down, is_max_heap, HeapStrategy};
pub use sequence::Sequence;
