//! treeviz: level-order trees, max-heaps and binary search trees built from
//! integer sequences, rendered for the terminal or as JSON.
//!
//! The core is three functions:
//! [`build_level_order`](domain::build_level_order),
//! [`build_bst`](domain::build_bst) and
//! [`heapify_max`](domain::heapify_max).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;

pub use domain::{build_bst, build_level_order, heapify_max, BinaryTree, Sequence};
