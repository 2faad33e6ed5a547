//! Tree builders: sequence in, arena-backed binary tree out.

use std::fmt::Debug;

use generational_arena::Index;
use tracing::{error, instrument, trace};

use crate::domain::arena::{BinaryTree, Side};
use crate::domain::error::DomainResult;
use crate::domain::layout::parent_index;

/// Builds the complete binary tree whose implicit array layout is `sequence`.
///
/// Element `i` becomes the node whose left child holds element `2i+1` and
/// whose right child holds element `2i+2`, when those are in range. The input
/// is not modified; an empty sequence yields the absent tree.
#[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
pub fn build_level_order<T: Clone + Debug>(sequence: &[T]) -> BinaryTree<T> {
    let mut tree = BinaryTree::with_capacity(sequence.len());
    if let Err(e) = fill_level_order(&mut tree, sequence) {
        error!("level-order build stopped early: {}", e);
    }
    tree
}

fn fill_level_order<T: Clone>(tree: &mut BinaryTree<T>, sequence: &[T]) -> DomainResult<()> {
    let mut indices: Vec<Index> = Vec::with_capacity(sequence.len());

    for (i, value) in sequence.iter().enumerate() {
        // Parents always precede their children in the sequence
        let parent = parent_index(i).map(|p| {
            let side = if i % 2 == 1 { Side::Left } else { Side::Right };
            (indices[p], side)
        });
        indices.push(tree.insert_node(value.clone(), parent)?);
    }

    Ok(())
}

/// Builds a binary search tree by inserting `sequence` in order.
///
/// The first element is the root. Every later element walks down from the
/// root: strictly smaller goes left, equal or greater goes right, until an
/// empty slot is found. No rebalancing, so sorted input degenerates into a
/// chain. An empty sequence yields the absent tree.
#[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
pub fn build_bst<T: Ord + Clone + Debug>(sequence: &[T]) -> BinaryTree<T> {
    let mut tree = BinaryTree::with_capacity(sequence.len());
    if let Err(e) = fill_bst(&mut tree, sequence) {
        error!("bst build stopped early: {}", e);
    }
    tree
}

fn fill_bst<T: Ord + Clone + Debug>(tree: &mut BinaryTree<T>, sequence: &[T]) -> DomainResult<()> {
    let Some((first, rest)) = sequence.split_first() else {
        return Ok(());
    };
    let root = tree.insert_node(first.clone(), None)?;

    for value in rest {
        insert_bst(tree, root, value.clone())?;
    }

    Ok(())
}

/// Iterative descent from `root` to the first free slot for `value`.
fn insert_bst<T: Ord + Debug>(tree: &mut BinaryTree<T>, root: Index, value: T) -> DomainResult<()> {
    let mut cursor = root;
    loop {
        let node = tree.node(cursor)?;
        let side = if value < node.value {
            Side::Left
        } else {
            Side::Right
        };
        match node.child(side) {
            Some(next) => cursor = next,
            None => {
                trace!(?value, ?side, "placing node");
                tree.insert_node(value, Some((cursor, side)))?;
                return Ok(());
            }
        }
    }
}
