//! Flat, serialisable form of a tree for external renderers.
//!
//! Node ids are breadth-first positions, so the root is always id 0 and the
//! ids of a level-order tree coincide with the indices of its sequence.

use std::collections::HashMap;

use generational_arena::Index;
use serde::Serialize;

use crate::domain::{BinaryTree, DomainResult, NodeKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot<T> {
    pub id: usize,
    pub value: T,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot<T> {
    pub root: Option<usize>,
    pub depth: usize,
    pub nodes: Vec<NodeSnapshot<T>>,
    /// `(parent id, child id)` pairs in breadth-first order
    pub links: Vec<(usize, usize)>,
}

impl<T: Clone> TreeSnapshot<T> {
    pub fn from_tree(tree: &BinaryTree<T>) -> DomainResult<Self> {
        let ids: HashMap<Index, usize> = tree
            .iter_level_order()
            .enumerate()
            .map(|(id, (idx, _))| (idx, id))
            .collect();
        let id_of = |idx: Option<Index>| idx.and_then(|i| ids.get(&i).copied());

        let mut nodes = Vec::with_capacity(ids.len());
        let mut links = Vec::new();
        for (id, (idx, node)) in tree.iter_level_order().enumerate() {
            let left = id_of(node.left);
            let right = id_of(node.right);
            links.extend(left.into_iter().chain(right).map(|child| (id, child)));
            nodes.push(NodeSnapshot {
                id,
                value: node.value.clone(),
                left,
                right,
                kind: tree.node_kind(idx)?,
            });
        }

        Ok(Self {
            root: tree.root().map(|_| 0),
            depth: tree.depth(),
            nodes,
            links,
        })
    }
}
