//! Arena-backed binary tree.
//!
//! Nodes live in a generational arena and refer to their children by
//! [`Index`]. There are no parent back-references: a node is owned by the
//! arena of the tree that built it, and the tree is owned by its caller.

use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use serde::Serialize;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Which child slot of a parent a node is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Internal nodes and leaves are drawn differently by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Internal,
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Internal => write!(f, "internal"),
            NodeKind::Leaf => write!(f, "leaf"),
        }
    }
}

/// One tree vertex.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub value: T,
    /// Index of the left child in the arena, None if absent
    pub left: Option<Index>,
    /// Index of the right child in the arena, None if absent
    pub right: Option<Index>,
}

impl<T> TreeNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

/// Binary tree stored in a generational arena.
///
/// The root is `None` for a tree built from an empty sequence; that is the
/// "absent tree", not an error.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    arena: Arena<TreeNode<T>>,
    root: Option<Index>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Inserts a node holding `value`.
    ///
    /// With a parent the node is attached in the given slot, replacing
    /// whatever index was there. Without a parent the node becomes the root.
    /// A parent index that is not in this tree is rejected before anything
    /// is inserted.
    pub fn insert_node(
        &mut self,
        value: T,
        parent: Option<(Index, Side)>,
    ) -> DomainResult<Index> {
        let Some((parent_idx, side)) = parent else {
            let node_idx = self.arena.insert(TreeNode::new(value));
            self.root = Some(node_idx);
            return Ok(node_idx);
        };

        if !self.arena.contains(parent_idx) {
            return Err(DomainError::NodeNotFound(parent_idx));
        }
        let node_idx = self.arena.insert(TreeNode::new(value));
        let parent = self
            .arena
            .get_mut(parent_idx)
            .ok_or(DomainError::NodeNotFound(parent_idx))?;
        match side {
            Side::Left => parent.left = Some(node_idx),
            Side::Right => parent.right = Some(node_idx),
        }

        Ok(node_idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    /// Like [`get_node`](Self::get_node) but reports a stale index as an error.
    pub fn node(&self, idx: Index) -> DomainResult<&TreeNode<T>> {
        self.arena.get(idx).ok_or(DomainError::NodeNotFound(idx))
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_value(&self) -> Option<&T> {
        self.root.and_then(|idx| self.get_node(idx)).map(|n| &n.value)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn is_leaf(&self, idx: Index) -> DomainResult<bool> {
        Ok(self.node(idx)?.is_leaf())
    }

    /// Indices of the present children of `idx`, left before right.
    pub fn children(&self, idx: Index) -> DomainResult<Vec<Index>> {
        Ok(self.node(idx)?.children().collect())
    }

    pub fn node_kind(&self, idx: Index) -> DomainResult<NodeKind> {
        Ok(if self.is_leaf(idx)? {
            NodeKind::Leaf
        } else {
            NodeKind::Internal
        })
    }

    /// Pre-order traversal (node, left subtree, right subtree).
    pub fn iter(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator::new(self)
    }

    /// Breadth-first traversal, top level first and left to right.
    pub fn iter_level_order(&self) -> LevelOrderIterator<'_, T> {
        LevelOrderIterator::new(self)
    }

    /// In-order traversal; yields ascending values for a binary search tree.
    pub fn iter_in_order(&self) -> InOrderIterator<'_, T> {
        InOrderIterator::new(self)
    }

    /// Post-order traversal; every child is yielded before its parent.
    pub fn iter_post_order(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    /// Number of levels; 0 for the absent tree.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 1));
        }

        while let Some((idx, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                for child in node.children() {
                    queue.push_back((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Values of all leaf nodes, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| &node.value)
            .collect()
    }

    /// Parent/child value pairs in breadth-first order.
    pub fn links(&self) -> Vec<(&T, &T)> {
        let mut links = Vec::new();
        for (_, node) in self.iter_level_order() {
            for child in node.children() {
                if let Some(child_node) = self.get_node(child) {
                    links.push((&node.value, &child_node.value));
                }
            }
        }
        links
    }
}

impl<T: Clone> BinaryTree<T> {
    /// Values in breadth-first order.
    pub fn values_level_order(&self) -> Vec<T> {
        self.iter_level_order()
            .map(|(_, node)| node.value.clone())
            .collect()
    }

    pub fn values_in_order(&self) -> Vec<T> {
        self.iter_in_order()
            .map(|(_, node)| node.value.clone())
            .collect()
    }
}

pub struct PreOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<Index>,
}

impl<'a, T> PreOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Right first so the left subtree is popped first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct LevelOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<Index>,
}

impl<'a, T> LevelOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            queue: tree.root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.queue.pop_front() {
            if let Some(node) = self.tree.get_node(current_idx) {
                self.queue.extend(node.children());
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct InOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<Index>,
    cursor: Option<Index>,
}

impl<'a, T> InOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root,
        }
    }
}

impl<'a, T> Iterator for InOrderIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        // Walk down the left spine before yielding
        while let Some(idx) = self.cursor {
            self.stack.push(idx);
            self.cursor = self.tree.get_node(idx).and_then(|n| n.left);
        }

        let idx = self.stack.pop()?;
        let node = self.tree.get_node(idx)?;
        self.cursor = node.right;
        Some((idx, node))
    }
}

pub struct PostOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root.map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                self.stack.extend(node.right.map(|c| (c, false)));
                self.stack.extend(node.left.map(|c| (c, false)));
            }
        }
        None
    }
}
