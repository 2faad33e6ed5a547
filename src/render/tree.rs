/*
Tree rendering for the terminal.

termtree only knows an ordered list of leaves, so a node with a single child
would lose the information whether that child hangs left or right. The
absent slot is rendered as a placeholder in that case.

Each line carries its depth as indentation, so the text of a degenerate tree
grows quadratically with its size. The text view stops at MAX_TEXT_DEPTH and
marks the cut; the JSON snapshot is the complete form.
 */
use std::collections::HashMap;
use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::BinaryTree;

pub const EMPTY_TREE: &str = "Empty tree";
pub const MISSING_CHILD: &str = "·";
/// Stands in for the children of a node at the depth limit.
pub const TRUNCATED: &str = "…";
/// Levels shown by the text view.
pub const MAX_TEXT_DEPTH: usize = 64;

pub trait TreeRender {
    /// Full tree, every level.
    fn to_termtree(&self) -> Tree<String> {
        self.to_termtree_limited(usize::MAX)
    }

    /// At most `max_depth` levels (root is level 1). Nodes on the last level
    /// that still have children get a single [`TRUNCATED`] leaf.
    fn to_termtree_limited(&self, max_depth: usize) -> Tree<String>;
}

impl<T: Display> TreeRender for BinaryTree<T> {
    /// Assembled bottom-up from a post-order walk, so deep (degenerate)
    /// trees do not recurse.
    #[instrument(level = "debug", skip(self))]
    fn to_termtree_limited(&self, max_depth: usize) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new(EMPTY_TREE.to_string());
        };
        let max_depth = max_depth.max(1);

        let mut levels: HashMap<Index, usize> = HashMap::with_capacity(self.len());
        levels.insert(root_idx, 1);
        for (idx, node) in self.iter_level_order() {
            let level = levels.get(&idx).copied().unwrap_or(1);
            for child in node.children() {
                levels.insert(child, level + 1);
            }
        }

        let mut built = HashMap::new();
        for (idx, node) in self.iter_post_order() {
            let level = levels.get(&idx).copied().unwrap_or(1);
            if level > max_depth {
                continue;
            }
            let mut subtree = Tree::new(node.value.to_string());
            if level == max_depth {
                if !node.is_leaf() {
                    subtree.push(Tree::new(TRUNCATED.to_string()));
                }
                built.insert(idx, subtree);
                continue;
            }

            let left = node.left.and_then(|c| built.remove(&c));
            let right = node.right.and_then(|c| built.remove(&c));
            match (left, right) {
                (None, None) => {}
                (Some(l), None) => {
                    subtree.push(l);
                    subtree.push(Tree::new(MISSING_CHILD.to_string()));
                }
                (None, Some(r)) => {
                    subtree.push(Tree::new(MISSING_CHILD.to_string()));
                    subtree.push(r);
                }
                (Some(l), Some(r)) => {
                    subtree.push(l);
                    subtree.push(r);
                }
            }
            built.insert(idx, subtree);
        }

        built
            .remove(&root_idx)
            .unwrap_or_else(|| Tree::new(EMPTY_TREE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_bst, build_level_order};

    #[test]
    fn given_absent_tree_when_rendering_then_placeholder_text() {
        let tree = build_level_order::<i64>(&[]);
        assert_eq!(tree.to_termtree().root, EMPTY_TREE);
    }

    #[test]
    fn given_level_order_tree_when_rendering_then_lists_children_left_first() {
        let tree = build_level_order(&[1, 2, 3]);
        let rendered = tree.to_termtree();
        assert_eq!(rendered.root, "1");
        let leaves: Vec<&str> = rendered.leaves.iter().map(|l| l.root.as_str()).collect();
        assert_eq!(leaves, vec!["2", "3"]);
    }

    #[test]
    fn given_right_only_child_when_rendering_then_marks_missing_left() {
        let tree = build_bst(&[1, 2]);
        let rendered = tree.to_termtree();
        let leaves: Vec<&str> = rendered.leaves.iter().map(|l| l.root.as_str()).collect();
        assert_eq!(leaves, vec![MISSING_CHILD, "2"]);
        assert!(rendered.to_string().contains('2'));
    }

    /// Levels along the first non-placeholder child of each node.
    fn spine(rendered: &Tree<String>) -> Vec<&str> {
        let mut spine = vec![rendered.root.as_str()];
        let mut cursor = rendered;
        while let Some(next) = cursor.leaves.iter().find(|l| l.root != MISSING_CHILD) {
            spine.push(next.root.as_str());
            cursor = next;
        }
        spine
    }

    #[test]
    fn given_degenerate_tree_when_rendering_in_full_then_keeps_every_level() {
        let input: Vec<i64> = (0..200).collect();
        let rendered = build_bst(&input).to_termtree();
        assert_eq!(spine(&rendered).len(), 200);
    }

    #[test]
    fn given_degenerate_tree_when_rendering_limited_then_cut_at_depth() {
        let input: Vec<i64> = (0..200).collect();
        let rendered = build_bst(&input).to_termtree_limited(10);
        let spine = spine(&rendered);
        assert_eq!(spine.len(), 11);
        assert_eq!(spine[9], "9");
        assert_eq!(spine[10], TRUNCATED);
    }

    #[test]
    fn given_large_sorted_bst_when_rendering_text_depth_then_output_stays_bounded() {
        let input: Vec<i64> = (0..10_000).collect();
        let text = build_bst(&input)
            .to_termtree_limited(MAX_TEXT_DEPTH)
            .to_string();
        assert_eq!(text.lines().count(), 2 * MAX_TEXT_DEPTH);
        assert!(text.len() < 64 * 1024);
    }

    #[test]
    fn given_shallow_tree_when_rendering_limited_then_same_as_full() {
        let tree = build_level_order(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(
            tree.to_termtree_limited(3).to_string(),
            tree.to_termtree().to_string()
        );
    }

    #[test]
    fn given_zero_depth_when_rendering_limited_then_root_and_marker() {
        let tree = build_level_order(&[1, 2, 3]);
        let rendered = tree.to_termtree_limited(0);
        assert_eq!(rendered.root, "1");
        let leaves: Vec<&str> = rendered.leaves.iter().map(|l| l.root.as_str()).collect();
        assert_eq!(leaves, vec![TRUNCATED]);
    }
}
