#![allow(dead_code)]

use treeviz::domain::BinaryTree;

/// First `(parent, child)` position pair where the child exceeds its parent.
pub fn heap_violation(seq: &[i64]) -> Option<(usize, usize)> {
    (1..seq.len())
        .map(|child| ((child - 1) / 2, child))
        .find(|&(parent, child)| seq[parent] < seq[child])
}

/// Every left descendant strictly smaller, every right descendant greater or equal.
pub fn satisfies_bst_order(tree: &BinaryTree<i64>) -> bool {
    let mut stack = Vec::new();
    if let Some(root) = tree.root() {
        stack.push((root, i64::MIN, None::<i64>));
    }
    while let Some((idx, lower, upper)) = stack.pop() {
        let node = tree.get_node(idx).expect("index from this tree");
        if node.value < lower || upper.is_some_and(|u| node.value >= u) {
            return false;
        }
        if let Some(left) = node.left {
            stack.push((left, lower, Some(node.value)));
        }
        if let Some(right) = node.right {
            stack.push((right, node.value, upper));
        }
    }
    true
}
