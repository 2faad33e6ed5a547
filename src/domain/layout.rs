//! Implicit array layout of a complete binary tree.
//!
//! Shared by the level-order builder and the heap builder: element `i`
//! has its children at `2i+1` and `2i+2` and its parent at `(i-1)/2`.

/// Parent position of `index`, `None` for the root.
#[inline]
pub fn parent_index(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

#[inline]
pub fn left_index(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right_index(index: usize) -> usize {
    2 * index + 2
}

/// Children of `index` that fall inside a sequence of length `len`.
pub fn children_in_range(index: usize, len: usize) -> impl Iterator<Item = usize> {
    [left_index(index), right_index(index)]
        .into_iter()
        .filter(move |&child| child < len)
}
