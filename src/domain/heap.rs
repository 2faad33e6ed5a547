//! In-place max-heap construction over a sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::layout::{children_in_range, left_index, parent_index, right_index};

/// How [`HeapStrategy::apply`] builds the heap.
///
/// Both produce a valid max-heap, but equal or differently ordered inputs
/// can end up in different arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeapStrategy {
    /// Repeated insertion: sift each element up towards the root. O(n log n).
    #[default]
    SiftUp,
    /// Floyd construction: sift each parent down, last parent first. O(n).
    SiftDown,
}

impl HeapStrategy {
    pub fn apply<T: Ord>(self, sequence: &mut [T]) {
        match self {
            HeapStrategy::SiftUp => heapify_max(sequence),
            HeapStrategy::SiftDown => heapify_max_sift_down(sequence),
        }
    }
}

impl fmt::Display for HeapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapStrategy::SiftUp => write!(f, "sift-up"),
            HeapStrategy::SiftDown => write!(f, "sift-down"),
        }
    }
}

impl FromStr for HeapStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sift-up" | "sift_up" | "up" => Ok(HeapStrategy::SiftUp),
            "sift-down" | "sift_down" | "down" => Ok(HeapStrategy::SiftDown),
            other => Err(format!("unknown heap strategy: {}", other)),
        }
    }
}

/// Rearranges `sequence` into max-heap order by repeated sift-up.
///
/// For each position from 1 onwards the element is swapped with its parent
/// while it is strictly greater, stopping at the root. Sequences of length
/// 0 or 1 are left untouched.
#[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
pub fn heapify_max<T: Ord>(sequence: &mut [T]) {
    for i in 1..sequence.len() {
        sift_up(sequence, i);
    }
}

/// Rearranges `sequence` into max-heap order bottom-up, in linear time.
#[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
pub fn heapify_max_sift_down<T: Ord>(sequence: &mut [T]) {
    let len = sequence.len();
    if len < 2 {
        return;
    }
    let last_parent = (len - 2) / 2;
    for i in (0..=last_parent).rev() {
        sift_down(sequence, i);
    }
}

fn sift_up<T: Ord>(sequence: &mut [T], mut k: usize) {
    while let Some(parent) = parent_index(k) {
        if sequence[k] > sequence[parent] {
            sequence.swap(parent, k);
            k = parent;
        } else {
            break;
        }
    }
}

fn sift_down<T: Ord>(sequence: &mut [T], mut k: usize) {
    let len = sequence.len();
    loop {
        let left = left_index(k);
        let right = right_index(k);
        let mut largest = k;
        if left < len && sequence[left] > sequence[largest] {
            largest = left;
        }
        if right < len && sequence[right] > sequence[largest] {
            largest = right;
        }
        if largest == k {
            break;
        }
        sequence.swap(k, largest);
        k = largest;
    }
}

/// True when every parent is greater than or equal to its children.
pub fn is_max_heap<T: Ord>(sequence: &[T]) -> bool {
    (0..sequence.len()).all(|i| {
        children_in_range(i, sequence.len()).all(|child| sequence[i] >= sequence[child])
    })
}
