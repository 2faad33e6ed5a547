use std::fmt::Display;

use itertools::Itertools;

use crate::domain::Sequence;

/// One line of array cells, `[i] value` when `show_indices` is set.
pub fn render_array<T: Display>(sequence: &Sequence<T>, show_indices: bool) -> String {
    if show_indices {
        sequence
            .cells()
            .map(|(i, value)| format!("[{}] {}", i, value))
            .join("  ")
    } else {
        sequence.iter().join(" ")
    }
}
