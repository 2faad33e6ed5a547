//! Visualization requests
//!
//! A request runs to completion: parse text, optionally heapify, build the
//! tree, hand the result to a renderer. Nothing is kept between requests;
//! each [`Visualization`] owns its sequence and tree.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{build_bst, build_level_order, is_max_heap, BinaryTree, HeapStrategy, Sequence};
use crate::render::TreeSnapshot;

/// The views the presentation layer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// The sequence as indexed cells, no tree
    Array,
    /// Level-order (complete) binary tree
    Tree,
    /// Max-heap: heapified sequence shown as a level-order tree
    Heap,
    /// Binary search tree in insertion order
    Bst,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Array => write!(f, "array"),
            ViewKind::Tree => write!(f, "tree"),
            ViewKind::Heap => write!(f, "heap"),
            ViewKind::Bst => write!(f, "bst"),
        }
    }
}

/// Result of one request.
#[derive(Debug, Clone)]
pub struct Visualization {
    pub kind: ViewKind,
    /// Sequence as parsed
    pub input: Sequence<i64>,
    /// Sequence the tree was built from; differs from `input` only for heaps
    pub sequence: Sequence<i64>,
    /// Heap construction used, heap view only
    pub heap_strategy: Option<HeapStrategy>,
    /// None for the array view
    pub tree: Option<BinaryTree<i64>>,
}

#[derive(Debug, Serialize)]
struct VisualizationSnapshot<'a> {
    kind: ViewKind,
    input: &'a [i64],
    sequence: &'a [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    heap_strategy: Option<HeapStrategy>,
    tree: Option<TreeSnapshot<i64>>,
}

impl Visualization {
    /// JSON document for an external renderer.
    pub fn to_json(&self) -> ApplicationResult<String> {
        let tree = self
            .tree
            .as_ref()
            .map(TreeSnapshot::from_tree)
            .transpose()?;
        let snapshot = VisualizationSnapshot {
            kind: self.kind,
            input: self.input.as_slice(),
            sequence: self.sequence.as_slice(),
            heap_strategy: self.heap_strategy,
            tree,
        };
        serde_json::to_string_pretty(&snapshot).map_err(|e| ApplicationError::Render {
            message: e.to_string(),
        })
    }
}

/// Runs visualization requests with the given settings.
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    settings: Settings,
}

impl Visualizer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse `text` and build the requested view.
    ///
    /// Non-numeric tokens are dropped. If nothing numeric remains the request
    /// fails with [`ApplicationError::EmptyInput`].
    #[instrument(level = "debug", skip(self))]
    pub fn visualize(&self, kind: ViewKind, text: &str) -> ApplicationResult<Visualization> {
        let input = Sequence::parse(text);
        if input.is_empty() {
            return Err(ApplicationError::EmptyInput);
        }
        debug!("parsed {} values: {}", input.len(), input);
        Ok(self.visualize_sequence(kind, input))
    }

    /// Build the requested view from an already parsed sequence.
    #[instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn visualize_sequence(&self, kind: ViewKind, input: Sequence<i64>) -> Visualization {
        let mut sequence = input.clone();
        let mut heap_strategy = None;

        let tree = match kind {
            ViewKind::Array => None,
            ViewKind::Tree => Some(build_level_order(sequence.as_slice())),
            ViewKind::Heap => {
                let strategy = self.settings.heap_strategy;
                strategy.apply(sequence.as_mut_slice());
                if !is_max_heap(sequence.as_slice()) {
                    warn!("heap invariant violated after {}: {}", strategy, sequence);
                }
                heap_strategy = Some(strategy);
                Some(build_level_order(sequence.as_slice()))
            }
            ViewKind::Bst => Some(build_bst(sequence.as_slice())),
        };

        Visualization {
            kind,
            input,
            sequence,
            heap_strategy,
            tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_blank_text_when_visualize_then_empty_input_error() {
        let result = Visualizer::default().visualize(ViewKind::Tree, " , abc ");
        assert!(matches!(result, Err(ApplicationError::EmptyInput)));
    }

    #[test]
    fn given_array_view_when_visualize_then_no_tree() {
        let vis = Visualizer::default().visualize(ViewKind::Array, "3 1 2").unwrap();
        assert!(vis.tree.is_none());
        assert_eq!(vis.sequence, vis.input);
    }

    #[test]
    fn given_heap_view_when_visualize_then_tree_built_from_heapified_sequence() {
        let vis = Visualizer::default()
            .visualize(ViewKind::Heap, "10 20 60 30 70 40 50")
            .unwrap();
        assert_eq!(vis.input.as_slice(), &[10, 20, 60, 30, 70, 40, 50]);
        assert_eq!(vis.sequence.as_slice(), &[70, 60, 50, 10, 30, 20, 40]);
        assert_eq!(vis.heap_strategy, Some(HeapStrategy::SiftUp));
        let tree = vis.tree.unwrap();
        assert_eq!(tree.values_level_order(), vis.sequence.into_inner());
    }

    #[test]
    fn given_json_output_when_heap_then_contains_strategy_and_tree() {
        let vis = Visualizer::default().visualize(ViewKind::Heap, "1 2 3").unwrap();
        let json: serde_json::Value = serde_json::from_str(&vis.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "heap");
        assert_eq!(json["heap_strategy"], "sift-up");
        assert_eq!(json["sequence"], serde_json::json!([3, 1, 2]));
        assert_eq!(json["tree"]["nodes"][0]["value"], 3);
    }

    #[test]
    fn given_json_output_when_array_then_tree_is_null() {
        let vis = Visualizer::default().visualize(ViewKind::Array, "1").unwrap();
        let json: serde_json::Value = serde_json::from_str(&vis.to_json().unwrap()).unwrap();
        assert!(json["tree"].is_null());
        assert!(json.get("heap_strategy").is_none());
    }
}
