//! Heap builder properties: invariant, idempotence, strategy differences.

mod common;

use proptest::prelude::*;

use treeviz::domain::{
    build_level_order, heapify_max, heapify_max_sift_down, is_max_heap, HeapStrategy,
};
use treeviz::util::testing;

fn assert_heap(seq: &[i64]) {
    if let Some((parent, child)) = common::heap_violation(seq) {
        panic!("{:?}: [{}] < [{}]", seq, parent, child);
    }
}

fn heap_strategies() -> impl Strategy<Value = HeapStrategy> {
    prop_oneof![Just(HeapStrategy::SiftUp), Just(HeapStrategy::SiftDown)]
}

#[test]
fn given_scenario_when_heapify_then_maximum_at_root() {
    testing::init_test_setup();
    let mut seq = vec![10, 20, 60, 30, 70, 40, 50];
    heapify_max(&mut seq);
    assert_eq!(seq[0], 70);
    assert_heap(&seq);
}

proptest! {
    #[test]
    fn prop_heapify_keeps_invariant_and_multiset(
        strategy in heap_strategies(),
        input in prop::collection::vec(-20i64..=20, 0..80),
    ) {
        let mut seq = input.clone();
        strategy.apply(&mut seq);
        prop_assert_eq!(common::heap_violation(&seq), None);
        prop_assert!(is_max_heap(&seq));
        prop_assert_eq!(seq.first(), input.iter().max());

        let mut before = input;
        let mut after = seq;
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_heapify_is_fixed_point_on_heap(input in prop::collection::vec(-20i64..=20, 0..80)) {
        let mut seq = input;
        heapify_max(&mut seq);
        let once = seq.clone();
        heapify_max(&mut seq);
        // Sift-up only swaps on strictly greater, so a heap is a fixed point
        prop_assert_eq!(seq, once);
    }
}

#[test]
fn given_empty_sequence_when_heapify_then_unchanged() {
    let mut seq: Vec<i64> = Vec::new();
    heapify_max(&mut seq);
    assert!(seq.is_empty());
}

#[test]
fn given_same_input_when_sift_up_vs_sift_down_then_arrangements_differ() {
    let mut up = vec![10, 20, 60, 30, 70, 40, 50];
    let mut down = up.clone();
    heapify_max(&mut up);
    heapify_max_sift_down(&mut down);
    assert_ne!(up, down);
    assert_heap(&up);
    assert_heap(&down);
}

#[test]
fn given_heapified_sequence_when_level_order_then_every_parent_dominates_children() {
    let mut seq = vec![5, 9, 1, 7, 3, 8, 2, 6];
    heapify_max(&mut seq);
    let tree = build_level_order(&seq);
    for (parent, child) in tree.links() {
        assert!(parent >= child);
    }
    assert_eq!(tree.root_value(), Some(&9));
}
