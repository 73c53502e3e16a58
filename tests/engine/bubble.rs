//! Integration tests for the bubble sort tracer

use sortboard_engine::{Algorithm, Step};
use sortboard_foundation::{Element, Sequence, SequenceFormat};

#[test]
fn reference_example() {
    let mut seq = Sequence::from_keys(&[5, 3, 8, 1]);
    let trace = Algorithm::Bubble.run(&mut seq).unwrap();
    assert_eq!(seq.keys(), vec![1, 3, 5, 8]);
    assert!(trace.stats().swaps > 0);
    assert!(trace.stats().compares > 0);
}

#[test]
fn trace_replay_reproduces_the_engine_result() {
    // Applying only the swap steps to a copy of the input must land on
    // the engine's own final state.
    let original = Sequence::from_keys(&[9, 4, 6, 2, 8, 1]);

    let mut working = original.clone();
    let trace = Algorithm::Bubble.run(&mut working).unwrap();

    let mut replayed = original;
    for step in trace {
        if let Step::Swap { i, j } = step {
            replayed.swap(i, j).unwrap();
        }
    }
    assert_eq!(replayed, working);
}

#[test]
fn stability_preserves_equal_key_order() {
    // Distinct labels on equal keys must keep their relative order.
    let mut seq = Sequence::new(
        vec![
            Element::labeled("first", 2),
            Element::labeled("second", 2),
            Element::labeled("small", 1),
        ],
        SequenceFormat::Labeled,
    );
    Algorithm::Bubble.run(&mut seq).unwrap();

    assert_eq!(seq.keys(), vec![1, 2, 2]);
    assert_eq!(
        seq.labels(),
        vec![
            "small".to_string(),
            "first".to_string(),
            "second".to_string()
        ]
    );
}

#[test]
fn early_exit_on_sorted_input() {
    let mut seq = Sequence::from_keys(&[1, 2, 3, 4, 5, 6]);
    let n = seq.len();
    let trace = Algorithm::Bubble.run(&mut seq).unwrap();
    let stats = trace.stats();

    // One pass: n-1 compares, no swaps, every position marked.
    assert_eq!(stats.compares, n - 1);
    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.marks, n);
}

#[test]
fn compares_are_adjacent_only() {
    let mut seq = Sequence::from_keys(&[3, 1, 4, 1, 5]);
    let trace = Algorithm::Bubble.run(&mut seq).unwrap();
    for step in trace {
        if let Step::Compare { i, j } = step {
            assert_eq!(j, i + 1, "bubble compared non-adjacent {i} and {j}");
        }
    }
}
