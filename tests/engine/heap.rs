//! Integration tests for the heap sort tracer

use sortboard_engine::{Algorithm, Step};
use sortboard_foundation::{Element, Sequence, SequenceFormat};

#[test]
fn reference_example() {
    let mut seq = Sequence::from_keys(&[4, 10, 3, 5, 1]);
    Algorithm::Heap.run(&mut seq).unwrap();
    assert_eq!(seq.keys(), vec![1, 3, 4, 5, 10]);
}

#[test]
fn labels_are_a_permutation_of_the_input() {
    let mut seq = Sequence::new(
        vec![
            Element::labeled("c", 3),
            Element::labeled("a", 1),
            Element::labeled("d", 4),
            Element::labeled("b", 2),
        ],
        SequenceFormat::Labeled,
    );
    Algorithm::Heap.run(&mut seq).unwrap();

    assert_eq!(seq.keys(), vec![1, 2, 3, 4]);
    let mut labels = seq.labels();
    labels.sort_unstable();
    assert_eq!(labels, vec!["a", "b", "c", "d"]);
}

#[test]
fn marks_descend_from_the_end() {
    // Extraction marks n-1 down to 1, then the root last.
    let mut seq = Sequence::from_keys(&[7, 3, 9, 1]);
    let trace = Algorithm::Heap.run(&mut seq).unwrap();

    let marks: Vec<usize> = trace
        .filter_map(|step| match step {
            Step::MarkSorted { index } => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(marks, vec![3, 2, 1, 0]);
}

#[test]
fn build_phase_precedes_extraction() {
    let mut seq = Sequence::from_keys(&[5, 1, 4, 2, 3]);
    let trace = Algorithm::Heap.run(&mut seq).unwrap();

    let steps: Vec<_> = trace.collect();
    let build = steps
        .iter()
        .position(|s| matches!(s, Step::Info { message } if message == "building max heap"))
        .unwrap();
    let first_extract = steps
        .iter()
        .position(|s| matches!(s, Step::Info { message } if message.starts_with("extract max")))
        .unwrap();
    assert!(build < first_extract);
}

#[test]
fn duplicate_keys_sort_without_extra_work() {
    let mut seq = Sequence::from_keys(&[2, 2, 1, 1, 2]);
    Algorithm::Heap.run(&mut seq).unwrap();
    assert_eq!(seq.keys(), vec![1, 1, 2, 2, 2]);
}
