//! Integration tests for sequences
//!
//! Fixed-length mutation, format tracking, and order predicates.

use sortboard_foundation::{Element, Sequence, SequenceFormat};

#[test]
fn length_is_fixed_for_a_sequence_lifetime() {
    let mut seq = Sequence::from_keys(&[4, 1, 3]);
    let before = seq.len();
    seq.swap(0, 2).unwrap();
    seq.swap(1, 1).unwrap();
    assert_eq!(seq.len(), before);
}

#[test]
fn format_tag_survives_mutation() {
    let mut seq = Sequence::new(
        vec![Element::labeled("ava", 2), Element::labeled("ben", 1)],
        SequenceFormat::Labeled,
    );
    seq.swap(0, 1).unwrap();
    assert_eq!(seq.format(), SequenceFormat::Labeled);
}

#[test]
fn keys_and_labels_travel_together() {
    let mut seq = Sequence::new(
        vec![
            Element::labeled("high", 9),
            Element::Bare(5),
            Element::labeled("low", 1),
        ],
        SequenceFormat::Labeled,
    );
    seq.swap(0, 2).unwrap();
    assert_eq!(seq.keys(), vec![1, 5, 9]);
    assert_eq!(
        seq.labels(),
        vec!["low".to_string(), "5".to_string(), "high".to_string()]
    );
}

#[test]
fn out_of_range_swap_reports_the_bad_index() {
    let mut seq = Sequence::from_keys(&[1, 2, 3]);
    let err = seq.swap(1, 7).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

#[test]
fn sortedness_uses_keys_not_labels() {
    // Labels in descending alphabetical order, keys ascending: sorted.
    let seq = Sequence::new(
        vec![Element::labeled("zed", 1), Element::labeled("amy", 2)],
        SequenceFormat::Labeled,
    );
    assert!(seq.is_sorted());
}
