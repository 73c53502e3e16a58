//! Integration tests for random generation and shuffling

use std::collections::HashMap;

use sortboard_engine::{DEFAULT_COUNT, KEY_MAX, KEY_MIN, generate, seeded_rng, shuffle};
use sortboard_foundation::{Sequence, SequenceFormat};

#[test]
fn bare_generation_respects_count_and_range() {
    let mut rng = seeded_rng(42);
    let seq = generate(DEFAULT_COUNT, SequenceFormat::Bare, &mut rng);

    assert_eq!(seq.len(), 8);
    for key in seq.keys() {
        assert!((KEY_MIN..=KEY_MAX).contains(&key), "key {key} out of range");
    }
}

#[test]
fn labeled_generation_yields_nonempty_labels() {
    let mut rng = seeded_rng(42);
    let seq = generate(8, SequenceFormat::Labeled, &mut rng);

    assert_eq!(seq.len(), 8);
    for (label, key) in seq.labels().into_iter().zip(seq.keys()) {
        assert!(!label.is_empty());
        assert!((KEY_MIN..=KEY_MAX).contains(&key));
    }
}

#[test]
fn count_is_configurable() {
    let mut rng = seeded_rng(1);
    assert_eq!(generate(3, SequenceFormat::Bare, &mut rng).len(), 3);
    assert_eq!(generate(100, SequenceFormat::Bare, &mut rng).len(), 100);
    assert_eq!(generate(0, SequenceFormat::Bare, &mut rng).len(), 0);
}

#[test]
fn keys_cover_the_whole_range_over_many_draws() {
    let mut rng = seeded_rng(7);
    let seq = generate(10_000, SequenceFormat::Bare, &mut rng);
    let keys = seq.keys();
    assert!(keys.contains(&KEY_MIN));
    assert!(keys.contains(&KEY_MAX));
}

#[test]
fn shuffle_distribution_is_asymptotically_uniform() {
    // Fisher-Yates over three elements: each of the 6 permutations
    // should appear in roughly a sixth of the trials. The seeded RNG
    // makes this check reproducible.
    const TRIALS: usize = 6000;
    let mut rng = seeded_rng(1234);
    let mut counts: HashMap<Vec<i64>, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut seq = Sequence::from_keys(&[1, 2, 3]);
        shuffle(&mut seq, &mut rng).unwrap();
        *counts.entry(seq.keys()).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "some permutation never appeared");
    let expected = TRIALS / 6;
    for (permutation, count) in &counts {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 5,
            "permutation {permutation:?} appeared {count} times (expected ~{expected})"
        );
    }
}

#[test]
fn shuffle_touches_every_position_eventually() {
    let mut rng = seeded_rng(9);
    let original: Vec<i64> = (1..=10).collect();
    let mut moved = vec![false; original.len()];

    for _ in 0..50 {
        let mut seq = Sequence::from_keys(&original);
        shuffle(&mut seq, &mut rng).unwrap();
        for (index, key) in seq.keys().into_iter().enumerate() {
            if key != original[index] {
                moved[index] = true;
            }
        }
    }
    assert!(moved.iter().all(|&m| m), "some position never moved: {moved:?}");
}
