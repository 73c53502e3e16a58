//! Integration tests for the shell sort tracer

use sortboard_engine::{Algorithm, Step};
use sortboard_foundation::Sequence;

#[test]
fn reference_example_with_halving_gaps() {
    let mut seq = Sequence::from_keys(&[9, 1, 7, 3]);
    let trace = Algorithm::Shell.run(&mut seq).unwrap();
    assert_eq!(seq.keys(), vec![1, 3, 7, 9]);

    // n=4 halves through gaps 2 and 1, in that order.
    let gap_infos: Vec<String> = trace
        .filter_map(|step| match step {
            Step::Info { message } if message.starts_with("gap ") => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(gap_infos, vec!["gap 2", "gap 1"]);
}

#[test]
fn gap_sequence_is_classic_halving() {
    // n=20 must walk 10, 5, 2, 1 and nothing else.
    let mut seq = Sequence::from_keys(&(0..20).rev().collect::<Vec<_>>());
    let trace = Algorithm::Shell.run(&mut seq).unwrap();

    let gaps: Vec<String> = trace
        .filter_map(|step| match step {
            Step::Info { message } if message.starts_with("gap ") => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(gaps, vec!["gap 10", "gap 5", "gap 2", "gap 1"]);
    assert!(seq.is_sorted());
}

#[test]
fn every_compare_spans_exactly_one_gap() {
    let mut seq = Sequence::from_keys(&[8, 3, 9, 1, 6, 2]);
    let trace = Algorithm::Shell.run(&mut seq).unwrap();

    let mut gap = 0usize;
    for step in trace {
        match step {
            Step::Info { ref message } if message.starts_with("gap ") => {
                gap = message["gap ".len()..].parse().unwrap();
            }
            Step::Compare { i, j } => {
                assert_eq!(j - i, gap, "compare ({i}, {j}) does not span gap {gap}");
            }
            _ => {}
        }
    }
}

#[test]
fn marks_arrive_only_after_the_final_gap() {
    let mut seq = Sequence::from_keys(&[4, 3, 2, 1]);
    let trace = Algorithm::Shell.run(&mut seq).unwrap();

    let steps: Vec<_> = trace.collect();
    let first_mark = steps
        .iter()
        .position(|s| matches!(s, Step::MarkSorted { .. }))
        .unwrap();
    let last_compare = steps
        .iter()
        .rposition(|s| matches!(s, Step::Compare { .. }))
        .unwrap();
    assert!(last_compare < first_mark);
}
