//! The serialize/parse round-trip law
//!
//! `parse(serialize(parse(t)))` must equal `parse(t)` for any text `t`:
//! one parse normalizes, after which the textual form is a fixed point.

use proptest::prelude::*;

use sortboard_foundation::{Element, Sequence, SequenceFormat};
use sortboard_parser::{parse, serialize};

#[test]
fn well_formed_examples_round_trip_exactly() {
    for text in ["5,3,8,1", "ava:5,ben:3", "x:1", "-7,0,7", "a:5,7,b:2"] {
        let seq = parse(text);
        assert_eq!(serialize(&seq), text, "normal form changed for {text:?}");
    }
}

#[test]
fn serialization_uses_the_recorded_format() {
    // A bare-format board collapses labels to keys.
    let bare = Sequence::new(
        vec![Element::labeled("hidden", 4), Element::Bare(2)],
        SequenceFormat::Bare,
    );
    assert_eq!(serialize(&bare), "4,2");

    // A labeled-format board keeps each element's own token shape.
    let labeled = Sequence::new(
        vec![Element::labeled("ava", 4), Element::Bare(2)],
        SequenceFormat::Labeled,
    );
    assert_eq!(serialize(&labeled), "ava:4,2");
}

proptest! {
    #[test]
    fn round_trip_is_a_fixed_point_for_any_text(text in ".{0,120}") {
        let once = parse(&text);
        let twice = parse(&serialize(&once));
        prop_assert_eq!(&once, &twice, "diverged for {:?}", text);
    }

    #[test]
    fn round_trip_preserves_generated_boards(
        tokens in prop::collection::vec((0usize..3, "[a-z]{1,6}", -999i64..999), 0..24)
    ) {
        // Mix bare tokens, labeled tokens, and junk.
        let text = tokens
            .iter()
            .map(|(kind, label, key)| match kind {
                0 => key.to_string(),
                1 => format!("{label}:{key}"),
                _ => label.clone(),
            })
            .collect::<Vec<_>>()
            .join(",");

        let once = parse(&text);
        let twice = parse(&serialize(&once));
        prop_assert_eq!(once, twice);
    }
}
