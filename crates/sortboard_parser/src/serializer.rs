//! Serialization of a sequence back to its textual form.

use sortboard_foundation::{Element, Sequence, SequenceFormat};

/// Serializes a sequence as comma-separated tokens.
///
/// Uses the format tag recorded on the sequence: bare-format boards emit
/// plain keys (collapsing any label to its key), labeled-format boards
/// emit each element in its own canonical token form (`label:key` for
/// labeled elements, the key alone for bare ones).
#[must_use]
pub fn serialize(seq: &Sequence) -> String {
    let tokens: Vec<String> = match seq.format() {
        SequenceFormat::Bare => seq
            .elements()
            .iter()
            .map(|element| element.key().to_string())
            .collect(),
        SequenceFormat::Labeled => seq.elements().iter().map(Element::to_string).collect(),
    };
    tokens.join(",")
}
