//! Parsing of the textual board representation.

use sortboard_foundation::{Element, Sequence, SequenceFormat};

/// Parses a comma-separated board representation into a sequence.
///
/// Each token is either `label:value` (split at the first colon) or a
/// bare integer. Tokens whose value part does not parse are dropped
/// silently to accommodate loose user input; parsing never fails. The
/// sequence is tagged [`SequenceFormat::Labeled`] iff at least one
/// surviving token carried a label.
#[must_use]
pub fn parse(text: &str) -> Sequence {
    let mut elements = Vec::new();
    let mut labeled = false;

    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some((label, value)) = token.split_once(':') {
            if let Ok(key) = value.trim().parse::<i64>() {
                elements.push(Element::labeled(label.trim(), key));
                labeled = true;
            }
        } else if let Ok(key) = token.parse::<i64>() {
            elements.push(Element::Bare(key));
        }
    }

    let format = if labeled {
        SequenceFormat::Labeled
    } else {
        SequenceFormat::Bare
    };
    Sequence::new(elements, format)
}
