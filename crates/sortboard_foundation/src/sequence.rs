//! The sortable sequence.

use crate::element::Element;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Textual shape of a sequence.
///
/// Recorded at construction so that reserialization never has to re-infer
/// whether the board was entered as bare numbers or labeled pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SequenceFormat {
    /// Bare numeric tokens (`5,3,8`).
    #[default]
    Bare,
    /// Labeled tokens (`ava:5,ben:3`).
    Labeled,
}

/// An ordered, fixed-length, mutable sequence of elements.
///
/// The length is fixed at construction; only the relative order and
/// position contents change over the sequence's lifetime. Exactly one
/// trace run at a time may mutate a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sequence {
    /// The elements, indexable by position 0..n-1.
    elements: Vec<Element>,
    /// The textual shape this sequence was created in.
    format: SequenceFormat,
}

impl Sequence {
    /// Creates a sequence from elements with an explicit format tag.
    #[must_use]
    pub fn new(elements: Vec<Element>, format: SequenceFormat) -> Self {
        Self { elements, format }
    }

    /// Creates a bare-format sequence from numeric keys.
    #[must_use]
    pub fn from_keys(keys: &[i64]) -> Self {
        Self {
            elements: keys.iter().copied().map(Element::Bare).collect(),
            format: SequenceFormat::Bare,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Returns the sort key at `index`, if in range.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<i64> {
        self.elements.get(index).map(Element::key)
    }

    /// Returns all sort keys in position order.
    #[must_use]
    pub fn keys(&self) -> Vec<i64> {
        self.elements.iter().map(Element::key).collect()
    }

    /// Returns all display labels in position order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.elements.iter().map(Element::label).collect()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the recorded textual format.
    #[must_use]
    pub const fn format(&self) -> SequenceFormat {
        self.format
    }

    /// Returns the largest key, if the sequence is non-empty.
    #[must_use]
    pub fn max_key(&self) -> Option<i64> {
        self.elements.iter().map(Element::key).max()
    }

    /// Returns true if the keys are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].key() <= w[1].key())
    }

    /// Swaps the elements at positions `i` and `j` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let length = self.elements.len();
        if i >= length {
            return Err(Error::index_out_of_bounds(i, length));
        }
        if j >= length {
            return Err(Error::index_out_of_bounds(j, length));
        }
        self.elements.swap(i, j);
        Ok(())
    }
}
