//! Elements of a sortable sequence.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single value on the board.
///
/// Elements are either a bare number or a labeled pair. Ordering always
/// uses the numeric key; the label is opaque display data that travels
/// with the element through swaps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Element {
    /// A bare numeric value; the key is the value itself.
    Bare(i64),
    /// A labeled value, sorted by `key` and displayed as `label`.
    Labeled {
        /// Opaque display label.
        label: Arc<str>,
        /// Numeric sort key.
        key: i64,
    },
}

impl Element {
    /// Creates a labeled element.
    #[must_use]
    pub fn labeled(label: impl Into<Arc<str>>, key: i64) -> Self {
        Self::Labeled {
            label: label.into(),
            key,
        }
    }

    /// Returns the numeric sort key.
    ///
    /// Every comparison in every algorithm goes through this; the label's
    /// textual form never participates in ordering.
    #[must_use]
    pub const fn key(&self) -> i64 {
        match self {
            Self::Bare(key) | Self::Labeled { key, .. } => *key,
        }
    }

    /// Returns the display label.
    ///
    /// Bare elements are labeled by their key's decimal form.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Bare(key) => key.to_string(),
            Self::Labeled { label, .. } => label.to_string(),
        }
    }

    /// Returns true if this element carries an explicit label.
    #[must_use]
    pub const fn is_labeled(&self) -> bool {
        matches!(self, Self::Labeled { .. })
    }
}

impl From<i64> for Element {
    fn from(key: i64) -> Self {
        Self::Bare(key)
    }
}

impl fmt::Display for Element {
    /// Formats the element in its canonical token form: `5` or `ava:5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(key) => write!(f, "{key}"),
            Self::Labeled { label, key } => write!(f, "{label}:{key}"),
        }
    }
}
