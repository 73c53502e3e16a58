//! Step event types emitted by a trace run.
//!
//! A step is one observable unit of algorithm action. Renderers consume
//! steps in order and map them to presentation updates.

use std::fmt;

// =============================================================================
// Step
// =============================================================================

/// One observable sorting action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The keys at two positions were compared.
    Compare {
        /// First compared position.
        i: usize,
        /// Second compared position.
        j: usize,
    },

    /// The elements at two positions were exchanged.
    Swap {
        /// First swapped position.
        i: usize,
        /// Second swapped position.
        j: usize,
    },

    /// A position reached its final sorted place.
    MarkSorted {
        /// The position that is now sorted.
        index: usize,
    },

    /// Informational message about run progress.
    Info {
        /// The message text.
        message: String,
    },
}

impl Step {
    /// Creates an informational step.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    /// Returns a short name for the step kind.
    #[must_use]
    pub const fn step_type(&self) -> &'static str {
        match self {
            Self::Compare { .. } => "compare",
            Self::Swap { .. } => "swap",
            Self::MarkSorted { .. } => "mark-sorted",
            Self::Info { .. } => "info",
        }
    }

    /// Returns true if replaying this step mutates the sequence.
    ///
    /// Only swaps move data; compares, markers, and messages are pure
    /// observations.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Swap { .. })
    }

    /// Returns true if this step finalizes a position.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::MarkSorted { .. })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { i, j } => write!(f, "compare positions {i} and {j}"),
            Self::Swap { i, j } => write!(f, "swap positions {i} and {j}"),
            Self::MarkSorted { index } => write!(f, "position {index} is sorted"),
            Self::Info { message } => write!(f, "{message}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
