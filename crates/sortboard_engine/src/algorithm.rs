//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use sortboard_foundation::{Error, Result, Sequence};

use crate::trace::Trace;
use crate::{bubble, heap, shell};

/// The comparison sorts the engine can trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Adjacent-pair exchange sort with early exit.
    #[default]
    Bubble,
    /// Max-heap selection sort.
    Heap,
    /// Gapped insertion sort with a halving gap sequence.
    Shell,
}

impl Algorithm {
    /// Every selectable algorithm, in display order.
    pub const ALL: [Self; 3] = [Self::Bubble, Self::Heap, Self::Shell];

    /// Returns the selector name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Heap => "heap",
            Self::Shell => "shell",
        }
    }

    /// Returns the explanatory text shown alongside the selector.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble sort. Time complexity O(n^2). Compares adjacent pairs \
                 and swaps them when out of order. In-place and stable."
            }
            Self::Heap => {
                "Heap sort. Time complexity O(n log n). Builds a max-heap, then \
                 repeatedly swaps the root to the end and re-heapifies. \
                 In-place, not stable."
            }
            Self::Shell => {
                "Shell sort. Time complexity O(n log n) to O(n^2). Insertion \
                 sort generalized over a shrinking gap. In-place, not stable."
            }
        }
    }

    /// Runs this algorithm over `seq`, sorting it in place.
    ///
    /// Returns the full step trace of the run.
    ///
    /// # Errors
    ///
    /// Returns an error only on internal index bookkeeping failures, which
    /// are unreachable for any sequence constructed through this crate.
    pub fn run(self, seq: &mut Sequence) -> Result<Trace> {
        match self {
            Self::Bubble => bubble::trace(seq),
            Self::Heap => heap::trace(seq),
            Self::Shell => shell::trace(seq),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "heap" => Ok(Self::Heap),
            "shell" => Ok(Self::Shell),
            other => Err(Error::unknown_algorithm(other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
