//! Trace of steps from a single algorithm run.
//!
//! A trace is finite, ordered, and consumed exactly once, front to back.
//! The engine computes sort decisions eagerly against its working
//! sequence; consumers may suspend between steps for pacing.

use std::cmp::Ordering;
use std::collections::VecDeque;

use sortboard_foundation::{Error, Result, Sequence};

use crate::step::Step;

// =============================================================================
// Trace Statistics
// =============================================================================

/// Summary counters for a full trace, fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of compare steps.
    pub compares: usize,
    /// Number of swap steps.
    pub swaps: usize,
    /// Number of mark-sorted steps.
    pub marks: usize,
    /// Number of informational steps.
    pub infos: usize,
}

impl TraceStats {
    /// Returns the total number of steps.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.compares + self.swaps + self.marks + self.infos
    }
}

// =============================================================================
// Trace
// =============================================================================

/// An ordered, finite, non-restartable sequence of steps.
///
/// Steps are taken from the front via [`Trace::next_step`] or the
/// [`Iterator`] impl; there is no rewind. [`Trace::abort`] discards
/// whatever has not been consumed yet.
#[derive(Clone, Debug)]
pub struct Trace {
    /// Remaining steps, oldest first.
    steps: VecDeque<Step>,
    /// Whole-run counters, unaffected by consumption.
    stats: TraceStats,
}

impl Trace {
    /// Wraps a recorded step log into a consumable trace.
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        let mut stats = TraceStats::default();
        for step in &steps {
            match step {
                Step::Compare { .. } => stats.compares += 1,
                Step::Swap { .. } => stats.swaps += 1,
                Step::MarkSorted { .. } => stats.marks += 1,
                Step::Info { .. } => stats.infos += 1,
            }
        }
        Self {
            steps: steps.into(),
            stats,
        }
    }

    /// Consumes and returns the next step, if any remain.
    pub fn next_step(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }

    /// Returns the number of steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Returns true once every step has been consumed or discarded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    /// Discards all remaining steps.
    ///
    /// The working sequence stays in whatever state the consumed prefix
    /// produced; there is no consistency guarantee after an abort.
    pub fn abort(&mut self) {
        self.steps.clear();
    }

    /// Returns the whole-run step counters.
    #[must_use]
    pub const fn stats(&self) -> TraceStats {
        self.stats
    }
}

impl Iterator for Trace {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.next_step()
    }
}

// =============================================================================
// Recorder
// =============================================================================

/// Couples a working sequence with its step log.
///
/// Every emitted `Swap` goes through [`Recorder::swap`], so the log and
/// the in-place mutation cannot diverge.
pub(crate) struct Recorder<'a> {
    seq: &'a mut Sequence,
    steps: Vec<Step>,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(seq: &'a mut Sequence) -> Self {
        Self {
            seq,
            steps: Vec::new(),
        }
    }

    /// Emits a compare step and returns the ordering of `key(i)` against
    /// `key(j)`.
    pub(crate) fn compare(&mut self, i: usize, j: usize) -> Result<Ordering> {
        self.steps.push(Step::Compare { i, j });
        let a = self
            .seq
            .key(i)
            .ok_or_else(|| Error::index_out_of_bounds(i, self.seq.len()))?;
        let b = self
            .seq
            .key(j)
            .ok_or_else(|| Error::index_out_of_bounds(j, self.seq.len()))?;
        Ok(a.cmp(&b))
    }

    /// Emits a swap step and performs the swap on the working sequence.
    pub(crate) fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.steps.push(Step::Swap { i, j });
        self.seq.swap(i, j)
    }

    /// Emits a mark-sorted step.
    pub(crate) fn mark_sorted(&mut self, index: usize) {
        self.steps.push(Step::MarkSorted { index });
    }

    /// Emits an informational step.
    pub(crate) fn info(&mut self, message: impl Into<String>) {
        self.steps.push(Step::info(message));
    }

    /// Finishes recording and returns the consumable trace.
    pub(crate) fn finish(self) -> Trace {
        Trace::from_steps(self.steps)
    }
}

// =============================================================================
// Tests
// =============================================================================
