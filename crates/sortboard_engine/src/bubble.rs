//! Bubble sort tracer.

use std::cmp::Ordering;

use sortboard_foundation::{Result, Sequence};

use crate::trace::{Recorder, Trace};

/// Traces bubble sort over `seq`, sorting it in place.
///
/// Each pass emits a compare for every adjacent pair in the unsorted
/// prefix, swapping on strict key inequality, then marks the pass's last
/// position sorted. A swap-free pass proves the remaining prefix is
/// already ordered, so those positions are marked and the run ends early.
/// Every position is marked sorted exactly once overall. Equal keys are
/// never swapped, so the sort is stable.
///
/// # Errors
///
/// Index bookkeeping errors only; unreachable for sequences constructed
/// through this crate.
pub fn trace(seq: &mut Sequence) -> Result<Trace> {
    let n = seq.len();
    let mut rec = Recorder::new(seq);
    rec.info("bubble sort started");

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if rec.compare(j, j + 1)? == Ordering::Greater {
                rec.swap(j, j + 1)?;
                swapped = true;
            }
        }
        rec.mark_sorted(n - 1 - i);
        if !swapped {
            rec.info("no swaps in this pass; remaining positions are sorted");
            for k in 0..n - i - 1 {
                rec.mark_sorted(k);
            }
            break;
        }
    }

    rec.info("bubble sort finished");
    Ok(rec.finish())
}
