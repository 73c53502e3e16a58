//! Shell sort tracer.
//!
//! Gapped insertion sort over the classic halving gap sequence: n/2,
//! n/4, ..., 1. No Knuth or Sedgewick variant; the halving sequence is
//! part of the observable trace contract.

use std::cmp::Ordering;

use sortboard_foundation::{Result, Sequence};

use crate::trace::{Recorder, Trace};

/// Traces shell sort over `seq`, sorting it in place.
///
/// For each gap, each element from `gap` onward is walked back through
/// its gapped chain: compare across the gap, swap on strict inequality
/// and continue, stop at the first ordered pair. Positions are marked
/// sorted only once the final gap pass completes. Not stable.
///
/// # Errors
///
/// Index bookkeeping errors only; unreachable for sequences constructed
/// through this crate.
pub fn trace(seq: &mut Sequence) -> Result<Trace> {
    let n = seq.len();
    let mut rec = Recorder::new(seq);
    rec.info("shell sort started");

    let mut gap = n / 2;
    while gap > 0 {
        rec.info(format!("gap {gap}"));
        for i in gap..n {
            let mut j = i;
            while j >= gap {
                if rec.compare(j - gap, j)? == Ordering::Greater {
                    rec.swap(j - gap, j)?;
                    j -= gap;
                } else {
                    break;
                }
            }
        }
        gap /= 2;
    }

    for index in 0..n {
        rec.mark_sorted(index);
    }
    rec.info("shell sort finished");
    Ok(rec.finish())
}
