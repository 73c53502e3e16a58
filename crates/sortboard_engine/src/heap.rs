//! Heap sort tracer.
//!
//! Builds a max-heap bottom-up, then repeatedly extracts the root to the
//! end of the shrinking unsorted range.

use std::cmp::Ordering;

use sortboard_foundation::{Result, Sequence};

use crate::trace::{Recorder, Trace};

/// Sifts `root` down within the heap range `[0, size)`.
///
/// Emits a compare for each existing child against the current largest
/// (left examined before right); strict inequality keeps the root on key
/// ties and prefers the left child over the right. Recursion depth is
/// bounded by the tree height within `size`.
fn heapify(rec: &mut Recorder<'_>, size: usize, root: usize) -> Result<()> {
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    if left < size && rec.compare(largest, left)? == Ordering::Less {
        largest = left;
    }
    if right < size && rec.compare(largest, right)? == Ordering::Less {
        largest = right;
    }

    if largest != root {
        rec.swap(root, largest)?;
        heapify(rec, size, largest)?;
    }
    Ok(())
}

/// Traces heap sort over `seq`, sorting it in place.
///
/// Build phase: heapify every internal node from the last one up to the
/// root, so each subtree is heap-ordered before its parent is processed.
/// Extraction phase: swap the root with the end of the unsorted range,
/// mark that position sorted, and re-heapify the shrunken range. Not
/// stable.
///
/// # Errors
///
/// Index bookkeeping errors only; unreachable for sequences constructed
/// through this crate.
pub fn trace(seq: &mut Sequence) -> Result<Trace> {
    let n = seq.len();
    let mut rec = Recorder::new(seq);
    rec.info("heap sort started");

    rec.info("building max heap");
    for i in (0..n / 2).rev() {
        heapify(&mut rec, n, i)?;
    }

    for end in (1..n).rev() {
        rec.info(format!("extract max: swap root to position {end}"));
        rec.swap(0, end)?;
        rec.mark_sorted(end);
        heapify(&mut rec, end, 0)?;
    }
    if n > 0 {
        rec.mark_sorted(0);
    }

    rec.info("heap sort finished");
    Ok(rec.finish())
}
