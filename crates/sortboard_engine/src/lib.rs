//! Sorting trace engine for Sortboard.
//!
//! Takes a sequence and an algorithm selector and produces an ordered,
//! consume-once [`Trace`] of [`Step`] events describing every comparison,
//! swap, and completion marker, with no rendering concern. The engine
//! sorts its sequence in place and eagerly; a renderer replays the trace
//! at whatever pace it likes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod algorithm;
pub mod bubble;
mod generate;
pub mod heap;
pub mod shell;
mod step;
mod trace;

pub use algorithm::Algorithm;
pub use generate::{DEFAULT_COUNT, KEY_MAX, KEY_MIN, generate, seeded_rng, shuffle};
pub use step::Step;
pub use trace::{Trace, TraceStats};
