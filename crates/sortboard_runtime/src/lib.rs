//! Session, pacing, rendering, and REPL for Sortboard.
//!
//! The runtime drives the trace engine from an interactive terminal:
//! a [`Session`] owns the single active sequence and enforces the
//! one-run-at-a-time contract, a [`TextRenderer`] maps steps to bar
//! output, and the [`Repl`] ties both to a line editor.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod editor;
mod render;
mod repl;
mod serialize;
mod session;

pub use config::{DEFAULT_DELAY_MS, DelayConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::{RunView, TextRenderer};
pub use repl::Repl;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;
