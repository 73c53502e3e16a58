//! Core types for Sortboard.
//!
//! This crate provides:
//! - [`Element`] - A sortable value, bare or labeled
//! - [`Sequence`] - The fixed-length mutable board of elements
//! - [`SequenceFormat`] - The recorded textual shape of a board
//! - [`Error`] - Error types for the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod element;
mod error;
mod sequence;

pub use element::Element;
pub use error::{Error, ErrorKind, Result};
pub use sequence::{Sequence, SequenceFormat};
