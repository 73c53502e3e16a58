//! Text parsing and serialization for Sortboard sequences.
//!
//! Converts between the comma-separated textual board representation and
//! the in-memory sequence. Parsing is total: malformed tokens degrade to
//! a smaller or empty sequence, never an error. Serialization uses the
//! format tag recorded on the sequence, never re-inference.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod parser;
mod serializer;

pub use parser::parse;
pub use serializer::serialize;
