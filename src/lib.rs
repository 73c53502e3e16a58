//! Sortboard - sorting algorithm trace engine and terminal visualizer
//!
//! This crate re-exports all layers of the Sortboard system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: sortboard_runtime    — Session, pacing, renderer, REPL
//! Layer 2: sortboard_parser     — Text parsing and serialization
//! Layer 1: sortboard_engine     — Step traces, the three sorts, generation
//! Layer 0: sortboard_foundation — Core types (Element, Sequence, Error)
//! ```

pub use sortboard_engine as engine;
pub use sortboard_foundation as foundation;
pub use sortboard_parser as parser;
pub use sortboard_runtime as runtime;
