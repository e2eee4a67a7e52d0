//! Sokoban level-collection parsing
//!
//! Turns the loosely structured, human-authored collection text format
//! (metadata keywords, ASCII board diagrams, run-length compressed rows,
//! trailing solutions and snapshots, all in arbitrary order) into a fully
//! structured in-memory model.

pub mod core;
pub mod error;
pub mod loader;
pub mod parser;

pub use error::{Result, SokError};
