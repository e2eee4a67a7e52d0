//! Collection text parsing
//!
//! A single forward scan over preprocessed lines recovers structure from
//! the legacy collection format: no grammar, just a priority-ordered rule
//! cascade with limited lookahead/lookback. See [`extract`] for the main
//! pass and the leaf modules for the individual concerns.

pub mod blocks;
pub mod board;
pub mod classify;
pub mod cursor;
pub mod extract;
pub mod metadata;
pub mod preprocess;
pub mod resolver;
pub mod rle;

pub use cursor::Cursor;
pub use extract::parse_collection;
