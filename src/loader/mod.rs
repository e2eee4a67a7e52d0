//! Collection file loading
//!
//! File-system entry points around the parser. All actual structure
//! recovery happens in [`crate::parser`]; this module only reads files
//! and splits them into lines.

pub mod collection;

pub use collection::CollectionLoader;
