//! Error types for the collection parser
//!
//! Parsing itself is total: malformed lines degrade to comment text
//! instead of failing. Only loading a collection file can go wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SokError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SokError>;
