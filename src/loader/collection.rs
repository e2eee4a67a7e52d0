//! Collection file loader (.sok / .txt / .xsb)

use crate::core::Collection;
use crate::parser::parse_collection;
use crate::{Result, SokError};
use std::fs;
use std::path::Path;

/// Loader for collection files
pub struct CollectionLoader;

impl CollectionLoader {
    /// Load a collection from a file. The path is remembered on the
    /// result and used for default-title derivation.
    pub fn load_from_file(path: &Path) -> Result<Collection> {
        let content = fs::read_to_string(path).map_err(SokError::IoError)?;
        Ok(Self::parse_with_source(&content, Some(path)))
    }

    /// Parse a collection from in-memory text with no source file.
    pub fn parse(content: &str) -> Collection {
        Self::parse_with_source(content, None)
    }

    /// Parse a collection, optionally attributing it to a source path.
    pub fn parse_with_source(content: &str, path: Option<&Path>) -> Collection {
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        parse_collection(&lines, path)
    }
}
