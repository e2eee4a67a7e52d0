//! Level collection data

use crate::core::{Author, Level};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed level collection: metadata plus the levels in file order.
///
/// Built once by [`CollectionBuilder`] and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub title: String,
    pub author: Author,
    pub comment: String,
    pub levels: Vec<Level>,
    /// File the collection was loaded from, if any
    pub source_path: Option<PathBuf>,
}

impl Collection {
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Builder aggregating completed levels and collection metadata
#[derive(Debug, Clone, Default)]
pub struct CollectionBuilder {
    title: String,
    author: Author,
    comment: String,
    levels: Vec<Level>,
    source_path: Option<PathBuf>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn levels(mut self, levels: Vec<Level>) -> Self {
        self.levels = levels;
        self
    }

    pub fn source_path(mut self, path: Option<PathBuf>) -> Self {
        self.source_path = path;
        self
    }

    pub fn build(self) -> Collection {
        Collection {
            title: self.title,
            author: self.author,
            comment: self.comment,
            levels: self.levels,
            source_path: self.source_path,
        }
    }
}
