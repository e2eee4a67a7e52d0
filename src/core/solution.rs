//! Solution move records

use serde::{Deserialize, Serialize};

/// A solution in LURD notation
///
/// `l/u/r/d` is a plain move, `L/U/R/D` a push. Name and comment default
/// to empty rather than being absent so downstream consumers never have
/// to distinguish "missing" from "empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Canonical (run-length decoded) move string
    pub lurd: String,
    pub name: String,
    pub comment: String,
    /// True for user-authored solutions, false for shipped ("official") ones
    pub is_own: bool,
}

impl Solution {
    pub fn new(lurd: impl Into<String>) -> Self {
        Self {
            lurd: lurd.into(),
            name: String::new(),
            comment: String::new(),
            is_own: false,
        }
    }

    /// Number of moves in the solution
    pub fn move_count(&self) -> usize {
        self.lurd.chars().count()
    }

    /// Number of pushes (uppercase moves) in the solution
    pub fn push_count(&self) -> usize {
        self.lurd.chars().filter(|c| c.is_ascii_uppercase()).count()
    }
}
