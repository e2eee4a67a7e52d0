//! Level data
//!
//! A level is mutable while the parser assembles it (board rows, metadata
//! and solutions arrive interleaved) and becomes logically immutable once
//! it has been appended to its collection.

use crate::core::{Author, Snapshot, Solution};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Wall square
pub const WALL: char = '#';
/// Box on a plain floor square
pub const BOX: char = '$';
/// Box sitting on a goal square
pub const BOX_ON_GOAL: char = '*';
/// Goal square
pub const GOAL: char = '.';
/// Player on a plain floor square
pub const PLAYER: char = '@';
/// Player standing on a goal square
pub const PLAYER_ON_GOAL: char = '+';

/// A single puzzle level inside a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub title: String,
    /// 1-based position within the collection, in file order
    pub number: usize,
    pub author: Author,
    pub comment: String,
    /// Board rows after floor normalization and common-indent stripping
    pub rows: Vec<String>,
    pub width: usize,
    pub height: usize,
    pub box_count: usize,
    /// Raw view/orientation value ("View:" line), empty if none
    pub transformation: String,
    /// Free-form difficulty label, empty if none
    pub difficulty: String,
    pub solutions: SmallVec<[Solution; 1]>,
    pub snapshots: SmallVec<[Snapshot; 1]>,
}

impl Level {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_solution(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    pub fn add_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// The most recently added solution, if any. Solution name / comment /
    /// own-solution metadata lines always attach to this one.
    pub fn last_solution_mut(&mut self) -> Option<&mut Solution> {
        self.solutions.last_mut()
    }

    /// Render the board as a single newline-joined string.
    pub fn board_as_string(&self) -> String {
        self.rows.join("\n")
    }
}
