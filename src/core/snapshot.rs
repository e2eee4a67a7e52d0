//! Snapshot and save-game move records

use serde::{Deserialize, Serialize};

/// Marker inside a snapshot move string for the current position in the
/// move history at the time the game was saved.
pub const HISTORY_MARKER: char = '*';

/// A snapshot of a play-through in LURD notation
///
/// Save-games are snapshots written automatically on exit; they carry the
/// `auto_saved` flag to distinguish them from manually created snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Move string, possibly containing a single [`HISTORY_MARKER`]
    pub moves: String,
    pub auto_saved: bool,
}

impl Snapshot {
    pub fn new(moves: impl Into<String>) -> Self {
        Self {
            moves: moves.into(),
            auto_saved: false,
        }
    }

    /// Position of the history marker, if any
    pub fn history_position(&self) -> Option<usize> {
        self.moves.chars().position(|c| c == HISTORY_MARKER)
    }
}
