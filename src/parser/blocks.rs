//! Multi-line blocks following a trigger keyword
//!
//! Three block kinds trail a level: solution move-strings, save-game /
//! snapshot move-strings, and free-text solution comments. Each consumes
//! lines under its own termination rule and leaves the cursor on the line
//! the outer scan has to look at next. A trigger with no content (prose
//! that merely mentions "solution") rewinds to the trigger line and
//! reports nothing, so the line can be reclassified as a comment.

use crate::parser::cursor::Cursor;
use crate::parser::metadata::{rfind_keyword, SOLUTION_COMMENT_END_KEYS};
use crate::parser::rle;
use log::trace;

/// Pure solution content: LURD letters plus run-length digits.
fn is_solution_text(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| matches!(c, 'l' | 'u' | 'r' | 'd' | 'L' | 'U' | 'R' | 'D') || c.is_ascii_digit())
}

/// Save-game / snapshot content additionally allows the `*` marker for
/// the current position in the move history.
fn is_snapshot_text(line: &str) -> bool {
    !line.is_empty()
        && line.chars().all(|c| {
            matches!(c, 'l' | 'u' | 'r' | 'd' | 'L' | 'U' | 'R' | 'D' | '*') || c.is_ascii_digit()
        })
}

fn decode_if_encoded(moves: String) -> String {
    if rle::is_encoded(&moves) {
        rle::decode(&moves)
    } else {
        moves
    }
}

/// Read the move lines following a "solution" trigger.
///
/// Blank lines are skipped only before any content has been read; the
/// block ends at the first line that is not pure LURD/digit text. With
/// content, the cursor is left on the terminating line and the decoded
/// move string returned. Without content the cursor rewinds to the
/// trigger line and `None` is returned.
pub fn read_solution_moves(cursor: &mut Cursor) -> Option<String> {
    let trigger = cursor.pos();
    let mut moves = String::new();
    let mut next = trigger + 1;

    while next < cursor.len() {
        let row = cursor.line_at(next).trim();

        if moves.is_empty() && row.is_empty() {
            next += 1;
            continue;
        }
        if !is_solution_text(row) {
            break;
        }

        moves.push_str(row);
        next += 1;
    }

    if moves.is_empty() {
        trace!("'solution' trigger at line {trigger} had no move data");
        cursor.seek(trigger);
        return None;
    }

    cursor.seek(next);
    Some(decode_if_encoded(moves))
}

/// Read the move lines following a "savegame" or "snapshot" trigger.
///
/// Unlike solutions, an empty line terminates the block immediately even
/// before any content: save-games and snapshots are written as one
/// contiguous block.
pub fn read_snapshot_moves(cursor: &mut Cursor) -> Option<String> {
    let trigger = cursor.pos();
    let mut moves = String::new();
    let mut next = trigger + 1;

    while next < cursor.len() {
        let row = cursor.line_at(next).trim();

        if row.is_empty() || !is_snapshot_text(row) {
            break;
        }

        moves.push_str(row);
        next += 1;
    }

    if moves.is_empty() {
        trace!("snapshot trigger at line {trigger} had no move data");
        cursor.seek(trigger);
        return None;
    }

    cursor.seek(next);
    Some(decode_if_encoded(moves))
}

/// Read a free-text solution comment block.
///
/// `first_chunk` is whatever followed "solution comment:" on the trigger
/// line. Subsequent lines are taken verbatim until a line containing
/// "solution comment end:" (which is consumed) or the final line of the
/// input. The cursor is left on the next line for the outer scan.
pub fn read_solution_comment(cursor: &mut Cursor, first_chunk: &str) -> String {
    let mut comment = first_chunk.to_string();
    let mut next = cursor.pos() + 1;

    // The final line of the input is synthetic and never part of a comment.
    while next + 1 < cursor.len() {
        let row = cursor.line_at(next).trim().to_string();
        if SOLUTION_COMMENT_END_KEYS
            .iter()
            .any(|key| rfind_keyword(&row, key).is_some())
        {
            next += 1;
            break;
        }
        comment.push('\n');
        comment.push_str(&row);
        next += 1;
    }

    cursor.seek(next);
    comment
}
