//! Board assembly
//!
//! Collects the consecutive board rows of one level, normalizes the
//! legacy floor markers, strips the indentation shared by all rows (rows
//! are never trimmed independently on the left, so relative alignment
//! survives) and computes the level geometry.

use crate::core::level::{BOX, BOX_ON_GOAL};
use crate::parser::classify::{is_board_row, is_interior_board_row};
use crate::parser::cursor::Cursor;

/// Assembled board rows plus derived geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardData {
    pub rows: Vec<String>,
    pub width: usize,
    pub height: usize,
    pub box_count: usize,
}

/// Consume the board block starting at the cursor position.
///
/// Rows are taken while they classify as board rows; blank-looking rows
/// are kept (as a single space) only when they are interior to the board.
/// The first line that is neither ends the block and stays under the
/// cursor for the outer scan.
pub fn assemble(cursor: &mut Cursor) -> BoardData {
    let mut raw_rows: Vec<String> = Vec::new();
    let mut box_count = 0;
    let mut common_indent = usize::MAX;

    while !cursor.at_end() {
        let line = cursor.current();

        if !is_board_row(line) {
            if !is_interior_board_row(cursor.lines(), cursor.pos()) {
                break;
            }
            raw_rows.push(" ".to_string());
            cursor.advance();
            continue;
        }

        let row = line.replace(['-', '_'], " ");

        if let Some(first) = row.find(|c: char| !c.is_whitespace()) {
            common_indent = common_indent.min(first);
        }
        box_count += row.chars().filter(|&c| c == BOX || c == BOX_ON_GOAL).count();

        raw_rows.push(row);
        cursor.advance();
    }

    let common_indent = if common_indent == usize::MAX {
        0
    } else {
        common_indent
    };

    let mut width = 0;
    let rows: Vec<String> = raw_rows
        .iter()
        .map(|row| {
            // Keep the indentation beyond the shared column, drop the rest,
            // and trim trailing whitespace per row. Board rows are ASCII,
            // so byte indices are char indices.
            let first = row
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(row.len());
            let keep_from = common_indent.min(first);
            let normalized = format!("{}{}", &row[keep_from..first], row.trim());
            width = width.max(normalized.len());
            normalized
        })
        .collect();

    BoardData {
        height: rows.len(),
        width,
        box_count,
        rows,
    }
}
