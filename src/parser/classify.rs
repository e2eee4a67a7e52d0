//! Board-row classification predicates
//!
//! These are deliberately explicit character-class checks rather than
//! regexes: the classes are tiny, and the exact membership (legacy floor
//! markers, run-length digits, the trailing-digit guard) is what keeps
//! board rows apart from numeric titles and metadata.

/// Characters that may appear in a (possibly run-length encoded) board row.
///
/// `-` and `_` are legacy floor markers; digits and `|` only occur in
/// run-length encoded rows and never survive preprocessing.
fn is_board_char(c: char) -> bool {
    matches!(c, '#' | '$' | '*' | '.' | '@' | '+' | ' ' | '-' | '_' | '|') || c.is_ascii_digit()
}

/// Characters that may appear in a (possibly run-length encoded) empty
/// board row.
fn is_empty_row_char(c: char) -> bool {
    matches!(c, '-' | '_' | ' ' | '|') || c.is_ascii_digit()
}

/// True iff the line consists entirely of board characters and actually
/// carries board structure.
///
/// Lines made up of only floor markers, spaces, digits, `|` and `.` are
/// rejected (those are dates, numbers, underlined headings, ...), as is
/// any line ending in a digit, which guards against swallowing numeric
/// titles like "30-8-55".
pub fn is_board_row(line: &str) -> bool {
    let Some(last) = line.chars().last() else {
        return false;
    };

    line.chars().all(is_board_char)
        && !line
            .chars()
            .all(|c| matches!(c, '-' | '_' | ' ' | '.' | '|') || c.is_ascii_digit())
        && !last.is_ascii_digit()
}

/// True iff the line could be a run-length encoded empty board row.
pub fn is_empty_board_row_candidate(line: &str) -> bool {
    !line.is_empty() && line.chars().all(is_empty_row_char)
}

/// An interior-row candidate: only floor markers and spaces, with at
/// least one non-space character. Interior rows are checked after
/// preprocessing, so digits and `|` no longer occur here.
fn is_interior_candidate(line: &str) -> bool {
    !line.trim().is_empty() && line.chars().all(|c| matches!(c, '-' | '_' | ' '))
}

/// True iff the line at `index` is an interior empty board row: a
/// blank-looking row sandwiched between genuine board rows (possibly with
/// further interior rows in between). Anything else ends the board block.
pub fn is_interior_board_row(lines: &[String], index: usize) -> bool {
    if index < 1 || index >= lines.len() {
        return false;
    }
    if !is_interior_candidate(&lines[index]) {
        return false;
    }

    // A genuine board row must lie above the interior rows.
    let mut above = index;
    loop {
        if above == 0 {
            return false;
        }
        above -= 1;
        let row = &lines[above];
        if is_interior_candidate(row) {
            continue;
        }
        if is_board_row(row) {
            break;
        }
        return false;
    }

    // And below them.
    for row in &lines[index + 1..] {
        if is_interior_candidate(row) {
            continue;
        }
        return is_board_row(row);
    }

    false
}
