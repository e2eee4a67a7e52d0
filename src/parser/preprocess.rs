//! Input normalization ahead of the main scan
//!
//! Three passes, in order: strip the file-wide uniform email-quote prefix,
//! split embedded literal `\n` sequences into real lines, and expand
//! run-length encoded board lines. Every later stage observes plain
//! one-row-per-line board text.

use crate::parser::classify::{is_board_row, is_empty_board_row_candidate};
use crate::parser::rle;
use log::debug;

/// Run all normalization passes.
pub fn preprocess(lines: &[String]) -> Vec<String> {
    let lines = strip_mail_quotes(lines);
    let lines = split_escaped_newlines(&lines);
    expand_run_length_lines(&lines)
}

/// Strip the email-quote prefix shared by every line.
///
/// Quoted email replies prefix each line with `>`. The minimum count of
/// leading `>` across all lines is removed from every line, so quoting
/// inside actual content survives. Idempotent: a second pass finds a
/// minimum of zero and changes nothing.
pub fn strip_mail_quotes(lines: &[String]) -> Vec<String> {
    let quote_depth = lines
        .iter()
        .map(|line| line.chars().take_while(|&c| c == '>').count())
        .min()
        .unwrap_or(0);

    if quote_depth == 0 {
        return lines.to_vec();
    }

    lines.iter().map(|line| line[quote_depth..].to_string()).collect()
}

/// Split lines on embedded two-character `\n` sequences.
///
/// Some collection files carry several logical lines in one physical line
/// with literal backslash-n as the separator.
pub fn split_escaped_newlines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.split(r"\n").map(str::to_string))
        .collect()
}

/// Expand run-length encoded board lines into plain rows.
///
/// A line is a candidate when it classifies as a (possibly encoded) board
/// row or empty board row and contains a digit or `|`. The expansion is
/// only accepted when it decodes to at least three rows, or a neighboring
/// line looks like board data; a lone short candidate is far more likely
/// to be a numeric level title such as "30-8-55" and is left untouched.
pub fn expand_run_length_lines(lines: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if is_expansion_candidate(line) {
            let decoded = rle::decode(line);
            let rows: Vec<&str> = decoded.split('\n').collect();

            let prev = if i == 0 { "" } else { &lines[i - 1] };
            let next = lines.get(i + 1).map(String::as_str).unwrap_or("");

            if rows.len() >= 3 || looks_like_board(prev) || looks_like_board(next) {
                debug!("expanding run-length line {i} into {} rows", rows.len());
                expanded.extend(rows.iter().map(|r| r.to_string()));
                continue;
            }
            debug!("keeping run-length candidate at line {i} as text: {line:?}");
        }

        expanded.push(line.clone());
    }

    expanded
}

fn is_expansion_candidate(line: &str) -> bool {
    (is_board_row(line) || is_empty_board_row_candidate(line))
        && line.chars().any(|c| c.is_ascii_digit() || c == '|')
}

fn looks_like_board(line: &str) -> bool {
    is_board_row(line) || is_empty_board_row_candidate(line)
}
