//! The single-pass collection scan
//!
//! Every line runs through a priority-ordered rule cascade: format
//! description lines, then metadata keywords, then (once a level is open)
//! solution/save-game/snapshot blocks, then the comment fallback, and
//! finally board detection. Board detection is the only retroactive step:
//! it resolves the buffered comment lines into title and trailing
//! comment, finalizes the open level and starts the next one.
//!
//! Malformed lines are never rejected; whatever fails every other rule
//! becomes comment text.

use crate::core::{AuthorBuilder, Collection, CollectionBuilder, Level, Snapshot, Solution};
use crate::parser::blocks;
use crate::parser::board;
use crate::parser::classify::is_board_row;
use crate::parser::cursor::Cursor;
use crate::parser::metadata::{
    has_keyword, is_format_description_line, keyword_value, AUTHOR_COMMENT_KEYS, AUTHOR_KEYS,
    DIFFICULTY_KEYS, EMAIL_KEYS, HOMEPAGE_KEYS, OWN_SOLUTION_KEYS, SOLUTION_COMMENT_KEYS,
    SOLUTION_NAME_KEYS, TITLE_KEYS, VIEW_KEYS,
};
use crate::parser::preprocess::preprocess;
use crate::parser::resolver;
use chrono::Local;
use log::{debug, trace};
use std::path::Path;

/// File suffixes stripped when deriving a collection title from its file
/// name.
const KNOWN_SUFFIXES: &[&str] = &[".sok", ".txt", ".xsb"];

/// Default title prefix for levels that state no title anywhere.
const DEFAULT_LEVEL_TITLE: &str = "Level";

/// Parse an in-memory line sequence into a [`Collection`].
///
/// `source_path` is only used for default-title derivation; no I/O
/// happens here. Parsing never fails: every line has a defined fallback.
pub fn parse_collection(lines: &[String], source_path: Option<&Path>) -> Collection {
    let mut preprocessed = preprocess(lines);
    // Synthetic terminal line, so end-of-input finalization shares the
    // board-detection path.
    preprocessed.push(String::new());

    let mut cursor = Cursor::new(preprocessed);

    let mut level: Option<Level> = None;
    let mut levels: Vec<Level> = Vec::new();
    let mut level_number = 1usize;

    let mut collection_title = String::new();
    let mut collection_comment = String::new();
    let mut collection_author = AuthorBuilder::new();
    let mut level_author = AuthorBuilder::new();

    let mut comment_lines: Vec<String> = Vec::new();

    'scan: while !cursor.at_end() {
        let line = cursor.current().to_string();

        // Rule 1: YASC format-description lines are plain comment.
        if is_format_description_line(&line) {
            comment_lines.push(line.trim().to_string());
            cursor.advance();
            continue;
        }

        // Rule 2: explicit title. Before any level it names the
        // collection; afterwards the currently open level.
        if let Some(title) = keyword_value(&line, TITLE_KEYS) {
            match level.as_mut() {
                None => collection_title = title,
                Some(open) => open.title = title,
            }
            cursor.advance();
            continue;
        }

        // Rules 3-6: author fields accumulate on the collection author
        // until the first board, then on the open level's author.
        if let Some(name) = keyword_value(&line, AUTHOR_KEYS) {
            author_for(&level, &mut level_author, &mut collection_author).set_name(&name);
            cursor.advance();
            continue;
        }
        if let Some(email) = keyword_value(&line, EMAIL_KEYS) {
            author_for(&level, &mut level_author, &mut collection_author).set_email(&email);
            cursor.advance();
            continue;
        }
        if let Some(url) = keyword_value(&line, HOMEPAGE_KEYS) {
            author_for(&level, &mut level_author, &mut collection_author)
                .set_website_url(&url);
            cursor.advance();
            continue;
        }
        if let Some(comment) = keyword_value(&line, AUTHOR_COMMENT_KEYS) {
            author_for(&level, &mut level_author, &mut collection_author)
                .set_comment(&comment);
            cursor.advance();
            continue;
        }

        // Level-specific keywords live under the board data; without an
        // open level they fall through to the comment rule.
        if let Some(open) = level.as_mut() {
            if let Some(view) = keyword_value(&line, VIEW_KEYS) {
                open.transformation = view;
                cursor.advance();
                continue;
            }
            if let Some(difficulty) = keyword_value(&line, DIFFICULTY_KEYS) {
                open.difficulty = difficulty;
                cursor.advance();
                continue;
            }

            // Any line mentioning "solution" may start a move block; if
            // no moves follow, the cursor is rewound and the line drops
            // through to the remaining rules.
            if has_keyword(&line, &["solution"]) {
                if let Some(moves) = blocks::read_solution_moves(&mut cursor) {
                    trace!("solution with {} moves for level {level_number}", moves.len());
                    open.add_solution(Solution::new(moves));
                    continue;
                }
            }

            // Solution metadata only ever refers to an existing solution.
            if !open.solutions.is_empty() {
                if let Some(name) = keyword_value(&line, SOLUTION_NAME_KEYS) {
                    if let Some(solution) = open.last_solution_mut() {
                        solution.name = name;
                    }
                    cursor.advance();
                    continue;
                }
                if let Some(value) = keyword_value(&line, OWN_SOLUTION_KEYS) {
                    if let Some(solution) = open.last_solution_mut() {
                        solution.is_own = value.to_lowercase().contains("yes");
                    }
                    cursor.advance();
                    continue;
                }
                if let Some(first_chunk) = keyword_value(&line, SOLUTION_COMMENT_KEYS) {
                    let comment = blocks::read_solution_comment(&mut cursor, &first_chunk);
                    if let Some(solution) = open.last_solution_mut() {
                        solution.comment = comment;
                    }
                    continue;
                }
            }

            if has_keyword(&line, &["savegame"]) {
                if let Some(moves) = blocks::read_snapshot_moves(&mut cursor) {
                    let mut snapshot = Snapshot::new(moves);
                    snapshot.auto_saved = true;
                    open.add_snapshot(snapshot);
                    continue;
                }
            }
            if has_keyword(&line, &["snapshot"]) {
                if let Some(moves) = blocks::read_snapshot_moves(&mut cursor) {
                    open.add_snapshot(Snapshot::new(moves));
                    continue;
                }
            }
        }

        // Comment fallback: anything that is not board data.
        if !cursor.is_last() && !is_board_row(&line) {
            comment_lines.push(line);
            cursor.advance();
            continue;
        }

        // Board data of a new level begins here (or the input ends). The
        // buffered comment lines now split into the previous level's
        // trailing comment and this level's title.
        let resolution = resolver::resolve(&comment_lines, cursor.is_last());
        match level.as_mut() {
            Some(open) => open.comment = resolution.comment,
            None => collection_comment = resolution.comment,
        }

        if let Some(finished) = level.take() {
            levels.push(finalize_level(
                finished,
                &level_author,
                &collection_author,
                &mut level_number,
            ));
        }

        if cursor.is_last() {
            break 'scan;
        }

        comment_lines.clear();
        level_author = AuthorBuilder::new();

        let title = match resolution.title {
            Some(title) => title,
            // An explicitly titled collection whose first level carries no
            // title of its own shares the title with that level.
            None if level_number == 1 && !collection_title.is_empty() => {
                collection_title.clone()
            }
            None => format!("{DEFAULT_LEVEL_TITLE} {level_number}"),
        };

        let mut next_level = Level::new(title);
        let board = board::assemble(&mut cursor);
        debug!(
            "board for level {level_number}: {}x{}, {} boxes",
            board.width, board.height, board.box_count
        );
        next_level.rows = board.rows;
        next_level.width = board.width;
        next_level.height = board.height;
        next_level.box_count = board.box_count;
        level = Some(next_level);
    }

    let title = if collection_title.is_empty() {
        default_collection_title(source_path)
    } else {
        collection_title
    };

    CollectionBuilder::new()
        .title(title)
        .author(collection_author.build())
        .comment(collection_comment)
        .levels(levels)
        .source_path(source_path.map(Path::to_path_buf))
        .build()
}

/// Route author lines to the open level's author, or the collection's.
fn author_for<'a>(
    level: &Option<Level>,
    level_author: &'a mut AuthorBuilder,
    collection_author: &'a mut AuthorBuilder,
) -> &'a mut AuthorBuilder {
    if level.is_some() {
        level_author
    } else {
        collection_author
    }
}

/// Assign author and sequence number to a finished level.
///
/// A level author with no field ever set is replaced wholesale by the
/// collection author; a partially specified author is kept as-is, never
/// merged field by field.
fn finalize_level(
    mut level: Level,
    level_author: &AuthorBuilder,
    collection_author: &AuthorBuilder,
    level_number: &mut usize,
) -> Level {
    level.author = if level_author.is_untouched() {
        collection_author.build()
    } else {
        level_author.build()
    };
    level.number = *level_number;
    *level_number += 1;
    level
}

/// Title for a collection that never states one: the file stem (with a
/// known extension stripped), or a dated placeholder without a file.
fn default_collection_title(source_path: Option<&Path>) -> String {
    if let Some(name) = source_path.and_then(|p| p.file_name()).map(|n| n.to_string_lossy()) {
        for suffix in KNOWN_SUFFIXES {
            if let Some(stem) = name.strip_suffix(suffix) {
                return stem.to_string();
            }
        }
        return name.to_string();
    }

    format!("Collection {}", Local::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rows: &[&str]) -> Collection {
        let lines: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        parse_collection(&lines, None)
    }

    #[test]
    fn test_title_then_board() {
        let collection = parse(&["Title: Demo", "#####", "#@$.#", "#####"]);
        assert_eq!(collection.levels.len(), 1);

        let level = &collection.levels[0];
        assert_eq!(level.title, "Demo");
        assert_eq!(level.width, 5);
        assert_eq!(level.height, 3);
        assert_eq!(level.box_count, 1);
    }

    #[test]
    fn test_solution_block() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "solution",
            "lurd",
            "",
        ]);
        let level = &collection.levels[0];
        assert_eq!(level.solutions.len(), 1);
        assert_eq!(level.solutions[0].lurd, "lurd");
        assert!(level.solutions[0].name.is_empty());
        assert!(!level.solutions[0].is_own);
    }

    #[test]
    fn test_comment_line_before_board_is_title() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "",
            "Second level",
            "#######",
            "#@ $ .#",
            "#######",
        ]);
        assert_eq!(collection.levels.len(), 2);
        assert_eq!(collection.levels[1].title, "Second level");
        assert!(collection.levels[0].comment.is_empty());
    }

    #[test]
    fn test_levels_numbered_in_file_order() {
        let collection = parse(&[
            "#####", "#@$.#", "#####", "", "#####", "#.$@#", "#####", "", "#####", "#@*.#",
            "#####",
        ]);
        let numbers: Vec<usize> = collection.levels.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_untitled_levels_get_default_titles() {
        let collection = parse(&["#####", "#@$.#", "#####", "", "#####", "#.$@#", "#####"]);
        assert_eq!(collection.levels[0].title, "Level 1");
        assert_eq!(collection.levels[1].title, "Level 2");
    }

    #[test]
    fn test_collection_metadata_before_first_board() {
        let collection = parse(&[
            "Collection: Classics",
            "Author: A. Uthor",
            "Email: a@example.com",
            "",
            "First",
            "#####",
            "#@$.#",
            "#####",
        ]);
        assert_eq!(collection.title, "Classics");
        assert_eq!(collection.author.name, "A. Uthor");
        assert_eq!(collection.author.email, "a@example.com");
        assert_eq!(collection.levels[0].title, "First");
    }

    #[test]
    fn test_level_author_inherits_wholesale() {
        let collection = parse(&[
            "Author: Coll Author",
            "Email: coll@example.com",
            "#####",
            "#@$.#",
            "#####",
            "",
            "#####",
            "#.$@#",
            "#####",
            "Author: Level Author",
        ]);
        // First level never sets an author field: wholesale inheritance.
        assert_eq!(collection.levels[0].author.name, "Coll Author");
        assert_eq!(collection.levels[0].author.email, "coll@example.com");
        // Second level names an author: no field-by-field merge.
        assert_eq!(collection.levels[1].author.name, "Level Author");
        assert!(collection.levels[1].author.email.is_empty());
    }

    #[test]
    fn test_title_after_board_names_that_level() {
        let collection = parse(&["#####", "#@$.#", "#####", "Title: Named After"]);
        assert_eq!(collection.levels[0].title, "Named After");
    }

    #[test]
    fn test_default_collection_title_from_path() {
        let lines = vec!["#####".to_string(), "#@$.#".to_string(), "#####".to_string()];
        let collection = parse_collection(&lines, Some(Path::new("/tmp/microban.sok")));
        assert_eq!(collection.title, "microban");
        assert_eq!(
            collection.source_path.as_deref(),
            Some(Path::new("/tmp/microban.sok"))
        );
    }

    #[test]
    fn test_default_collection_title_without_path() {
        let collection = parse(&["#####", "#@$.#", "#####"]);
        let expected = format!("Collection {}", Local::now().format("%Y-%m-%d"));
        assert_eq!(collection.title, expected);
    }

    #[test]
    fn test_prose_mentioning_solution_is_comment() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "no solution is known for this one",
            "more commentary",
        ]);
        let level = &collection.levels[0];
        assert!(level.solutions.is_empty());
        assert_eq!(
            level.comment,
            "no solution is known for this one\nmore commentary"
        );
    }

    #[test]
    fn test_savegame_tagged_auto_saved() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "Savegame",
            "lu*rd",
            "",
            "Snapshot",
            "rdlu",
        ]);
        let level = &collection.levels[0];
        assert_eq!(level.snapshots.len(), 2);
        assert!(level.snapshots[0].auto_saved);
        assert_eq!(level.snapshots[0].moves, "lu*rd");
        assert!(!level.snapshots[1].auto_saved);
        assert_eq!(level.snapshots[1].moves, "rdlu");
    }

    #[test]
    fn test_solution_metadata_attaches_to_last_solution() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "Solution",
            "lurd",
            "",
            "Solution name: fastest",
            "Own solution: Yes",
            "Solution comment: neat trick",
            "works every time",
            "Solution comment end:",
        ]);
        let solution = &collection.levels[0].solutions[0];
        assert_eq!(solution.name, "fastest");
        assert!(solution.is_own);
        assert_eq!(solution.comment, "neat trick\nworks every time");
    }

    #[test]
    fn test_run_length_board_decoded_before_classification() {
        let collection = parse(&["5#|#@$.#|5#", "", "solution", "3lU"]);
        let level = &collection.levels[0];
        assert_eq!(level.rows, vec!["#####", "#@$.#", "#####"]);
        assert_eq!(level.solutions[0].lurd, "lllU");
    }

    #[test]
    fn test_trailing_comment_goes_to_previous_level() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "a trailing remark",
            "",
            "Level Two",
            "#####",
            "#.$@#",
            "#####",
        ]);
        assert_eq!(collection.levels[0].comment, "a trailing remark");
        assert_eq!(collection.levels[1].title, "Level Two");
    }

    #[test]
    fn test_comment_before_any_level_goes_to_collection() {
        let collection = parse(&[
            "A collection of tiny puzzles.",
            "",
            "One",
            "#####",
            "#@$.#",
            "#####",
        ]);
        assert_eq!(collection.comment, "A collection of tiny puzzles.");
        assert_eq!(collection.levels[0].title, "One");
    }

    #[test]
    fn test_view_and_difficulty() {
        let collection = parse(&[
            "#####",
            "#@$.#",
            "#####",
            "View: rotate left",
            "Difficulty: hard",
        ]);
        let level = &collection.levels[0];
        assert_eq!(level.transformation, "rotate left");
        assert_eq!(level.difficulty, "hard");
    }

    #[test]
    fn test_interior_rows_within_board() {
        let collection = parse(&["######", "#@$ .#", "--", "######"]);
        let level = &collection.levels[0];
        assert_eq!(level.height, 4);
        assert_eq!(level.rows[2], " ");
    }

    #[test]
    fn test_empty_input() {
        let collection = parse(&[]);
        assert!(collection.is_empty());
        assert!(collection.comment.is_empty());
    }

    #[test]
    fn test_width_is_max_row_length() {
        let collection = parse(&["########", "#@$.#", "########"]);
        assert_eq!(collection.levels[0].width, 8);
    }
}
