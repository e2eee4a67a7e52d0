//! Retroactive title/comment classification
//!
//! While scanning, every line that is neither metadata nor board data is
//! buffered as comment text. Only when the next level's board shows up
//! (or the input ends) can those lines be split into "trailing comment of
//! the level that just ended" and "title of the level about to start".
//! The only available signal is blank-line adjacency: a single non-blank
//! line at the end of the buffer, set off by a blank line (or standing
//! alone), is the upcoming level's title.

/// Result of resolving a buffered comment block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleCommentResolution {
    /// Title for the level whose board triggered the resolution
    pub title: Option<String>,
    /// Trailing comment for the previously open level (or the collection
    /// when no level was open yet)
    pub comment: String,
}

/// Split the buffered comment lines into an optional upcoming-level title
/// and the previous level's trailing comment.
///
/// `at_end_of_input` suppresses title extraction: with no board to
/// follow, the whole block is comment. An explicitly stated title
/// (a "Title:" metadata line) always wins over the heuristic; the caller
/// enforces that by overwriting.
pub fn resolve(comment_lines: &[String], at_end_of_input: bool) -> TitleCommentResolution {
    let mut idx = comment_lines.len();

    // Walk backward over trailing blank lines to the last real line.
    while idx > 0 {
        let last = idx - 1;
        if comment_lines[last].trim().is_empty() {
            idx -= 1;
            continue;
        }

        let mut title = None;
        let mut end: isize = last as isize;

        // A lone line from the back, delimited by a blank line above it
        // (or by being the very first line), is the upcoming title.
        if !at_end_of_input
            && (last == 0 || comment_lines[last - 1].trim().is_empty())
        {
            title = Some(comment_lines[last].clone());
            // Skip the title line and the blank separator above it.
            end -= 2;
        }

        // Drop blank lines between the comment body and the title.
        while end >= 0 && comment_lines[end as usize].trim().is_empty() {
            end -= 1;
        }

        let mut body: Vec<&str> = Vec::new();
        if end >= 0 {
            for row in &comment_lines[..=end as usize] {
                // Leading blank lines never make it into the comment.
                if body.is_empty() && row.trim().is_empty() {
                    continue;
                }
                body.push(row);
            }
        }

        return TitleCommentResolution {
            title,
            comment: body.join("\n"),
        };
    }

    TitleCommentResolution::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(resolve(&[], false), TitleCommentResolution::default());
        assert_eq!(
            resolve(&lines(&["", "   "]), false),
            TitleCommentResolution::default()
        );
    }

    #[test]
    fn test_single_line_is_title() {
        let res = resolve(&lines(&["Level two"]), false);
        assert_eq!(res.title.as_deref(), Some("Level two"));
        assert!(res.comment.is_empty());
    }

    #[test]
    fn test_blank_separated_line_is_title() {
        let res = resolve(
            &lines(&["trailing remark", "", "Level two"]),
            false,
        );
        assert_eq!(res.title.as_deref(), Some("Level two"));
        assert_eq!(res.comment, "trailing remark");
    }

    #[test]
    fn test_adjacent_lines_are_all_comment() {
        // No blank line above the last line: nothing qualifies as title.
        let res = resolve(&lines(&["first remark", "second remark"]), false);
        assert_eq!(res.title, None);
        assert_eq!(res.comment, "first remark\nsecond remark");
    }

    #[test]
    fn test_end_of_input_never_extracts_title() {
        let res = resolve(&lines(&["closing words"]), true);
        assert_eq!(res.title, None);
        assert_eq!(res.comment, "closing words");
    }

    #[test]
    fn test_trailing_and_leading_blanks_dropped() {
        let res = resolve(&lines(&["", "body", "", "The Title", "", ""]), false);
        assert_eq!(res.title.as_deref(), Some("The Title"));
        assert_eq!(res.comment, "body");
    }

    #[test]
    fn test_interior_blank_lines_kept_in_comment() {
        let res = resolve(&lines(&["para one", "", "para two", "tail"]), false);
        assert_eq!(res.title, None);
        assert_eq!(res.comment, "para one\n\npara two\ntail");
    }
}
