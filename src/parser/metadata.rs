//! Keyword-tagged metadata lines
//!
//! Metadata lines look like `Title: Original`, `Author: Thinking Rabbit`
//! or `Difficulty: hard`. Keywords are matched case-insensitively at
//! their *last* occurrence in the line, so keyword-like text inside a
//! free-form value does not shadow the real tag, and the value is
//! everything after the first colon at or behind the match.

/// Keys accepted for a collection or level title.
pub const TITLE_KEYS: &[&str] = &["title:", "collection:"];
/// Keys accepted for an author name. The spaced variants occur in the wild.
pub const AUTHOR_KEYS: &[&str] = &["author:", "author :", "authors :"];
pub const EMAIL_KEYS: &[&str] = &["email:"];
pub const HOMEPAGE_KEYS: &[&str] = &["homepage:"];
pub const AUTHOR_COMMENT_KEYS: &[&str] = &["author comment:"];
pub const VIEW_KEYS: &[&str] = &["view:"];
pub const DIFFICULTY_KEYS: &[&str] = &["difficulty:"];
pub const SOLUTION_NAME_KEYS: &[&str] = &["solution name:"];
pub const OWN_SOLUTION_KEYS: &[&str] = &["own solution:"];
pub const SOLUTION_COMMENT_KEYS: &[&str] = &["solution comment:"];
pub const SOLUTION_COMMENT_END_KEYS: &[&str] = &["solution comment end:"];

/// Last occurrence of an ASCII keyword in `line`, case-insensitive.
pub fn rfind_keyword(line: &str, keyword: &str) -> Option<usize> {
    let haystack = line.as_bytes();
    let needle = keyword.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// True if the line carries any of the given keywords.
pub fn has_keyword(line: &str, keys: &[&str]) -> bool {
    keys.iter().any(|key| rfind_keyword(line, key).is_some())
}

/// Extract the trimmed value of the first matching keyword.
///
/// The value is the substring after the first `:` at or behind the
/// keyword match. Returns `None` when no keyword matches.
pub fn keyword_value(line: &str, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(at) = rfind_keyword(line, key) {
            let rest = &line[at..];
            let value = match rest.find(':') {
                Some(colon) => rest[colon + 1..].trim(),
                None => "",
            };
            return Some(value.to_string());
        }
    }
    None
}

/// Lines starting and ending with `::` are format-description lines
/// written by the Sokoban YASC program; they are kept as comment text.
pub fn is_format_description_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("::") && trimmed.ends_with("::")
}
