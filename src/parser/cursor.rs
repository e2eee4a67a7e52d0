//! Rewindable line cursor
//!
//! The scan over a collection is not strictly forward: block readers
//! consume a variable number of lines and hand the terminating line back,
//! and a block trigger that turns out to be a false positive rewinds to
//! the trigger line so it can be reclassified. The cursor is an explicit
//! bounds-checked index rather than an iterator for exactly that reason.

/// Cursor over the preprocessed input lines.
#[derive(Debug)]
pub struct Cursor {
    lines: Vec<String>,
    pos: usize,
}

impl Cursor {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    /// All lines, for classification that needs lookahead/lookback.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// True if the cursor stands on the final line of the input.
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.lines.len()
    }

    /// The line under the cursor. Empty once the cursor has run past the
    /// end, so block readers never index out of bounds.
    pub fn current(&self) -> &str {
        self.line_at(self.pos)
    }

    pub fn line_at(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Move to an absolute position (clamped to one past the end).
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.lines.len());
    }
}
