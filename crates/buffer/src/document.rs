// Chunk: docs/chunks/line_document - Line-per-buffer document with cursor

//! Document is the main public API for editing a text file line by line.
//!
//! It owns one [`Line`] (and so one gap buffer) per line of text and tracks a
//! cursor as (line, column). Edits inside a line go straight to that line's
//! buffer. Splitting and joining lines rebuilds the affected lines from fresh
//! buffers instead of moving data between them.
//!
//! Each mutation returns [`DirtyLines`] so a renderer can redraw only what
//! changed.

use std::str::FromStr;

use crate::config::BufferConfig;
use crate::error::DocumentError;
use crate::gap_buffer::LINE_TERMINATOR;
use crate::line::Line;
use crate::types::{DirtyLines, Position};

pub type Result<T> = std::result::Result<T, DocumentError>;

/// An ordered collection of lines with a cursor.
///
/// Invariants:
/// - there is always at least one line
/// - every line but the last ends with a terminator, the last has none
/// - the cursor column never exceeds the visible length of its line
#[derive(Debug)]
pub struct Document {
    lines: Vec<Line>,
    cursor: Position,
    config: BufferConfig,
}

impl Document {
    /// Creates a document holding one empty line.
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            lines: vec![Line::new(&config)],
            cursor: Position::default(),
            config,
        }
    }

    /// Creates a document from text, one line per `'\n'`-terminated segment.
    ///
    /// Text ending in a newline gets a trailing empty line, so
    /// [`content`](Self::content) reproduces `text` exactly.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures while building line buffers.
    pub fn from_text(text: &str, config: BufferConfig) -> Result<Self> {
        let mut lines = text
            .split_inclusive(LINE_TERMINATOR)
            .map(|segment| Line::from_chars(&config, segment.chars()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if lines.last().map_or(true, Line::has_terminator) {
            lines.push(Line::new(&config));
        }

        Ok(Self {
            lines,
            cursor: Position::default(),
            config,
        })
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: usize) -> Option<&Line> {
        self.lines.get(line)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter()
    }

    /// Visible text of a line, or an empty string if out of bounds.
    pub fn line_content(&self, line: usize) -> String {
        self.lines.get(line).map(Line::content).unwrap_or_default()
    }

    /// Visible length of a line, or 0 if out of bounds.
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, Line::visible_len)
    }

    /// Total character count, line terminators included.
    pub fn len(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole document as a string: every line's characters in order.
    pub fn content(&self) -> String {
        let mut content = String::with_capacity(self.len());
        content.extend(self.lines.iter().flat_map(Line::chars));
        content
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor left by one character, wrapping to the end of the
    /// previous line. Does nothing at the start of the document.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    /// Moves the cursor right by one character, wrapping to the start of the
    /// next line. Does nothing at the end of the document.
    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    /// Moves the cursor up one line, clamping the column.
    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    /// Moves the cursor down one line, clamping the column.
    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Sets the cursor, clamped to valid bounds.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.line_count() - 1);
        let col = pos.col.min(self.line_len(line));
        self.cursor = Position::new(line, col);
    }

    // ==================== Mutations ====================

    /// Inserts a character at the cursor and advances it.
    ///
    /// A line terminator splits the line instead (see [`insert_newline`](Self::insert_newline)).
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from the line's buffer.
    pub fn insert_char(&mut self, ch: char) -> Result<DirtyLines> {
        if ch == LINE_TERMINATOR {
            return self.insert_newline();
        }

        let line = self.cursor.line;
        let col = self.lines[line].insert_at(self.cursor.col, ch)?;
        self.cursor.col = col + 1;
        Ok(DirtyLines::Single(line))
    }

    /// Splits the cursor line at the cursor and moves the cursor to the start
    /// of the new line.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures; the document is unchanged on error.
    pub fn insert_newline(&mut self) -> Result<DirtyLines> {
        let Position { line, col } = self.cursor;
        let chars = self.lines[line].to_vec();
        let (head, tail) = chars.split_at(col);

        // The tail keeps whatever terminator the original line had.
        let mut head = Line::from_chars(&self.config, head.iter().copied())?;
        head.set_terminator(true)?;
        let tail = Line::from_chars(&self.config, tail.iter().copied())?;

        self.lines[line] = head;
        self.lines.insert(line + 1, tail);
        self.cursor = Position::new(line + 1, 0);

        tracing::debug!(line, col, lines = self.lines.len(), "split line");
        Ok(DirtyLines::FromLineToEnd(line))
    }

    /// Deletes the character before the cursor (Backspace).
    ///
    /// At the start of a line the line is joined onto the previous one. At the
    /// start of the document nothing happens and `DirtyLines::None` is returned.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures while joining lines.
    pub fn delete_backward(&mut self) -> Result<DirtyLines> {
        let Position { line, col } = self.cursor;

        if col > 0 {
            self.lines[line].delete_at(col - 1)?;
            self.cursor.col -= 1;
            return Ok(DirtyLines::Single(line));
        }

        if line == 0 {
            return Ok(DirtyLines::None);
        }

        let prev_line = line - 1;
        let prev_len = self.line_len(prev_line);
        self.join_with_next(prev_line)?;
        self.cursor = Position::new(prev_line, prev_len);
        Ok(DirtyLines::FromLineToEnd(prev_line))
    }

    /// Deletes the character under the cursor (Delete key).
    ///
    /// At the end of a line the next line is joined onto this one. At the end
    /// of the document nothing happens. The cursor never moves.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures while joining lines.
    pub fn delete_forward(&mut self) -> Result<DirtyLines> {
        let Position { line, col } = self.cursor;

        if col < self.line_len(line) {
            self.lines[line].delete_at(col)?;
            return Ok(DirtyLines::Single(line));
        }

        if line + 1 >= self.line_count() {
            return Ok(DirtyLines::None);
        }

        self.join_with_next(line)?;
        Ok(DirtyLines::FromLineToEnd(line))
    }

    /// Inserts a string at the cursor, one character at a time.
    ///
    /// Returns the combined dirty region. Stops at the first error; characters
    /// inserted before it stay in place.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures.
    pub fn insert_str(&mut self, s: &str) -> Result<DirtyLines> {
        let mut dirty = DirtyLines::None;
        for ch in s.chars() {
            dirty.merge(self.insert_char(ch)?);
        }
        Ok(dirty)
    }

    /// Replaces `line` and `line + 1` with one fresh line holding the visible
    /// text of the first followed by everything in the second.
    fn join_with_next(&mut self, line: usize) -> Result<()> {
        let next = &self.lines[line + 1];
        let mut joined = Line::from_chars(
            &self.config,
            self.lines[line].visible_chars().chain(next.visible_chars()),
        )?;
        joined.set_terminator(next.has_terminator())?;

        self.lines[line] = joined;
        self.lines.remove(line + 1);

        tracing::debug!(line, lines = self.lines.len(), "joined lines");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_text(text, BufferConfig::default())
    }
}
