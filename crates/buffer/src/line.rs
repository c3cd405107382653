// Chunk: docs/chunks/line_document - Line-per-buffer document with cursor

//! A single editable line backed by its own [`GapBuffer`].
//!
//! Every line except the last one of a document ends with [`LINE_TERMINATOR`]
//! as its final element. The terminator is stored inline but never counted as
//! a column: columns run over `[0, visible_len()]`.

use crate::config::BufferConfig;
use crate::error::{GapBufferError, Result};
use crate::gap_buffer::{GapBuffer, LINE_TERMINATOR};

#[derive(Debug, Clone)]
pub struct Line {
    chars: GapBuffer,
}

impl Line {
    /// Creates an empty line without a terminator.
    pub fn new(config: &BufferConfig) -> Self {
        Self {
            chars: GapBuffer::with_capacity(config.line_capacity),
        }
    }

    /// Builds a line from a sequence of characters, terminator included if present.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from the gap buffer.
    pub fn from_chars<I>(config: &BufferConfig, chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        Ok(Self {
            chars: GapBuffer::from_chars(config.line_capacity, chars)?,
        })
    }

    /// Number of stored characters, terminator included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of columns, i.e. characters excluding the terminator.
    pub fn visible_len(&self) -> usize {
        self.chars.visible_len()
    }

    pub fn has_terminator(&self) -> bool {
        self.chars.invisible_count() > 0
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &GapBuffer {
        &self.chars
    }

    /// Visible text of the line.
    pub fn content(&self) -> String {
        self.visible_chars().collect()
    }

    /// Full logical sequence, terminator included.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.chars()
    }

    /// Characters excluding the terminator.
    pub fn visible_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.chars().take(self.visible_len())
    }

    pub fn to_vec(&self) -> Vec<char> {
        self.chars.to_vec()
    }

    /// Inserts `ch` at `col`, clamping the column to the end of the visible text.
    ///
    /// Returns the column the character landed on. Splitting a line is the
    /// document's job, so the line terminator is refused.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::TerminatorInLine`] for [`LINE_TERMINATOR`] and
    /// propagates allocation failures from the gap buffer.
    pub fn insert_at(&mut self, col: usize, ch: char) -> Result<usize> {
        let col = col.min(self.visible_len());
        if ch == LINE_TERMINATOR {
            return Err(GapBufferError::TerminatorInLine { col });
        }
        self.chars.insert_at(col, ch)?;
        Ok(col)
    }

    /// Deletes the character at `col`.
    ///
    /// Columns at or past the visible end are ignored and return `None`; the
    /// terminator only goes away when the document joins lines.
    ///
    /// # Errors
    ///
    /// Only fails if the buffer's own bookkeeping is inconsistent.
    pub fn delete_at(&mut self, col: usize) -> Result<Option<char>> {
        if col >= self.visible_len() {
            return Ok(None);
        }
        self.chars.delete_at(col).map(Some)
    }

    /// Adds or removes the trailing terminator.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from the gap buffer.
    pub(crate) fn set_terminator(&mut self, terminated: bool) -> Result<()> {
        let last = self.len().saturating_sub(1);
        match (self.has_terminator(), terminated) {
            (false, true) => self.chars.push(LINE_TERMINATOR),
            (true, false) => self.chars.delete_at(last).map(|_| ()),
            _ => Ok(()),
        }
    }
}
