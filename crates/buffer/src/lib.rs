// Chunk: docs/chunks/line_gap_buffer - Per-line gap buffer storage for the line editor
// Chunk: docs/chunks/line_document - Line-per-buffer document with cursor

//! mille-buffer: line storage for the mille terminal editor.
//!
//! Every line of a document lives in its own gap buffer, so typing and
//! backspacing at the same spot are O(1) and only the edited line is touched.
//!
//! # Overview
//!
//! - [`GapBuffer`]: the storage of one line. Positional read, insert and
//!   delete, with the gap following the edit point.
//! - [`Line`]: one line of text; clamps columns and owns the inline line
//!   terminator.
//! - [`Document`]: the ordered lines plus a cursor; splits and joins lines and
//!   loads/saves files.
//!
//! # Example
//!
//! ```
//! use mille_buffer::{DirtyLines, Document, Position};
//!
//! let mut doc = Document::new();
//! doc.insert_str("helloworld").unwrap();
//! assert_eq!(doc.line_count(), 1);
//!
//! doc.set_cursor(Position::new(0, 5));
//! let dirty = doc.insert_newline().unwrap();
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(doc.content(), "hello\nworld");
//! ```
//!
//! # Gap buffer
//!
//! ```
//! use mille_buffer::GapBuffer;
//!
//! let mut buf = GapBuffer::with_capacity(4);
//! for ch in ['a', 'b', 'c'] {
//!     buf.push(ch).unwrap();
//! }
//! buf.insert_at(1, 'x').unwrap();
//! assert_eq!(buf.to_vec(), vec!['a', 'x', 'b', 'c']);
//! assert_eq!(buf.capacity(), 8);
//! ```

mod config;
mod document;
mod error;
mod file;
mod gap_buffer;
mod line;
mod types;

pub use config::{BufferConfig, DEFAULT_LINE_CAPACITY};
pub use document::Document;
pub use error::{DocumentError, GapBufferError};
pub use gap_buffer::{GapBuffer, LINE_TERMINATOR};
pub use line::Line;
pub use types::{DirtyLines, Position};
