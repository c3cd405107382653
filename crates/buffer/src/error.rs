// Chunk: docs/chunks/buffer_errors - Typed errors for buffer and document operations

//! Error types for the gap buffer and the document layer built on top of it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`GapBuffer`](crate::GapBuffer) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GapBufferError {
    /// A logical index was outside the range the operation accepts.
    ///
    /// `at`, `set_at` and `delete_at` accept `[0, len)`; `insert_at` accepts `[0, len]`.
    #[error("index {index} out of range for gap buffer of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// `set_at` would overwrite a line terminator or write one. Terminators
    /// only enter and leave through `insert_at` and `delete_at`.
    #[error("set_at cannot change a line terminator at index {index}")]
    TerminatorOverwrite { index: usize },
    /// A line terminator was inserted into a `Line`; lines are split by the document.
    #[error("cannot insert a line terminator at column {col} of a line")]
    TerminatorInLine { col: usize },
    /// Growing the backing store failed. The buffer is left unchanged.
    #[error("failed to grow gap buffer to {requested} slots")]
    AllocationFailure { requested: usize },
}

/// Errors reported by [`Document`](crate::Document) operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Buffer(#[from] GapBufferError),
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = GapBufferError> = std::result::Result<T, E>;
