// Chunk: docs/chunks/line_document_persistence - Loading and saving documents

//! Reading a [`Document`] from disk and writing it back.
//!
//! The on-disk format is the concatenation of every line's characters in line
//! order; the line terminator doubles as the delimiter. Loading and saving a
//! document without edits reproduces the file byte for byte.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::BufferConfig;
use crate::document::{Document, Result};
use crate::error::DocumentError;

impl Document {
    /// Loads the UTF-8 file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if the file is missing, unreadable or
    /// not valid UTF-8.
    pub fn load(path: impl AsRef<Path>, config: BufferConfig) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_text(&text, config)?;
        tracing::debug!(
            path = %path.display(),
            bytes = text.len(),
            lines = document.line_count(),
            "loaded document"
        );
        Ok(document)
    }

    /// Loads `path` if it exists, otherwise starts an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] for any failure other than the file not
    /// existing.
    pub fn open(path: impl AsRef<Path>, config: BufferConfig) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path, config) {
            Err(DocumentError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no file yet, starting empty document");
                Ok(Self::with_config(config))
            }
            result => result,
        }
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Write`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.content();
        fs::write(path, content.as_bytes()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            bytes = content.len(),
            lines = self.line_count(),
            "saved document"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(dir.path().join("missing.txt"), BufferConfig::default())
            .unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::open(dir.path().join("new.txt"), BufferConfig::default()).unwrap();
        assert_eq!(doc.line_count(), 1);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let doc: Document = "abc".parse().unwrap();
        let err = doc.save(dir.path().join("nope").join("out.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::Write { .. }));
    }
}
