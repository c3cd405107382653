// Chunk: docs/chunks/line_gap_buffer - Per-line gap buffer storage for the line editor

/// Default capacity of the gap buffer backing each line.
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Settings used when a document allocates storage for its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Initial capacity of every newly created line buffer.
    ///
    /// Lines that outgrow it double their capacity on demand, so this only
    /// tunes how often short lines reallocate.
    pub line_capacity: usize,
}

impl BufferConfig {
    pub fn new() -> Self {
        Self {
            line_capacity: DEFAULT_LINE_CAPACITY,
        }
    }

    /// Returns a copy with a different line capacity. Zero is raised to 1.
    #[must_use]
    pub fn with_line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = capacity.max(1);
        self
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}
