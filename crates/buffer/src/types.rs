// Chunk: docs/chunks/line_document - Line-per-buffer document with cursor

/// Position in a document as (line, column), both 0-indexed.
///
/// Columns count visible characters; the line terminator is never addressable.
/// Ordering is by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Which lines a document mutation changed.
/// Lets a renderer redraw only what is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyLines {
    /// Nothing changed (e.g. backspace at the start of the document).
    None,
    /// Exactly one line changed.
    Single(usize),
    /// Lines in `[from, to)` changed.
    Range { from: usize, to: usize },
    /// Every line from the given one to the end changed, because lines were
    /// split or joined and everything after shifted.
    FromLineToEnd(usize),
}

impl DirtyLines {
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// `(from, to)` with `to == None` meaning "to the end".
    fn bounds(self) -> Option<(usize, Option<usize>)> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some((line, Some(line + 1))),
            DirtyLines::Range { from, to } => Some((from, Some(to))),
            DirtyLines::FromLineToEnd(line) => Some((line, None)),
        }
    }

    fn from_bounds(from: usize, to: Option<usize>) -> Self {
        match to {
            None => DirtyLines::FromLineToEnd(from),
            Some(to) if to == from + 1 => DirtyLines::Single(from),
            Some(to) => DirtyLines::Range { from, to },
        }
    }

    /// Widens this region to also cover `other`.
    pub fn merge(&mut self, other: DirtyLines) {
        let Some((from, to)) = other.bounds() else {
            return;
        };
        *self = match self.bounds() {
            None => other,
            Some((own_from, own_to)) => {
                let to = match (own_to, to) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    _ => None,
                };
                Self::from_bounds(own_from.min(from), to)
            }
        };
    }
}
