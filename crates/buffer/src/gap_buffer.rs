// Chunk: docs/chunks/line_gap_buffer - Per-line gap buffer storage for the line editor

//! Gap buffer used as the storage of a single line.
//!
//! The backing store is one `Vec<char>` laid out as
//! `[left segment | gap | right segment]`. Every edit first moves the gap so it
//! touches the edit position and then writes or drops one slot at the gap
//! boundary. Edits next to the previous edit are O(1); moving the gap costs
//! O(distance). When an insertion consumes the last gap slot the store doubles.
//!
//! The buffer also keeps a running count of line terminators it holds, so the
//! owning line can report its visible length without scanning.

use std::fmt;

use crate::config::DEFAULT_LINE_CAPACITY;
use crate::error::{GapBufferError, Result};

/// The invisible marker stored inline at the end of every non-final line.
pub const LINE_TERMINATOR: char = '\n';

const GROWTH_FACTOR: usize = 2;

/// Filler for slots that belong to the gap. Never observable.
const GAP_FILL: char = '\0';

/// A gap buffer of `char`s with O(1) edits at the gap.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// Backing store: [left segment | gap | right segment].
    data: Vec<char>,
    /// First gap slot; also the number of elements in the left segment.
    gap_start: usize,
    /// First slot of the right segment (one past the last gap slot).
    gap_end: usize,
    /// Number of `LINE_TERMINATOR`s currently in the logical sequence.
    invisible_count: usize,
}

impl GapBuffer {
    /// Creates an empty buffer with the default line capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }

    /// Creates an empty buffer able to hold `capacity` elements before growing.
    ///
    /// A capacity of 0 is raised to 1 so the gap is never empty.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![GAP_FILL; capacity],
            gap_start: 0,
            gap_end: capacity,
            invisible_count: 0,
        }
    }

    /// Builds a fresh buffer holding `chars` in order.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::AllocationFailure`] if the store cannot grow
    /// large enough.
    pub fn from_chars<I>(capacity: usize, chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut buffer = Self::with_capacity(capacity);
        for ch in chars {
            buffer.push(ch)?;
        }
        Ok(buffer)
    }

    // ==================== Queries ====================

    /// Number of elements in the logical sequence.
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements excluding line terminators.
    pub fn visible_len(&self) -> usize {
        self.len() - self.invisible_count
    }

    /// Number of line terminators in the logical sequence.
    pub fn invisible_count(&self) -> usize {
        self.invisible_count
    }

    /// Current size of the backing store.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    fn physical_index(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        }
    }

    fn check_element(&self, pos: usize) -> Result<()> {
        let len = self.len();
        if pos >= len {
            return Err(GapBufferError::OutOfRange { index: pos, len });
        }
        Ok(())
    }

    /// Returns the element at logical position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] unless `pos < len()`.
    pub fn at(&self, pos: usize) -> Result<char> {
        self.check_element(pos)?;
        Ok(self.data[self.physical_index(pos)])
    }

    /// Overwrites the element at logical position `pos`.
    ///
    /// Line terminators cannot be written or overwritten here; only
    /// `insert_at` and `delete_at` change the terminator count.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] unless `pos < len()`, and
    /// [`GapBufferError::TerminatorOverwrite`] if either the old or the new
    /// value is [`LINE_TERMINATOR`].
    pub fn set_at(&mut self, pos: usize, ch: char) -> Result<()> {
        self.check_element(pos)?;
        let physical = self.physical_index(pos);
        if ch == LINE_TERMINATOR || self.data[physical] == LINE_TERMINATOR {
            return Err(GapBufferError::TerminatorOverwrite { index: pos });
        }
        self.data[physical] = ch;
        Ok(())
    }

    /// Returns an iterator over the logical sequence.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Copies the logical sequence into a freshly allocated vector.
    pub fn to_vec(&self) -> Vec<char> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.data[..self.gap_start]);
        out.extend_from_slice(&self.data[self.gap_end..]);
        out
    }

    // ==================== Mutations ====================

    /// Moves the gap so that it starts at logical position `pos`.
    ///
    /// `pos` must be `<= len()`. O(distance) between the old and new position.
    fn move_gap_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.len());

        if pos < self.gap_start {
            // Left segment suffix [pos, gap_start) moves to just before the right segment.
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            // Right segment prefix moves to just after the left segment.
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Inserts `ch` at logical position `pos`, shifting later elements right.
    ///
    /// O(1) when `pos` is at the gap, O(distance) otherwise, plus an
    /// occasional doubling of the store.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] unless `pos <= len()`, and
    /// [`GapBufferError::AllocationFailure`] if the store must grow and cannot.
    /// In both cases the buffer is unchanged.
    pub fn insert_at(&mut self, pos: usize, ch: char) -> Result<()> {
        self.insert_with(pos, ch, reserve_store)
    }

    /// `insert_at` with the store reservation supplied by the caller.
    fn insert_with<R>(&mut self, pos: usize, ch: char, reserve: R) -> Result<()>
    where
        R: FnOnce(usize) -> Result<Vec<char>>,
    {
        let len = self.len();
        if pos > len {
            return Err(GapBufferError::OutOfRange { index: pos, len });
        }

        // The replacement store is reserved before anything moves so that a
        // failed allocation leaves the buffer untouched.
        let grown = if self.gap_len() <= 1 {
            Some(reserve(grown_capacity(self.capacity())?)?)
        } else {
            None
        };

        if ch == LINE_TERMINATOR {
            self.invisible_count += 1;
        }

        self.move_gap_to(pos);
        self.data[self.gap_start] = ch;
        self.gap_start += 1;

        if let Some(store) = grown {
            self.grow_into(store);
        }
        Ok(())
    }

    /// Appends `ch` at the end of the logical sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::AllocationFailure`] if the store cannot grow.
    pub fn push(&mut self, ch: char) -> Result<()> {
        self.insert_at(self.len(), ch)
    }

    /// Removes and returns the element at logical position `pos`.
    ///
    /// Never reallocates: the removed slot joins the gap.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::OutOfRange`] unless `pos < len()`.
    pub fn delete_at(&mut self, pos: usize) -> Result<char> {
        self.check_element(pos)?;

        let removed = if pos < self.gap_start {
            // Backspace shape: the gap ends up right after `pos`.
            self.move_gap_to(pos + 1);
            self.gap_start -= 1;
            self.data[self.gap_start]
        } else {
            // Delete-forward shape: `pos` becomes the first right segment slot.
            self.move_gap_to(pos);
            let ch = self.data[self.gap_end];
            self.gap_end += 1;
            ch
        };

        if removed == LINE_TERMINATOR {
            self.invisible_count -= 1;
        }
        Ok(removed)
    }

    /// Installs `store` as the new backing store once the gap is used up.
    ///
    /// The left segment stays at the front, the right segment moves to the
    /// back, and everything in between becomes gap.
    fn grow_into(&mut self, mut store: Vec<char>) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * GROWTH_FACTOR;
        let right_len = old_capacity - self.gap_end;

        store.extend_from_slice(&self.data[..self.gap_start]);
        store.resize(new_capacity - right_len, GAP_FILL);
        store.extend_from_slice(&self.data[self.gap_end..]);

        tracing::trace!(old_capacity, new_capacity, len = self.len(), "grew gap buffer");

        self.data = store;
        self.gap_end = new_capacity - right_len;
    }
}

fn grown_capacity(capacity: usize) -> Result<usize> {
    capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(GapBufferError::AllocationFailure {
            requested: usize::MAX,
        })
}

/// Reserves an empty vector able to hold `capacity` elements without reallocating.
fn reserve_store(capacity: usize) -> Result<Vec<char>> {
    let mut store = Vec::new();
    store
        .try_reserve_exact(capacity)
        .map_err(|_| GapBufferError::AllocationFailure {
            requested: capacity,
        })?;
    Ok(store)
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
