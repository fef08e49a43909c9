//! Circular command history.
//!
//! The slot at `write_idx` is the live edit buffer; a qualifying commit
//! seals it in place and moves the live slot forward. Navigation copies a
//! sealed slot over the live one, so browsing clobbers unsubmitted input,
//! matching the usual serial-console behavior.

use crate::config::HISTORY_COUNT;

use super::line_buffer::LineBuffer;

/// History navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow: toward older entries.
    Previous,
    /// Down arrow: toward newer entries.
    Next,
}

/// Ring of line slots with a live edit slot.
pub struct History {
    slots: [LineBuffer; HISTORY_COUNT],
    /// Slot under edition; a qualifying commit seals it and advances.
    write_idx: usize,
    /// Slot shown while navigating; reset to `write_idx` on commit.
    browse_idx: usize,
}

impl History {
    /// Create empty history
    pub const fn new() -> Self {
        Self {
            slots: [LineBuffer::new(); HISTORY_COUNT],
            write_idx: 0,
            browse_idx: 0,
        }
    }

    /// The line currently under edition.
    pub fn active(&self) -> &LineBuffer {
        &self.slots[self.write_idx]
    }

    /// Mutable access to the line under edition.
    pub fn active_mut(&mut self) -> &mut LineBuffer {
        &mut self.slots[self.write_idx]
    }

    /// Seal the active line if it qualifies, then present a cleared one.
    ///
    /// Empty lines and repeats of the immediately preceding entry do not
    /// advance the ring. Returns `true` when the ring advanced.
    pub fn commit(&mut self) -> bool {
        let advanced = !self.active().is_empty() && !self.repeats_previous();
        if advanced {
            self.write_idx = step(self.write_idx, Direction::Next);
        }
        self.slots[self.write_idx].clear();
        self.browse_idx = self.write_idx;
        advanced
    }

    fn repeats_previous(&self) -> bool {
        let prev = step(self.write_idx, Direction::Previous);
        self.slots[prev] == self.slots[self.write_idx]
    }

    /// Step through history, updating the active line.
    ///
    /// A step onto a never-used slot is undone (no-op). Stepping back onto
    /// the live slot clears it instead of copying - the "new line" state.
    /// Returns `true` when the active line changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let candidate = step(self.browse_idx, direction);
        if self.slots[candidate].is_empty() {
            return false;
        }
        self.browse_idx = candidate;
        if candidate == self.write_idx {
            self.slots[self.write_idx].clear();
        } else {
            self.slots[self.write_idx] = self.slots[candidate];
        }
        true
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// One wrapping step around the ring.
fn step(index: usize, direction: Direction) -> usize {
    match direction {
        Direction::Previous => (index + HISTORY_COUNT - 1) % HISTORY_COUNT,
        Direction::Next => (index + 1) % HISTORY_COUNT,
    }
}
