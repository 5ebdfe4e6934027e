//! Explicit monotonic offset cursor
//!
//! Segmentation and ACU parsing both accumulate absolute character offsets
//! while walking fragments. `Cursor` makes that bookkeeping a value that can
//! be asserted on: a cursor never moves backwards.

/// Monotonically advancing character-offset cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
}

impl Cursor {
    /// Cursor at the start of the document
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at an arbitrary absolute offset
    pub fn at(pos: usize) -> Self {
        Self { pos }
    }

    /// Current absolute offset
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advance by `n` characters and return the new position
    pub fn advance(&mut self, n: usize) -> usize {
        self.pos += n;
        self.pos
    }

    /// Jump forward to an absolute position; must not move backwards
    pub fn advance_to(&mut self, pos: usize) {
        debug_assert!(
            pos >= self.pos,
            "cursor moved backwards: {} -> {}",
            self.pos,
            pos
        );
        self.pos = pos;
    }
}
