use std::fmt::{self, Debug, Display};

use thiserror::Error;

/// Number of slots in a [`BoundedStack`].
pub const CAPACITY: usize = 5;

/// Returned by the notifying reads when there is nothing to read.
///
/// Indistinguishable from a stored `-1`; use the `try_*` methods when that matters.
pub const SENTINEL: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Push onto a full stack.
    #[error("Stack Overflow")]
    Overflow,
    /// Pop from an empty stack.
    #[error("Stack Underflow")]
    Underflow,
    /// Peek at an empty stack.
    #[error("Stack is empty")]
    EmptyRead,
}

/// A last-in-first-out stack of at most [`CAPACITY`] integers, stored inline.
#[derive(Clone)]
pub struct BoundedStack {
    values: [i32; CAPACITY],
    /// Slots at `len..` are stale and never read.
    len: usize,
}

impl BoundedStack {
    pub fn new() -> Self {
        Self {
            values: [0; CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAPACITY
    }

    /// Index of the topmost value; `-1` when empty.
    pub fn top(&self) -> isize {
        self.len as isize - 1
    }

    /// The present values, bottom first.
    pub fn as_slice(&self) -> &[i32] {
        &self.values[..self.len]
    }

    /// On overflow the stack is left untouched.
    pub fn try_push(&mut self, value: i32) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow);
        }
        self.values[self.len] = value;
        self.len += 1;
        Ok(())
    }

    pub fn try_pop(&mut self) -> Result<i32, StackError> {
        let value = self.try_peek().map_err(|_| StackError::Underflow)?;
        self.len -= 1;
        Ok(value)
    }

    pub fn try_peek(&self) -> Result<i32, StackError> {
        self.as_slice()
            .last()
            .copied()
            .ok_or(StackError::EmptyRead)
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Bottom to top, each value followed by a single space.
impl Display for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.as_slice() {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

impl Debug for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("values", &self.as_slice())
            .field("top", &self.top())
            .finish()
    }
}
