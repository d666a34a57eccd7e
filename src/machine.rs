pub mod io;

use self::io::StackIo;
use crate::stack::{BoundedStack, StackError, SENTINEL};
use anyhow::Result;
use tracing::{debug, warn};

/// A [`BoundedStack`] whose failed operations are reported through a [`StackIo`]
/// instead of returned.
///
/// Overflow and underflow never abort the caller: `push` and `pop` become no-ops,
/// `pop_and_return` and `peek` hand back [`SENTINEL`]. The `Result`s here only
/// carry I/O failures.
#[derive(Debug)]
pub struct StackMachine<'a> {
    stack: BoundedStack,
    io: &'a mut dyn StackIo,
}

impl<'a> StackMachine<'a> {
    pub fn new(io: &'a mut dyn StackIo) -> Self {
        Self {
            stack: BoundedStack::new(),
            io,
        }
    }

    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    pub fn push(&mut self, value: i32) -> Result<()> {
        match self.stack.try_push(value) {
            Ok(()) => {
                debug!(value, top = self.stack.top(), "push");
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Discard the top value.
    pub fn pop(&mut self) -> Result<()> {
        match self.stack.try_pop() {
            Ok(value) => {
                debug!(value, top = self.stack.top(), "pop");
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    pub fn pop_and_return(&mut self) -> Result<i32> {
        match self.stack.try_pop() {
            Ok(value) => {
                debug!(value, top = self.stack.top(), "pop");
                Ok(value)
            }
            Err(e) => {
                self.report(e)?;
                Ok(SENTINEL)
            }
        }
    }

    // Takes `&mut self` only for the io handle; the stack is not touched.
    pub fn peek(&mut self) -> Result<i32> {
        match self.stack.try_peek() {
            Ok(value) => Ok(value),
            Err(e) => {
                self.report(e)?;
                Ok(SENTINEL)
            }
        }
    }

    /// Print the stack, bottom first, then end the line.
    pub fn display(&mut self) -> Result<()> {
        let line = self.stack.to_string();
        self.io.println(&line)
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        self.io.print(text)
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        self.io.println(text)
    }

    fn report(&mut self, error: StackError) -> Result<()> {
        warn!(%error, top = self.stack.top(), "stack operation aborted");
        self.io.notify(error)
    }
}

#[cfg(test)]
mod tests {
    use super::io::Transcript;
    use super::*;
    use crate::stack::CAPACITY;

    #[test]
    fn overflow_is_reported_and_ignored() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        for v in 0..CAPACITY as i32 {
            m.push(v).unwrap();
        }
        m.push(99).unwrap();
        assert_eq!(m.stack().as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(m.stack().top(), 4);

        assert_eq!(io.text(), "Stack Overflow\n");
        assert_eq!(io.notices(), &[StackError::Overflow]);
    }

    #[test]
    fn pop_and_return_on_empty_gives_sentinel() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        assert_eq!(m.pop_and_return().unwrap(), SENTINEL);
        assert!(m.stack().is_empty());
        assert_eq!(io.text(), "Stack Underflow\n");
    }

    #[test]
    fn pop_on_empty_is_a_no_op() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        m.pop().unwrap();
        assert_eq!(m.stack().top(), -1);
        assert_eq!(io.notices(), &[StackError::Underflow]);
    }

    #[test]
    fn pop_discards_the_top() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        m.push(4).unwrap();
        m.push(5).unwrap();
        m.pop().unwrap();
        assert_eq!(m.stack().as_slice(), &[4]);
        assert_eq!(io.text(), "");
    }

    #[test]
    fn peek_on_empty_says_so() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        assert_eq!(m.peek().unwrap(), SENTINEL);
        assert_eq!(io.text(), "Stack is empty\n");
        assert_eq!(io.notices(), &[StackError::EmptyRead]);
    }

    #[test]
    fn peek_twice_returns_the_same_value() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        m.push(42).unwrap();
        assert_eq!(m.peek().unwrap(), 42);
        assert_eq!(m.peek().unwrap(), 42);
        assert_eq!(m.stack().as_slice(), &[42]);
        assert!(io.notices().is_empty());
    }

    #[test]
    fn stored_minus_one_looks_like_the_sentinel() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        m.push(-1).unwrap();
        assert_eq!(m.pop_and_return().unwrap(), SENTINEL);
        assert_eq!(m.pop_and_return().unwrap(), SENTINEL);
        // Only the second one was a failure.
        assert_eq!(io.notices(), &[StackError::Underflow]);
    }

    #[test]
    fn display_prints_bottom_to_top() {
        let mut io = Transcript::new();
        let mut m = StackMachine::new(&mut io);
        m.display().unwrap();
        m.push(1).unwrap();
        m.push(2).unwrap();
        m.display().unwrap();
        assert_eq!(io.text(), "\n1 2 \n");
    }
}
