use crate::machine::io::StackIo;
use anyhow::Result;
use crossterm::{style::Print, QueueableCommand};
use std::{
    fmt::Debug,
    io::{self, Stdout, Write},
};

/// A `crossterm`-based implementation of `StackIo`.
///
/// Output is queued; call [`TerminalIo::finish`] to flush it.
#[derive(Debug)]
pub struct TerminalIo<W: Write> {
    out: W,
}

impl TerminalIo<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalIo<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush queued output and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write + Debug> StackIo for TerminalIo<W> {
    fn print(&mut self, text: &str) -> Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }
}
