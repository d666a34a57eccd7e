use anyhow::Result;
use std::fmt::Debug;

use crate::stack::StackError;

/// Where a [`StackMachine`](super::StackMachine) sends its console output.
pub trait StackIo: Debug {
    /// Write `text` as-is. No newline is added.
    fn print(&mut self, text: &str) -> Result<()>;

    fn println(&mut self, text: &str) -> Result<()> {
        self.print(text)?;
        self.print("\n")
    }

    /// Called when an operation was aborted. The default prints the error on its own line.
    fn notify(&mut self, error: StackError) -> Result<()> {
        self.println(&error.to_string())
    }
}

/// An in-memory `StackIo`: keeps everything printed, plus each notification.
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
    notices: Vec<StackError>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn notices(&self) -> &[StackError] {
        &self.notices
    }
}

impl StackIo for Transcript {
    fn print(&mut self, text: &str) -> Result<()> {
        self.text.push_str(text);
        Ok(())
    }

    fn notify(&mut self, error: StackError) -> Result<()> {
        self.notices.push(error);
        self.println(&error.to_string())
    }
}
