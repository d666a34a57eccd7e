pub mod eval;
mod machine;
mod stack;
mod terminal_io;

pub use machine::io::{StackIo, Transcript};
pub use machine::StackMachine;
pub use stack::{BoundedStack, StackError, CAPACITY, SENTINEL};
pub use terminal_io::TerminalIo;
