use anyhow::Result;
use stack_eval::{eval, StackMachine, TerminalIo};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the walkthrough.
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("stack_eval=warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut console = TerminalIo::stdout();
    let result = eval::evaluate(&mut StackMachine::new(&mut console))?;
    console.finish()?;

    debug!(result, "evaluation finished");
    Ok(())
}
