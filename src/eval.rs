//! Hand-traced evaluation of a single fixed expression on a [`StackMachine`].

use crate::machine::StackMachine;
use anyhow::Result;
use std::fmt::{self, Display};

/// The expression walked through by [`evaluate`].
pub const EXPRESSION: &str = "((1+2)*3)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Op::Add => lhs.wrapping_add(rhs),
            Op::Mul => lhs.wrapping_mul(rhs),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Op::Add => '+',
            Op::Mul => '*',
        };
        write!(f, "{c}")
    }
}

/// Push the operands of `((1+2)*3)` and reduce them by hand, printing the
/// stack after every step. Returns the final value.
pub fn evaluate(machine: &mut StackMachine<'_>) -> Result<i32> {
    machine.println(&format!("Evaluating expression: {EXPRESSION}"))?;

    machine.push(1)?;
    machine.push(2)?;
    machine.print("Pushed 1 and 2 for addition: ")?;
    machine.display()?;

    reduce(machine, Op::Add)?;
    machine.print("After computing addition, pushed result: ")?;
    machine.display()?;

    machine.push(3)?;
    machine.print("Pushed 3 for multiplication: ")?;
    machine.display()?;

    let result = reduce(machine, Op::Mul)?;
    machine.print(&format!("Final result of {EXPRESSION}: "))?;
    machine.display()?;

    Ok(result)
}

/// Pop the right operand, then the left one, push `lhs op rhs`, and say so.
fn reduce(machine: &mut StackMachine<'_>, op: Op) -> Result<i32> {
    let rhs = machine.pop_and_return()?;
    let lhs = machine.pop_and_return()?;
    let result = op.apply(lhs, rhs);
    machine.push(result)?;
    machine.println(&format!(
        "Popped {lhs} and {rhs}, calculated {lhs}{op}{rhs}={result}"
    ))?;
    Ok(result)
}
