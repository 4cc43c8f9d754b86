use crate::program::{Instruction, Line, Program};
use crate::stack::{BoundedStack, Stack};

use std::io::{self, prelude::*};

use anyhow::{ensure, Context};
use log::{debug, info, trace};
use num_bigint::BigInt;

/// Runs a [`Program`] against a bounded stack, writing every popped or
/// peeked value to `out`, one per line.
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    program: Program,
    stack: BoundedStack<BigInt>,
    out: W,
    step_no: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(program: Program, stack: BoundedStack<BigInt>, out: W) -> Self {
        Self {
            program,
            stack,
            out,
            step_no: 0,
        }
    }

    pub fn stack(&self) -> &BoundedStack<BigInt> {
        &self.stack
    }

    pub fn step_no(&self) -> usize {
        self.step_no
    }

    pub fn is_finished(&self) -> bool {
        self.step_no >= self.program.len()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute the next instruction.
    pub fn step(&mut self) -> anyhow::Result<()> {
        ensure!(!self.is_finished(), "program has already finished");

        let Self {
            program,
            stack,
            out,
            step_no,
        } = self;
        let Line {
            number,
            instruction,
        } = &program.lines()[*step_no];

        trace!("step {:} line {:} {}", step_no, number, instruction);

        #[rustfmt::skip]
        let res = match instruction {
            Instruction::Push(v) => push(stack, v.clone()),
            Instruction::Pop     => pop(stack, out),
            Instruction::Peek    => peek(stack, out),
        };

        res.with_context(|| format!("line {}: {}", number, instruction))?;

        *step_no += 1;

        Ok(())
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while !self.is_finished() {
            self.step()?
        }

        debug!(
            "Program finished after {} steps, {} values left on the stack",
            self.step_no,
            self.stack.len()
        );

        Ok(())
    }

    pub fn run_until(&mut self, max_steps: usize) -> anyhow::Result<()> {
        while self.step_no < max_steps && !self.is_finished() {
            self.step()?
        }

        if !self.is_finished() {
            info!(
                "Program stopping: reached maximum number of steps - {}",
                max_steps
            );
        }

        Ok(())
    }
}

fn push(stack: &mut BoundedStack<BigInt>, v: BigInt) -> anyhow::Result<()> {
    trace!("action: push, value {}", v);

    stack.push(v)?;

    Ok(())
}

fn pop(stack: &mut BoundedStack<BigInt>, out: &mut impl Write) -> anyhow::Result<()> {
    trace!("action: pop");

    let v = stack.pop()?;
    write_value(out, &v)?;

    Ok(())
}

fn peek(stack: &BoundedStack<BigInt>, out: &mut impl Write) -> anyhow::Result<()> {
    trace!("action: peek");

    write_value(out, stack.peek()?)?;

    Ok(())
}

fn write_value(out: &mut impl Write, v: &BigInt) -> io::Result<()> {
    writeln!(out, "{}", v)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn interpreter(src: &str, capacity: usize) -> Interpreter<Vec<u8>> {
        let program = src.parse().unwrap();
        let stack = BoundedStack::new(capacity).unwrap();

        Interpreter::new(program, stack, Vec::new())
    }

    fn output(interp: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(interp.into_output()).unwrap()
    }

    #[test]
    fn prints_popped_and_peeked_values() {
        let mut interp = interpreter("push 5\npush 6\npeek\npop\npop\n", 2);
        interp.run().unwrap();

        assert!(interp.stack().is_empty());
        assert_eq!(output(interp), "6\n6\n5\n");
    }

    #[test]
    fn overflow_reports_line_and_keeps_stack() {
        let mut interp = interpreter("push 1\n\npush 2\n", 1);
        let err = interp.run().unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::CapacityExceeded { capacity: 1 })
        );
        assert!(format!("{}", err).starts_with("line 3"), "{:#}", err);
        assert_eq!(interp.stack().len(), 1);
        assert_eq!(interp.step_no(), 1);
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut interp = interpreter("pop\n", 3);
        let err = interp.run().unwrap_err();

        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EmptyContainer));
    }

    #[test]
    fn run_until_stops_early() {
        let mut interp = interpreter("push 1\npush 2\npush 3\n", 3);
        interp.run_until(2).unwrap();

        assert_eq!(interp.step_no(), 2);
        assert!(!interp.is_finished());
        assert_eq!(interp.stack().peek().unwrap(), &BigInt::from(2));
    }

    #[test]
    fn step_past_end_is_an_error() {
        let mut interp = interpreter("peek\n", 1);
        interp.stack.push(BigInt::from(9)).unwrap();
        interp.step().unwrap();

        assert!(interp.is_finished());
        assert!(interp.step().is_err());
    }

    #[test]
    fn program_is_untouched_by_running() {
        let src = "push 123456789012345678901234567890\npeek\npop\n";
        let mut interp = interpreter(src, 1);
        let before = interp.program.clone();

        interp.run().unwrap();

        assert_eq!(interp.program, before);
        assert_eq!(
            output(interp),
            "123456789012345678901234567890\n123456789012345678901234567890\n"
        );
    }
}
