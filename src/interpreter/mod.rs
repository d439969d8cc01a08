pub mod bytecode_interpreter;

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::bytecode::OpCode;

const INITIAL_STACK_CAPACITY: usize = 16;

/// How a run finished successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// A HALT instruction was executed
    Explicit,
    /// The instruction pointer ran off the end of the program
    EndOfProgram,
}

impl Halt {
    pub fn exit_code(&self) -> u8 {
        0
    }
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("stack underflow in {op}")]
    StackUnderflow { op: OpCode },

    #[error("unknown opcode 0x{opcode:02x}")]
    UnknownOpcode { opcode: u8, ip: usize },

    #[error("IO Error: {0}")]
    Io(
        #[from]
        std::io::Error,
    ),
}

impl RuntimeError {
    /// Process status reported for this fault
    pub fn exit_code(&self) -> u8 {
        match self {
            RuntimeError::StackUnderflow { .. } => 2,
            RuntimeError::UnknownOpcode { .. } => 3,
            RuntimeError::Io(_) => 1,
        }
    }
}

/// Collapse a run result into its process status
pub fn exit_code(result: &Result<Halt, RuntimeError>) -> u8 {
    match result {
        Ok(halt) => halt.exit_code(),
        Err(e) => e.exit_code(),
    }
}

pub struct Runtime<R, W> {
    /// Every value is a byte, sums are truncated on push
    stack: Vec<u8>,

    in_stream: R,
    out_stream: W,
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    pub fn new(in_stream: R, out_stream: W) -> Self {
        Self {
            stack: Vec::with_capacity(INITIAL_STACK_CAPACITY),
            in_stream,
            out_stream,
        }
    }

    /// Read one line from the input stream and push its first raw byte.
    /// End of input and empty lines both push 0.
    pub fn read(&mut self) -> Result<(), RuntimeError> {
        let mut line = vec![];
        // blocks until a full line or end of input
        self.in_stream.read_until(b'\n', &mut line)?;
        let value = match line.first() {
            Some(b'\n') | None => 0,
            Some(b) => *b,
        };
        self.stack.push(value);
        Ok(())
    }

    /// Pop the top of the stack and write it out, flushing straight away
    pub fn print(&mut self) -> Result<(), RuntimeError> {
        let value = self.pop(OpCode::Print)?;
        self.out_stream.write_all(&[value])?;
        self.out_stream.flush()?;
        Ok(())
    }

    pub fn add(&mut self) -> Result<(), RuntimeError> {
        if self.stack.len() < 2 {
            return Err(RuntimeError::StackUnderflow { op: OpCode::Add });
        }
        let a = self.pop(OpCode::Add)?;
        let b = self.pop(OpCode::Add)?;
        self.stack.push(a.wrapping_add(b));
        Ok(())
    }

    pub fn stack(&self) -> &[u8] {
        &self.stack
    }

    pub fn into_out_stream(self) -> W {
        self.out_stream
    }

    fn pop(&mut self, op: OpCode) -> Result<u8, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow { op })
    }
}
