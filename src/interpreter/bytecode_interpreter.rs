use std::io::{BufRead, Write};

use crate::bytecode::OpCode;

use super::{Halt, Runtime, RuntimeError};

pub struct ByteCodeInterpreter {
    /// Index of the next byte to fetch, only ever moves forwards
    ip: usize,
}

impl ByteCodeInterpreter {
    pub fn new() -> Self {
        Self { ip: 0 }
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Fetch, decode and execute until HALT, the end of the program or the first fault.
    /// Bytes are only decoded once the instruction pointer reaches them.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        runtime: &mut Runtime<R, W>,
        instructions: &[u8],
    ) -> Result<Halt, RuntimeError> {
        self.ip = 0;
        while let Some(&byte) = instructions.get(self.ip) {
            let at = self.ip;
            self.ip += 1;
            match OpCode::from_byte(byte) {
                Some(OpCode::Read) => runtime.read()?,
                Some(OpCode::Print) => runtime.print()?,
                Some(OpCode::Add) => runtime.add()?,
                Some(OpCode::Halt) => return Ok(Halt::Explicit),
                None => return Err(RuntimeError::UnknownOpcode { opcode: byte, ip: at }),
            }
        }
        // running off the end without a HALT still counts as success
        Ok(Halt::EndOfProgram)
    }
}

impl Default for ByteCodeInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
