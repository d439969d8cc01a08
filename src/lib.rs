//! A tiny stack machine: a line based assembler plus a bytecode interpreter.
//!
//! Four instructions share one encoding between both halves:
//! `READ` (0x01), `PRINT` (0x02), `ADD` (0x03) and `HALT` (0xFF).

extern crate thiserror;

pub mod assembler;
pub mod bytecode;
pub mod interpreter;
pub mod lexer;

use std::io::{BufRead, Write};

pub use assembler::{
    assembler::{assemble, assemble_bytes, assemble_source},
    AssembleError,
};
pub use bytecode::OpCode;
pub use interpreter::{
    bytecode_interpreter::ByteCodeInterpreter, exit_code, Halt, Runtime, RuntimeError,
};

/// Run a program against the given streams from a fresh stack
pub fn run<R: BufRead, W: Write>(
    code: &[u8],
    in_stream: R,
    out_stream: W,
) -> Result<Halt, RuntimeError> {
    let mut runtime = Runtime::new(in_stream, out_stream);
    ByteCodeInterpreter::new().run(&mut runtime, code)
}
