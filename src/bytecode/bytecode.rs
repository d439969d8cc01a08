use std::fmt;

use super::OpCode;

/// One row of a disassembly listing
#[derive(Clone, Debug, PartialEq)]
pub struct ListingEntry {
    pub offset: usize,
    pub byte: u8,
    /// `None` for bytes that don't decode, the interpreter would fault on these
    pub op: Option<OpCode>,
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Some(op) => write!(f, "{:04x}: {}", self.offset, op),
            None => write!(f, "{:04x}: .byte 0x{:02x}", self.offset, self.byte),
        }
    }
}

/// Decode every byte of the program without executing it.
/// Unlike the interpreter this never stops at an invalid byte.
pub fn disassemble(code: &[u8]) -> Vec<ListingEntry> {
    code.iter()
        .enumerate()
        .map(|(offset, &byte)| ListingEntry {
            offset,
            byte,
            op: OpCode::from_byte(byte),
        })
        .collect()
}
