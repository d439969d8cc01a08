use std::fmt;

pub mod bytecode;

/// The fixed instruction set, each variant's discriminant is its encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Read a line from the input device and push its first byte
    Read = 0x01,

    /// Pop the top of the stack and write it to the output device
    Print = 0x02,

    /// Pop two values and push their sum (mod 256)
    Add = 0x03,

    /// Stop execution successfully
    Halt = 0xFF,
}

impl OpCode {
    pub const ALL: [OpCode; 4] = [OpCode::Read, OpCode::Print, OpCode::Add, OpCode::Halt];

    /// Look up a mnemonic, this is case sensitive and must match exactly
    pub fn from_mnemonic(name: &str) -> Option<OpCode> {
        match name {
            "READ" => Some(OpCode::Read),
            "PRINT" => Some(OpCode::Print),
            "ADD" => Some(OpCode::Add),
            "HALT" => Some(OpCode::Halt),
            _ => None,
        }
    }

    pub fn from_byte(byte: u8) -> Option<OpCode> {
        match byte {
            0x01 => Some(OpCode::Read),
            0x02 => Some(OpCode::Print),
            0x03 => Some(OpCode::Add),
            0xFF => Some(OpCode::Halt),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Read => "READ",
            OpCode::Print => "PRINT",
            OpCode::Add => "ADD",
            OpCode::Halt => "HALT",
        }
    }

    pub fn byte(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
