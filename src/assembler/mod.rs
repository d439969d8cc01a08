use thiserror::Error;

pub mod assembler;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssembleError {
    #[error("line {line}: invalid instruction '{text}'")]
    InvalidInstruction { line: usize, text: String },
}

impl AssembleError {
    /// Process status reported for a failed assembly
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn line(&self) -> usize {
        match self {
            AssembleError::InvalidInstruction { line, .. } => *line,
        }
    }
}
