use crate::{
    bytecode::OpCode,
    lexer::{lexer::Lexer, LineKind, SourceLine},
};

use super::AssembleError;

/// Assemble an ordered sequence of source lines, one opcode byte per instruction line.
/// Assembly is all or nothing, the first bad line aborts it.
pub fn assemble<I, S>(lines: I) -> Result<Vec<u8>, AssembleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut code = vec![];
    for (i, raw) in lines.into_iter().enumerate() {
        emit_line(&mut code, SourceLine::classify(i + 1, raw.as_ref()))?;
    }
    Ok(code)
}

/// Same as [`assemble`] but splits a whole source text into lines first
pub fn assemble_source(text: &str) -> Result<Vec<u8>, AssembleError> {
    let mut code = vec![];
    for line in Lexer::new(text) {
        emit_line(&mut code, line)?;
    }
    Ok(code)
}

/// Assemble raw source bytes, lines are split on `\n` without requiring UTF-8.
/// Invalid bytes only matter on instruction lines, where they can never match a mnemonic.
pub fn assemble_bytes(source: &[u8]) -> Result<Vec<u8>, AssembleError> {
    assemble(source.split(|b| *b == b'\n').map(String::from_utf8_lossy))
}

fn emit_line(code: &mut Vec<u8>, line: SourceLine) -> Result<(), AssembleError> {
    match line.kind {
        LineKind::Blank | LineKind::Comment => Ok(()),
        // the whole trimmed line is the mnemonic, no operands or trailing comments
        LineKind::Instruction(text) => match OpCode::from_mnemonic(text) {
            Some(op) => {
                code.push(op.byte());
                Ok(())
            }
            None => Err(AssembleError::InvalidInstruction {
                line: line.number,
                text: text.to_string(),
            }),
        },
    }
}
