pub mod lexer;

/// Characters stripped from both ends of a source line
pub const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Lines whose first non-whitespace character is this are ignored
pub const COMMENT_CHAR: char = '#';

#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    // Nothing left after trimming
    Blank,

    // `# ...`: the whole line is a comment
    Comment,

    // Anything else, this should be exactly one mnemonic
    Instruction(&'a str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine<'a> {
    /** Human readable (1-based) line number */
    pub number: usize,
    pub kind: LineKind<'a>,
}

impl<'a> SourceLine<'a> {
    pub fn classify(number: usize, raw: &'a str) -> SourceLine<'a> {
        let trimmed = raw.trim_matches(&TRIM_CHARS[..]);

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with(COMMENT_CHAR) {
            LineKind::Comment
        } else {
            LineKind::Instruction(trimmed)
        };

        SourceLine { number, kind }
    }
}
