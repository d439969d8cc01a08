use super::SourceLine;

/// Splits assembler source text into classified lines
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable position in file, the line most recently produced */
    pub cur_line: usize,

    lines: std::str::Lines<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Lexer<'a> {
        Lexer {
            cur_line: 0,
            lines: text.lines(),
        }
    }

    pub fn next_line(&mut self) -> Option<SourceLine<'a>> {
        let raw = self.lines.next()?;
        self.cur_line += 1;
        Some(SourceLine::classify(self.cur_line, raw))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
