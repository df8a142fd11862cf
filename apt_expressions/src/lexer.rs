/// What a [`Token`] is. The text stays in [`Token::text`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    /// Operator or variable name, resolved later by the parser.
    Operator,
    /// Numeric literal; it may still fail to parse as a float.
    Constant,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Byte offset of the first character in the source.
    pub offset: usize,
}

/// Streaming tokenizer over the tree text format.
///
/// Whitespace separates tokens and is never emitted. A token starting with a digit, `-` or `.`
/// scans as a number; a lone `-` comes out as the subtraction operator. Anything else scans as
/// an operator: the first character plus the longest following run of `+-/*` and ASCII
/// alphanumerics.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn scan_number(&mut self, start: usize) -> Token<'src> {
        if matches!(self.peek(), Some(b'-' | b'.')) {
            self.pos += 1;
        }
        self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_digits();
        }
        let text = &self.source[start..self.pos];
        let kind = if text == "-" { TokenKind::Operator } else { TokenKind::Constant };
        Token { kind, text, offset: start }
    }

    fn scan_operator(&mut self, start: usize) -> Token<'src> {
        // First character is always part of the token, whatever it is.
        let first_len = self.source[start..].chars().next().map_or(1, char::len_utf8);
        self.pos += first_len;
        while self.peek().is_some_and(is_operator_byte) {
            self.pos += 1;
        }
        Token {
            kind: TokenKind::Operator,
            text: &self.source[start..self.pos],
            offset: start,
        }
    }
}

fn is_operator_byte(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'/' | b'*') || b.is_ascii_alphanumeric()
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.skip_whitespace();
        let start = self.pos;
        let ch = self.peek()?;
        let token = match ch {
            b'(' | b')' => {
                self.pos += 1;
                let kind = if ch == b'(' { TokenKind::OpenParen } else { TokenKind::CloseParen };
                Token {
                    kind,
                    text: &self.source[start..self.pos],
                    offset: start,
                }
            }
            b'-' | b'.' | b'0'..=b'9' => self.scan_number(start),
            _ => self.scan_operator(start),
        };
        Some(token)
    }
}
