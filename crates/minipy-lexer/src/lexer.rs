//! Core expression lexer — converts operand text to tokens.
//!
//! Operands are single-line by construction (the classifier hands over the
//! text of one statement's operand), so the lexer tracks one line number,
//! supplied by the caller so spans match the snippet's physical lines.

use minipy_types::Span;

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// The expression lexer.
pub struct Lexer<'src> {
    /// The operand text as bytes.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
    /// Physical line the operand came from (for spans).
    line: u32,
    /// Current column number (1-based, relative to the operand start).
    col: u32,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for operand text taken from the given line.
    pub fn new(source: &'src str, line: u32) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            line,
            col: 1,
        }
    }

    /// Lex the whole operand into a token stream ending with `Eof`.
    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        self.col += 1;
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_from(&self, start_col: u32) -> Span {
        Span::new(self.line, start_col, self.line, self.col.saturating_sub(1).max(1))
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t') = self.peek() {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn scan_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace();

        if self.at_end() {
            return Ok(Token::new(TokenKind::Eof, Span::point(self.line, self.col)));
        }

        let start_pos = self.pos;
        let start_col = self.col;
        let ch = self.advance().expect("checked not at end");

        let kind = match ch {
            b'0'..=b'9' => return Ok(self.scan_number(start_pos, start_col)),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                return Ok(self.scan_identifier(start_pos, start_col))
            }
            b'\'' | b'"' => return self.scan_string(ch, start_col),

            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,

            _ => {
                return Err(LexError::UnexpectedChar {
                    ch: ch as char,
                    span: self.span_from(start_col),
                });
            }
        };

        Ok(Token::new(kind, self.span_from(start_col)))
    }

    fn scan_number(&mut self, start_pos: usize, start_col: u32) -> Token {
        // First digit already consumed.
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        // Decimal point only when followed by a digit.
        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            self.advance();
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        let text = std::str::from_utf8(&self.source[start_pos..self.pos]).unwrap_or("0");
        let value: f64 = text.parse().unwrap_or(0.0);
        Token::new(TokenKind::NumberLit(value), self.span_from(start_col))
    }

    fn scan_identifier(&mut self, start_pos: usize, start_col: u32) -> Token {
        // First character already consumed (letter or `_`).
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        let text = std::str::from_utf8(&self.source[start_pos..self.pos]).unwrap_or("");
        Token::new(
            TokenKind::Identifier(text.to_string()),
            self.span_from(start_col),
        )
    }

    /// Scan a string literal after its opening quote. The literal ends at
    /// the first matching quote character; there are no escape sequences.
    ///
    /// Content is taken as a byte slice of the source, so multi-byte
    /// UTF-8 sequences pass through intact. Scanning byte-wise for the
    /// closing quote is safe: quote characters are ASCII and ASCII bytes
    /// never occur inside a multi-byte sequence.
    fn scan_string(&mut self, quote: u8, start_col: u32) -> LexResult<Token> {
        let content_start = self.pos;
        loop {
            match self.advance() {
                None => {
                    return Err(LexError::UnterminatedString {
                        span: self.span_from(start_col),
                    });
                }
                Some(ch) if ch == quote => {
                    let content = &self.source[content_start..self.pos - 1];
                    let text = std::str::from_utf8(content).unwrap_or("");
                    return Ok(Token::new(
                        TokenKind::StringLit(text.to_string()),
                        self.span_from(start_col),
                    ));
                }
                Some(_) => {}
            }
        }
    }
}
