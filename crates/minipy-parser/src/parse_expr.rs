//! Expression parsing with operator precedence.
//!
//! Precedence (lowest → highest):
//! 4. `+`, `-`
//! 3. `*`, `/`
//! 2. unary `-`
//! 1. `[n]` (index — postfix), `( )` (grouping)
//!
//! The grammar is closed on purpose: no comparisons, no boolean
//! operators, no calls. Callers treat any [`ParseError`] as "emit the
//! operand verbatim".

use minipy_lexer::token::{Token, TokenKind};
use minipy_lexer::Lexer;
use minipy_types::ast::{BinOp, Expr, ExprKind};

use crate::error::{ParseError, ParseResult};

/// Maximum expression nesting depth.
const MAX_EXPR_DEPTH: u32 = 16;

/// Parse operand text into an [`Expr`], consuming all input.
///
/// `line` is the physical line the operand came from, so spans match the
/// snippet's numbering.
pub fn parse_expr(text: &str, line: u32) -> ParseResult<Expr> {
    let tokens = Lexer::new(text, line).lex()?;
    let mut parser = ExprParser::new(tokens);
    let expr = parser.parse_expression()?;
    parser.expect_eof()?;
    Ok(expr)
}

/// Token cursor over one operand.
struct ExprParser {
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
}

impl ExprParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream always ends with Eof")
        })
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &TokenKind) -> ParseResult<Token> {
        if self.peek_kind() == expected {
            Ok(self.advance())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        if matches!(self.peek_kind(), TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        let token = self.peek();
        ParseError::UnexpectedToken {
            found: token.kind.to_string(),
            span: token.span,
        }
    }

    // ── Precedence Chain ──────────────────────────────────────────────────────

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.depth += 1;
        if self.depth > MAX_EXPR_DEPTH {
            self.depth -= 1;
            return Err(ParseError::TooDeep {
                span: self.peek().span,
            });
        }
        let result = self.parse_add();
        self.depth -= 1;
        result
    }

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_add(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_mul()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_mul()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `MulExpr = UnaryExpr { ("*" | "/") UnaryExpr }`
    fn parse_mul(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `UnaryExpr = [ "-" ] PostfixExpr`
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        let start = self.peek().span;
        if self.eat(&TokenKind::Minus) {
            let operand = self.parse_postfix()?;
            let span = start.merge(operand.span);
            Ok(Expr::new(ExprKind::Neg(Box::new(operand)), span))
        } else {
            self.parse_postfix()
        }
    }

    /// `PostfixExpr = PrimaryExpr [ "[" NumberLit "]" ]`
    ///
    /// Indexing is single-level by design; `a[0][1]` does not parse.
    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_primary()?;
        if self.eat(&TokenKind::LBracket) {
            let index = self.parse_index()?;
            let close = self.expect(&TokenKind::RBracket)?;
            let span = expr.span.merge(close.span);
            return Ok(Expr::new(
                ExprKind::Index {
                    target: Box::new(expr),
                    index,
                },
                span,
            ));
        }
        Ok(expr)
    }

    /// An index subscript: a non-negative integer literal.
    fn parse_index(&mut self) -> ParseResult<usize> {
        match *self.peek_kind() {
            TokenKind::NumberLit(n) if n >= 0.0 && n.fract() == 0.0 => {
                self.advance();
                Ok(n as usize)
            }
            TokenKind::NumberLit(_) => Err(ParseError::InvalidIndex {
                span: self.peek().span,
            }),
            _ => Err(self.unexpected()),
        }
    }

    /// `PrimaryExpr = NumberLit | StringLit | Identifier | "(" Expr ")"`
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.peek_kind().clone() {
            TokenKind::NumberLit(n) => {
                let span = self.advance().span;
                Ok(Expr::new(ExprKind::NumberLit(n), span))
            }
            TokenKind::StringLit(s) => {
                let span = self.advance().span;
                Ok(Expr::new(ExprKind::StringLit(s), span))
            }
            TokenKind::Identifier(name) => {
                let span = self.advance().span;
                Ok(Expr::new(ExprKind::Identifier(name), span))
            }
            TokenKind::LParen => {
                let start = self.advance().span;
                let inner = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                let span = start.merge(close.span);
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }
            _ => Err(self.unexpected()),
        }
    }
}
