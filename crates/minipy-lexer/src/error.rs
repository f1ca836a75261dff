//! Lexer error types.

use minipy_types::Span;
use thiserror::Error;

/// Errors that can occur while tokenizing an expression operand.
///
/// None of these reach the interpreter's caller — an operand that fails to
/// lex is emitted verbatim instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character outside the closed expression grammar.
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedChar { ch: char, span: Span },

    /// A string literal with no closing quote.
    #[error("unterminated string literal at {span}")]
    UnterminatedString { span: Span },
}

/// Lexer result type alias.
pub type LexResult<T> = Result<T, LexError>;
