//! Parser error types.

use minipy_lexer::LexError;
use minipy_types::Span;
use thiserror::Error;

/// Errors that can occur while parsing an expression operand.
///
/// Statement classification never fails (unmatched lines are
/// `Stmt::Unrecognized`); only the expression grammar produces errors, and
/// the evaluator converts them into the raw-text fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The operand failed to tokenize.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that no grammar rule accepts at this position.
    #[error("unexpected '{found}' at {span}")]
    UnexpectedToken { found: String, span: Span },

    /// Expression nesting exceeded the fixed depth limit.
    #[error("expression nesting too deep at {span}")]
    TooDeep { span: Span },

    /// An index subscript that is not a non-negative integer.
    #[error("index must be a non-negative integer at {span}")]
    InvalidIndex { span: Span },
}

/// Parser result type alias.
pub type ParseResult<T> = Result<T, ParseError>;
