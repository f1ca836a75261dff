//! Runtime error types.
//!
//! These never escape the interpreter: every failure during operand
//! resolution degrades to the raw-text fallback, and every failure during
//! statement execution skips the statement. The enum exists so the
//! resolution pipeline can use `?` internally and tests can observe why
//! an operand fell back.

use minipy_parser::ParseError;
use thiserror::Error;

/// Evaluation error — arithmetic traps, bad lookups, grammar failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Unknown variable in an expression.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// Operator applied to incompatible operand types.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Index past the end of a list.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Division by zero or a NaN/Infinity result.
    #[error("arithmetic trap: {0}")]
    ArithmeticTrap(String),

    /// The operand failed to lex or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
