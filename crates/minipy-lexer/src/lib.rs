//! minipy expression lexer: converts operand text to a token stream.
//!
//! The grammar is deliberately closed — numeric and string literals,
//! identifiers, `+ - * /`, parentheses, and index brackets. A lex failure
//! is not fatal to a run: the evaluator converts it into the raw-text
//! fallback the snippet dialect requires.

mod error;
mod lexer;
pub mod token;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
