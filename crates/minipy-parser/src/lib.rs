//! minipy parser: preprocessed lines to statements, operand text to
//! expressions.
//!
//! Two independent surfaces:
//! - [`classify`] turns a [`minipy_types::Snippet`] into a statement
//!   program, testing each non-blank line against the five recognized
//!   forms in fixed priority order and capturing one level of indented
//!   `for` block.
//! - [`parse_expr`] parses operand text under the constrained expression
//!   grammar (literals, variables, indexing, `+ - * /`, parentheses).
//!   Operands stay raw in the statement AST because parse failure must
//!   degrade to verbatim output at evaluation time.

mod classify;
mod error;
mod parse_expr;

pub use classify::classify;
pub use error::{ParseError, ParseResult};
pub use parse_expr::parse_expr;
