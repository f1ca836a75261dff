//! Shared types for the minipy interpreter.
//!
//! This crate defines the preprocessed snippet model, source spans,
//! and the statement/expression AST shared by the parser and evaluator.

mod snippet;
mod span;
pub mod ast;

pub use snippet::{Line, Snippet};
pub use span::Span;
