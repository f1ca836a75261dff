//! AST node types for the minipy snippet dialect.
//!
//! Statements are classified from physical lines in a fixed priority order
//! and represented as tagged variants; expression operands stay raw text
//! until evaluation, because expression failure degrades to verbatim
//! output rather than an error. Every node carries a [`Span`].

use crate::Span;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A classified snippet: one statement per recognized line, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Identifiers
// ══════════════════════════════════════════════════════════════════════════════

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// The five recognized statement forms, in classification priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `print(operand)`
    Print(PrintStmt),
    /// `target.append(arg)`
    Append(AppendStmt),
    /// `for var in range(count):` plus its captured indented block.
    For(ForStmt),
    /// `target = value`
    Assign(AssignStmt),
    /// Any other non-blank line. Executing it is a no-op.
    Unrecognized(Span),
}

impl Stmt {
    /// Source span of this statement's header line.
    pub fn span(&self) -> Span {
        match self {
            Stmt::Print(s) => s.span,
            Stmt::Append(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::Unrecognized(span) => *span,
        }
    }
}

/// `print(operand)` — operand is the raw text between the parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub operand: String,
    pub span: Span,
}

/// `target.append(arg)` — arg is the raw single-argument text.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendStmt {
    pub target: Ident,
    pub arg: String,
    pub span: Span,
}

/// `for var in range(count):` with the indented block that follows.
///
/// The block is captured once at classification time; the loop variable is
/// rebound to the iteration index on each replay. A negative count means
/// zero iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub var: Ident,
    pub count: u32,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `target = value` — split on the first top-level `=` only.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Ident,
    pub value: String,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// Binary operators of the constrained expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expression forms. Intentionally closed: numeric and string literals,
/// variable references, single-level indexing, `+ - * /`, unary minus,
/// and parenthesization. Nothing else parses.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal: `42`, `3.14`
    NumberLit(f64),
    /// Quoted string literal (either quote style): `'hi'`, `"hi"`
    StringLit(String),
    /// Variable reference: `count`
    Identifier(String),
    /// Single-level index access: `items[2]`
    Index { target: Box<Expr>, index: usize },
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// Unary negation: `-x`
    Neg(Box<Expr>),
    /// `( inner )`
    Paren(Box<Expr>),
}
