//! The interpreter — owns one invocation's variable store and output.
//!
//! Execution never raises: statements that cannot be executed are skipped
//! and operands that cannot be resolved are emitted verbatim. The only
//! surface an embedding host sees is text in, text out.

use minipy_parser::{classify, parse_expr};
use minipy_types::ast::{AppendStmt, BinOp, Expr, ExprKind, ForStmt, PrintStmt, Stmt};
use minipy_types::Snippet;

use crate::env::VarStore;
use crate::error::{EvalError, EvalResult};
use crate::report::RunReport;
use crate::value::{strip_quotes, Value};

/// Placeholder returned when a run prints nothing.
pub const NO_OUTPUT: &str = "(no output)";

/// Run one snippet with a fresh variable store and return the rendered
/// output. This is the whole host contract: pure function of the source
/// text, no shared state between calls.
pub fn run_snippet(source: &str) -> String {
    Interpreter::new().run(source)
}

/// One interpreter invocation: a private variable store plus an ordered
/// output accumulator, both discarded with the instance.
///
/// Hosts that want structure instead of the joined string can inspect
/// [`Interpreter::output_lines`] or take a [`RunReport`] after `run`.
#[derive(Debug, Default)]
pub struct Interpreter {
    store: VarStore,
    output: Vec<String>,
}

impl Interpreter {
    /// Create an interpreter with an empty store.
    pub fn new() -> Self {
        Self {
            store: VarStore::new(),
            output: Vec::new(),
        }
    }

    /// Execute a snippet and return the rendered output (or the
    /// no-output placeholder).
    ///
    /// Every run starts from a fresh store: nothing carries over from a
    /// previous `run` on the same instance.
    pub fn run(&mut self, source: &str) -> String {
        self.store = VarStore::new();
        self.output.clear();
        let snippet = Snippet::new(source);
        let program = classify(&snippet);
        for stmt in &program.stmts {
            self.exec_stmt(stmt);
        }
        self.rendered_output()
    }

    /// The individual printed lines so far.
    pub fn output_lines(&self) -> &[String] {
        &self.output
    }

    /// Current value of a variable, if bound.
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Structured outcome of the run so far.
    pub fn report(&self) -> RunReport {
        RunReport {
            output: self.rendered_output(),
            lines: self.output.clone(),
        }
    }

    fn rendered_output(&self) -> String {
        if self.output.is_empty() {
            NO_OUTPUT.to_string()
        } else {
            self.output.join("\n")
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statement execution
    // ══════════════════════════════════════════════════════════════════════

    fn exec_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Print(print) => self.exec_print(print),
            Stmt::Append(append) => self.exec_append(append),
            Stmt::For(for_stmt) => self.exec_for(for_stmt),
            Stmt::Assign(assign) => {
                let value = self.resolve(&assign.value, assign.span.start_line);
                self.store.define(&assign.target.name, value);
            }
            Stmt::Unrecognized(_) => {}
        }
    }

    fn exec_print(&mut self, print: &PrintStmt) {
        let value = self.resolve(&print.operand, print.span.start_line);
        self.output.push(value.render());
    }

    /// `name.append(arg)`: the argument is resolved by literal rules only
    /// (quoted string, number, raw text) and pushed onto the list under
    /// `name`. Silently a no-op when `name` is absent or not a list.
    fn exec_append(&mut self, append: &AppendStmt) {
        let value = resolve_literal(&append.arg);
        if let Some(Value::List(items)) = self.store.get(&append.target.name) {
            items.borrow_mut().push(value);
        }
    }

    /// Replay the captured block once per iteration with the loop variable
    /// bound to the iteration index. Only `print` statements inside the
    /// block execute; assignments, appends, and nested headers are
    /// skipped. A deliberate capability gap of the dialect.
    fn exec_for(&mut self, for_stmt: &ForStmt) {
        for i in 0..for_stmt.count {
            self.store
                .define(&for_stmt.var.name, Value::Number(f64::from(i)));
            for stmt in &for_stmt.body {
                if let Stmt::Print(print) = stmt {
                    self.exec_print(print);
                }
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Operand resolution
    // ══════════════════════════════════════════════════════════════════════

    /// Reduce operand text to a value. First match wins:
    ///
    /// 1. exact stored-variable name — lists resolve to their shared
    ///    handle, which is what makes `b = a` alias;
    /// 2. quoted literal;
    /// 3. numeric literal;
    /// 4. bracketed list literal (raw, comma-split elements);
    /// 5. single-level index access on a stored list;
    /// 6. the constrained expression grammar, with any failure degrading
    ///    to the raw text itself.
    fn resolve(&self, text: &str, line: u32) -> Value {
        let text = text.trim();

        if let Some(value) = self.store.get(text) {
            return value.clone();
        }
        if let Some(inner) = quoted(text) {
            return Value::Str(inner.to_string());
        }
        if let Ok(n) = text.parse::<f64>() {
            return Value::Number(n);
        }
        if let Some(list) = bracket_literal(text) {
            return list;
        }
        if let Some(element) = self.textual_index(text) {
            return element;
        }
        match self.eval_operand(text, line) {
            Ok(value) => value,
            Err(_) => Value::Str(text.to_string()),
        }
    }

    /// Rule 5: `name[idx]` where `name` holds a list and `idx` is an
    /// in-bounds non-negative integer. Anything else falls through.
    fn textual_index(&self, text: &str) -> Option<Value> {
        let (name, idx_text) = text.strip_suffix(']')?.split_once('[')?;
        let index: usize = idx_text.trim().parse().ok()?;
        let Value::List(items) = self.store.get(name.trim())? else {
            return None;
        };
        let element = items.borrow().get(index)?.clone();
        Some(unquote_element(element))
    }

    /// Rule 6: lex, parse, and evaluate under the closed grammar.
    fn eval_operand(&self, text: &str, line: u32) -> EvalResult<Value> {
        let expr = parse_expr(text, line)?;
        self.eval_expr(&expr)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::NumberLit(n) => Ok(Value::Number(*n)),
            ExprKind::StringLit(s) => Ok(Value::Str(s.clone())),
            ExprKind::Identifier(name) => self
                .store
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            ExprKind::Paren(inner) => self.eval_expr(inner),
            ExprKind::Neg(inner) => match self.eval_expr(inner)? {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(EvalError::TypeMismatch(format!(
                    "cannot negate {}",
                    other.type_name()
                ))),
            },
            ExprKind::Index { target, index } => self.eval_index(target, *index),
            ExprKind::Binary { left, op, right } => {
                let lv = self.eval_expr(left)?;
                let rv = self.eval_expr(right)?;
                eval_binary(&lv, *op, &rv)
            }
        }
    }

    fn eval_index(&self, target: &Expr, index: usize) -> EvalResult<Value> {
        match self.eval_expr(target)? {
            Value::List(items) => {
                let items = items.borrow();
                let element = items
                    .get(index)
                    .cloned()
                    .ok_or(EvalError::IndexOutOfBounds {
                        index,
                        len: items.len(),
                    })?;
                Ok(unquote_element(element))
            }
            other => Err(EvalError::TypeMismatch(format!(
                "cannot index {}",
                other.type_name()
            ))),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════
// Free helpers
// ══════════════════════════════════════════════════════════════════════

/// Literal-only resolution, used for `append` arguments: quoted string,
/// number, or the raw text itself. No variable lookup, no arithmetic.
fn resolve_literal(text: &str) -> Value {
    if let Some(inner) = quoted(text) {
        return Value::Str(inner.to_string());
    }
    if let Ok(n) = text.parse::<f64>() {
        return Value::Number(n);
    }
    Value::Str(text.to_string())
}

/// Match a quoted literal: same quote character at both ends and no
/// further occurrence of it inside. The inner-occurrence restriction keeps
/// `'a' + 'b'` out of this rule so it reaches the expression grammar.
fn quoted(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let q = bytes[0];
    if (q == b'\'' || q == b'"') && bytes[bytes.len() - 1] == q {
        let inner = &text[1..text.len() - 1];
        if !inner.as_bytes().contains(&q) {
            return Some(inner);
        }
    }
    None
}

/// Match `[ ... ]` and build a list of raw string elements (comma-split,
/// trimmed, not recursively typed).
fn bracket_literal(text: &str) -> Option<Value> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    if inner.trim().is_empty() {
        return Some(Value::list(Vec::new()));
    }
    let items = inner
        .split(',')
        .map(|element| Value::Str(element.trim().to_string()))
        .collect();
    Some(Value::list(items))
}

/// Strip one pair of enclosing quotes from a raw-stored string element.
fn unquote_element(element: Value) -> Value {
    match element {
        Value::Str(s) => Value::Str(strip_quotes(&s).to_string()),
        other => other,
    }
}

fn eval_binary(lv: &Value, op: BinOp, rv: &Value) -> EvalResult<Value> {
    match op {
        BinOp::Add => eval_add(lv, rv),
        BinOp::Sub => eval_arith(lv, rv, |a, b| a - b, "-"),
        BinOp::Mul => eval_arith(lv, rv, |a, b| a * b, "*"),
        BinOp::Div => {
            if let (Value::Number(a), Value::Number(b)) = (lv, rv) {
                if *b == 0.0 {
                    return Err(EvalError::ArithmeticTrap("division by zero".into()));
                }
                finite(a / b, "/")
            } else {
                Err(EvalError::TypeMismatch(format!(
                    "cannot divide {} by {}",
                    lv.type_name(),
                    rv.type_name()
                )))
            }
        }
    }
}

/// `+` is numeric addition or string concatenation, nothing else.
fn eval_add(lv: &Value, rv: &Value) -> EvalResult<Value> {
    match (lv, rv) {
        (Value::Number(a), Value::Number(b)) => finite(a + b, "+"),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        _ => Err(EvalError::TypeMismatch(format!(
            "cannot add {} and {}",
            lv.type_name(),
            rv.type_name()
        ))),
    }
}

fn eval_arith(
    lv: &Value,
    rv: &Value,
    op: fn(f64, f64) -> f64,
    symbol: &str,
) -> EvalResult<Value> {
    if let (Value::Number(a), Value::Number(b)) = (lv, rv) {
        finite(op(*a, *b), symbol)
    } else {
        Err(EvalError::TypeMismatch(format!(
            "cannot apply '{symbol}' to {} and {}",
            lv.type_name(),
            rv.type_name()
        )))
    }
}

fn finite(result: f64, symbol: &str) -> EvalResult<Value> {
    if result.is_nan() || result.is_infinite() {
        Err(EvalError::ArithmeticTrap(format!(
            "'{symbol}' produced NaN/Infinity"
        )))
    } else {
        Ok(Value::Number(result))
    }
}
