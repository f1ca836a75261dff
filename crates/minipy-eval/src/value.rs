//! Runtime values.

use std::cell::RefCell;
use std::rc::Rc;

/// A runtime value: number, string, or list.
///
/// Lists are held behind a shared handle so that assignment aliases rather
/// than copies: after `b = a`, appending through `b` is visible through
/// `a`. Cloning a `Value::List` clones the handle, not the elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// Unquoted string. List elements created from a bracketed literal
    /// keep their raw text (quotes included) until rendered or indexed.
    Str(String),
    /// Ordered list of primitives, mutated in place by `append`.
    List(Rc<RefCell<Vec<Value>>>),
}

impl Value {
    /// Create a fresh list value.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Human-readable type name (for error messages).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Render this value the way `print` shows it.
    ///
    /// Numbers with no fractional part render without a decimal point;
    /// strings render verbatim with one pair of matching enclosing quotes
    /// stripped; lists render as `[e1, e2, …]` with no added quotes.
    pub fn render(&self) -> String {
        match self {
            Value::Number(n) => {
                // The cast saturates past i64::MAX, so only integral
                // values safely inside that range drop the decimal point.
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Value::Str(s) => strip_quotes(s).to_string(),
            Value::List(items) => {
                let parts: Vec<String> = items.borrow().iter().map(Value::render).collect();
                format!("[{}]", parts.join(", "))
            }
        }
    }
}

/// Strip one pair of matching enclosing quote characters, if present.
pub(crate) fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
