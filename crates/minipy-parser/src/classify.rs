//! Statement classification.
//!
//! Each non-blank line is tested against the five recognized forms in a
//! fixed priority order: print, append, for-header, assignment,
//! unrecognized. The classifier never fails — lines that match nothing
//! become inert [`Stmt::Unrecognized`] entries.

use minipy_types::ast::{AppendStmt, AssignStmt, ForStmt, Ident, PrintStmt, Program, Stmt};
use minipy_types::{Line, Snippet, Span};

/// Result of classifying one line in isolation.
///
/// A `for` header is kept separate from finished statements because its
/// block is captured by the line-sequence walk, not by the line itself.
enum LineForm {
    Stmt(Stmt),
    ForHeader { var: Ident, count: u32, span: Span },
}

/// Classify a preprocessed snippet into a statement program.
///
/// A `for` header captures the contiguous indented block that follows
/// (blank lines inside the span are skipped, the first line back at
/// indent zero terminates it) and the outer scan resumes after the block.
/// Block capture is one level deep: a `for` header inside a block is kept
/// as an unrecognized statement.
pub fn classify(snippet: &Snippet) -> Program {
    let lines = snippet.lines();
    let mut stmts = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        if line.is_blank() {
            i += 1;
            continue;
        }
        match classify_line(line) {
            LineForm::Stmt(stmt) => {
                stmts.push(stmt);
                i += 1;
            }
            LineForm::ForHeader { var, count, span } => {
                let (body, next) = capture_block(lines, i + 1);
                stmts.push(Stmt::For(ForStmt {
                    var,
                    count,
                    body,
                    span,
                }));
                i = next;
            }
        }
    }

    let span = match (stmts.first(), stmts.last()) {
        (Some(first), Some(last)) => first.span().merge(last.span()),
        _ => Span::point(1, 1),
    };
    Program { stmts, span }
}

/// Capture the indented block starting at `start`. Returns the classified
/// body and the index of the first line after the block.
fn capture_block(lines: &[Line], start: usize) -> (Vec<Stmt>, usize) {
    let mut body = Vec::new();
    let mut j = start;
    while j < lines.len() {
        let line = &lines[j];
        if line.is_blank() {
            j += 1;
            continue;
        }
        if line.indent == 0 {
            break;
        }
        body.push(match classify_line(line) {
            LineForm::Stmt(stmt) => stmt,
            // Nested loops are unsupported; the header line stays inert.
            LineForm::ForHeader { span, .. } => Stmt::Unrecognized(span),
        });
        j += 1;
    }
    (body, j)
}

/// Test one non-blank line against the recognized forms, in priority order.
fn classify_line(line: &Line) -> LineForm {
    let text = line.text.as_str();
    let span = line.span();

    // 1. print(operand)
    if let Some(rest) = text.strip_prefix("print(") {
        if let Some(operand) = rest.strip_suffix(')') {
            return LineForm::Stmt(Stmt::Print(PrintStmt {
                operand: operand.trim().to_string(),
                span,
            }));
        }
    }

    // 2. target.append(arg)
    if let Some(idx) = text.find(".append(") {
        let rest = &text[idx + ".append(".len()..];
        if let Some(rparen) = rest.rfind(')') {
            return LineForm::Stmt(Stmt::Append(AppendStmt {
                target: Ident::new(text[..idx].trim(), span),
                arg: rest[..rparen].trim().to_string(),
                span,
            }));
        }
    }

    // 3. for var in range(count):
    if let Some((var, count)) = parse_for_header(text) {
        return LineForm::ForHeader {
            var: Ident::new(var, span),
            count,
            span,
        };
    }

    // 4. target = value, split on the first `=` that is not part of `==`
    if let Some(eq) = find_assignment_eq(text) {
        let target = text[..eq].trim();
        if !target.is_empty() {
            return LineForm::Stmt(Stmt::Assign(AssignStmt {
                target: Ident::new(target, span),
                value: text[eq + 1..].trim().to_string(),
                span,
            }));
        }
    }

    // 5. anything else
    LineForm::Stmt(Stmt::Unrecognized(span))
}

/// Match `for <identifier> in range(<integer>):` exactly.
///
/// Any other iterable form (`range(a, b)`, a list name, `enumerate(...)`)
/// returns `None` and the line falls through to unrecognized. A negative
/// count clamps to zero iterations; a count above the `u32` range clamps
/// to the maximum instead of truncating.
fn parse_for_header(text: &str) -> Option<(&str, u32)> {
    let rest = text.strip_prefix("for ")?;
    let rest = rest.strip_suffix(':')?;
    let (var, iterable) = rest.split_once(" in ")?;

    let var = var.trim();
    if var.is_empty() || !is_identifier(var) {
        return None;
    }

    let count_text = iterable
        .trim()
        .strip_prefix("range(")?
        .strip_suffix(')')?
        .trim();
    let count: i64 = count_text.parse().ok()?;
    Some((var, count.clamp(0, i64::from(u32::MAX)) as u32))
}

/// Find the first `=` that is neither preceded nor followed by another `=`.
fn find_assignment_eq(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'=' {
            continue;
        }
        let prev_eq = i > 0 && bytes[i - 1] == b'=';
        let next_eq = bytes.get(i + 1) == Some(&b'=');
        if !prev_eq && !next_eq {
            return Some(i);
        }
    }
    None
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
