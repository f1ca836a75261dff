//! Tests for the statement classifier.
//!
//! Covers: the five recognized forms, the fixed priority order, one-level
//! `for`-block capture (blank lines inside the span, indent-zero
//! termination), and the silent-skip behavior for everything else.

use minipy_parser::classify;
use minipy_types::ast::{Program, Stmt};
use minipy_types::Snippet;

/// Classify source text.
fn program(source: &str) -> Program {
    classify(&Snippet::new(source))
}

/// Classify source text that should yield exactly one statement.
fn single(source: &str) -> Stmt {
    let prog = program(source);
    assert_eq!(prog.stmts.len(), 1, "expected one statement: {source:?}");
    prog.stmts.into_iter().next().unwrap()
}

// ─────────────────────────────────────────────────────────────────────
// Individual forms
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_print_statement() {
    match single("print(x + 1)") {
        Stmt::Print(p) => assert_eq!(p.operand, "x + 1"),
        other => panic!("expected print, got {other:?}"),
    }
}

#[test]
fn test_print_operand_trimmed() {
    match single("print(  'hello'  )") {
        Stmt::Print(p) => assert_eq!(p.operand, "'hello'"),
        other => panic!("expected print, got {other:?}"),
    }
}

#[test]
fn test_print_without_closing_paren_is_not_print() {
    // Falls through: no `=`, no other form matches.
    assert!(matches!(single("print(x"), Stmt::Unrecognized(_)));
}

#[test]
fn test_append_statement() {
    match single("items.append(4)") {
        Stmt::Append(a) => {
            assert_eq!(a.target.name, "items");
            assert_eq!(a.arg, "4");
        }
        other => panic!("expected append, got {other:?}"),
    }
}

#[test]
fn test_append_quoted_argument() {
    match single("names.append('bob')") {
        Stmt::Append(a) => assert_eq!(a.arg, "'bob'"),
        other => panic!("expected append, got {other:?}"),
    }
}

#[test]
fn test_for_header() {
    match single("for i in range(3):") {
        Stmt::For(f) => {
            assert_eq!(f.var.name, "i");
            assert_eq!(f.count, 3);
            assert!(f.body.is_empty());
        }
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn test_for_negative_count_clamps_to_zero() {
    match single("for i in range(-2):") {
        Stmt::For(f) => assert_eq!(f.count, 0),
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn test_for_oversized_count_clamps_to_u32_max() {
    // One past u32::MAX must not wrap around to a single iteration.
    match single("for i in range(4294967296):") {
        Stmt::For(f) => assert_eq!(f.count, u32::MAX),
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn test_for_over_other_iterables_is_unrecognized() {
    assert!(matches!(single("for x in items:"), Stmt::Unrecognized(_)));
    assert!(matches!(
        single("for i in range(1, 5):"),
        Stmt::Unrecognized(_)
    ));
    assert!(matches!(
        single("for i in range(n):"),
        Stmt::Unrecognized(_)
    ));
}

#[test]
fn test_assignment() {
    match single("total = x + y") {
        Stmt::Assign(a) => {
            assert_eq!(a.target.name, "total");
            assert_eq!(a.value, "x + y");
        }
        other => panic!("expected assign, got {other:?}"),
    }
}

#[test]
fn test_assignment_splits_on_first_eq_only() {
    match single("a = b = c") {
        Stmt::Assign(a) => {
            assert_eq!(a.target.name, "a");
            assert_eq!(a.value, "b = c");
        }
        other => panic!("expected assign, got {other:?}"),
    }
}

#[test]
fn test_double_eq_is_not_assignment() {
    assert!(matches!(single("x == 3"), Stmt::Unrecognized(_)));
}

#[test]
fn test_unsupported_constructs_are_unrecognized() {
    assert!(matches!(single("while True:"), Stmt::Unrecognized(_)));
    assert!(matches!(single("import os"), Stmt::Unrecognized(_)));
    assert!(matches!(single("if x > 2:"), Stmt::Unrecognized(_)));
}

// ─────────────────────────────────────────────────────────────────────
// Priority order
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_print_takes_priority_over_append() {
    // Contains `.append(` but starts with `print(` — rule 1 wins.
    assert!(matches!(
        single("print(items.append(4))"),
        Stmt::Print(_)
    ));
}

#[test]
fn test_append_takes_priority_over_assignment() {
    // Contains both `.append(` and `=` — rule 2 wins.
    match single("x.append(y = 2)") {
        Stmt::Append(a) => assert_eq!(a.arg, "y = 2"),
        other => panic!("expected append, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Block capture
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_for_captures_indented_block() {
    let prog = program("for i in range(2):\n  print(i)\n  print(i * 2)\nprint('done')");
    assert_eq!(prog.stmts.len(), 2);
    match &prog.stmts[0] {
        Stmt::For(f) => {
            assert_eq!(f.body.len(), 2);
            assert!(matches!(f.body[0], Stmt::Print(_)));
            assert!(matches!(f.body[1], Stmt::Print(_)));
        }
        other => panic!("expected for, got {other:?}"),
    }
    assert!(matches!(prog.stmts[1], Stmt::Print(_)));
}

#[test]
fn test_blank_line_inside_block_does_not_terminate() {
    let prog = program("for i in range(2):\n  print(i)\n\n  print(i)\nx = 1");
    match &prog.stmts[0] {
        Stmt::For(f) => assert_eq!(f.body.len(), 2),
        other => panic!("expected for, got {other:?}"),
    }
    assert!(matches!(prog.stmts[1], Stmt::Assign(_)));
}

#[test]
fn test_block_ends_at_indent_zero() {
    let prog = program("for i in range(1):\n  print(i)\nprint('after')");
    match &prog.stmts[0] {
        Stmt::For(f) => assert_eq!(f.body.len(), 1),
        other => panic!("expected for, got {other:?}"),
    }
    assert_eq!(prog.stmts.len(), 2);
}

#[test]
fn test_nested_for_header_in_block_stays_inert() {
    let prog = program("for i in range(2):\n  for j in range(2):\n  print(i)");
    assert_eq!(prog.stmts.len(), 1);
    match &prog.stmts[0] {
        Stmt::For(f) => {
            assert_eq!(f.body.len(), 2);
            assert!(matches!(f.body[0], Stmt::Unrecognized(_)));
            assert!(matches!(f.body[1], Stmt::Print(_)));
        }
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn test_assignment_inside_block_is_classified() {
    // Classified but not executed by the evaluator — the capability gap is
    // an evaluator decision, not a classifier one.
    let prog = program("for i in range(2):\n  x = i\n  print(x)");
    match &prog.stmts[0] {
        Stmt::For(f) => {
            assert!(matches!(f.body[0], Stmt::Assign(_)));
            assert!(matches!(f.body[1], Stmt::Print(_)));
        }
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn test_for_at_end_of_input() {
    let prog = program("for i in range(3):\n  print(i)");
    assert_eq!(prog.stmts.len(), 1);
}

// ─────────────────────────────────────────────────────────────────────
// Whole snippets
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_and_comment_only_source() {
    assert!(program("").stmts.is_empty());
    assert!(program("# just a comment\n\n# another").stmts.is_empty());
}

#[test]
fn test_comments_and_blanks_skipped_between_statements() {
    let prog = program("x = 1  # init\n\n# say it\nprint(x)");
    assert_eq!(prog.stmts.len(), 2);
    assert!(matches!(prog.stmts[0], Stmt::Assign(_)));
    assert!(matches!(prog.stmts[1], Stmt::Print(_)));
}

#[test]
fn test_spans_track_physical_lines() {
    let prog = program("x = 1\n\nprint(x)");
    assert_eq!(prog.stmts[0].span().start_line, 1);
    assert_eq!(prog.stmts[1].span().start_line, 3);
}

#[test]
fn test_classification_is_deterministic() {
    let source = "x = [1, 2]\nfor i in range(2):\n  print(x)\nprint('end')";
    let first = program(source);
    for _ in 0..10 {
        assert_eq!(program(source), first);
    }
}
