use crate::Span;

/// One physical line of a snippet after preprocessing.
///
/// Comment text is already removed; `text` is the trimmed remainder and
/// `indent` the leading-whitespace width of the raw line. Blank lines keep
/// their place in the sequence so line numbering stays stable — block
/// detection depends on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based physical line number.
    pub number: u32,
    /// Leading-whitespace width (spaces and tabs each count one column).
    pub indent: u32,
    /// Trimmed, comment-free content. Empty for blank lines.
    pub text: String,
}

impl Line {
    /// Returns `true` if nothing remains on this line after preprocessing.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Span covering this line's content.
    pub fn span(&self) -> Span {
        Span::line(self.number, self.indent + self.text.chars().count() as u32)
    }
}

/// A preprocessed snippet: every physical line of the source, in order.
///
/// Construction strips comments (everything from the first `#` outside a
/// quoted region), trims content, and measures indentation. No line is
/// discarded, including blank ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    lines: Vec<Line>,
}

impl Snippet {
    /// Preprocess raw source text into an indexed line sequence.
    ///
    /// CRLF input is accepted; a trailing `\r` is stripped from each line.
    pub fn new(source: &str) -> Self {
        let lines = source
            .split('\n')
            .enumerate()
            .map(|(i, raw)| {
                let raw = raw.strip_suffix('\r').unwrap_or(raw);
                let without_comment = strip_comment(raw);
                let indent = without_comment
                    .chars()
                    .take_while(|c| *c == ' ' || *c == '\t')
                    .count() as u32;
                Line {
                    number: i as u32 + 1,
                    indent,
                    text: without_comment.trim().to_string(),
                }
            })
            .collect();
        Self { lines }
    }

    /// All lines, in physical order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a line by its 1-based number.
    pub fn line(&self, number: u32) -> Option<&Line> {
        self.lines.get(number.checked_sub(1)? as usize)
    }

    /// Total number of physical lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Drop everything from the first `#` that is not inside a quoted region.
///
/// Quote handling is deliberately simple: a `'` or `"` opens a region that
/// ends at the next identical character. No escapes, no nesting — the
/// snippet dialect has neither.
fn strip_comment(raw: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, ch) in raw.char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                '#' => return &raw[..i],
                _ => {}
            },
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_numbering() {
        let s = Snippet::new("a = 1\n\nprint(a)");
        assert_eq!(s.line_count(), 3);
        assert_eq!(s.line(1).unwrap().text, "a = 1");
        assert!(s.line(2).unwrap().is_blank());
        assert_eq!(s.line(3).unwrap().text, "print(a)");
        assert_eq!(s.line(0), None);
        assert_eq!(s.line(4), None);
    }

    #[test]
    fn test_comment_stripped() {
        let s = Snippet::new("x = 1  # set up\n# whole line\nprint(x)");
        assert_eq!(s.line(1).unwrap().text, "x = 1");
        assert!(s.line(2).unwrap().is_blank());
        assert_eq!(s.line(3).unwrap().text, "print(x)");
    }

    #[test]
    fn test_hash_inside_quotes_is_content() {
        let s = Snippet::new("msg = '#1 fan'  # trailing");
        assert_eq!(s.line(1).unwrap().text, "msg = '#1 fan'");
        let d = Snippet::new("msg = \"a # b\"");
        assert_eq!(d.line(1).unwrap().text, "msg = \"a # b\"");
    }

    #[test]
    fn test_indent_measured_before_trim() {
        let s = Snippet::new("for i in range(2):\n    print(i)\n\tprint(i)");
        assert_eq!(s.line(1).unwrap().indent, 0);
        assert_eq!(s.line(2).unwrap().indent, 4);
        assert_eq!(s.line(3).unwrap().indent, 1);
        assert_eq!(s.line(2).unwrap().text, "print(i)");
    }

    #[test]
    fn test_crlf() {
        let s = Snippet::new("x = 1\r\nprint(x)\r\n");
        assert_eq!(s.line(1).unwrap().text, "x = 1");
        assert_eq!(s.line(2).unwrap().text, "print(x)");
        // The trailing newline yields one final blank line.
        assert_eq!(s.line_count(), 3);
        assert!(s.line(3).unwrap().is_blank());
    }

    #[test]
    fn test_empty_source() {
        let s = Snippet::new("");
        assert_eq!(s.line_count(), 1);
        assert!(s.line(1).unwrap().is_blank());
    }

    #[test]
    fn test_line_span() {
        let s = Snippet::new("  print(1)");
        let line = s.line(1).unwrap();
        assert_eq!(line.span(), Span::new(1, 1, 1, 10));
    }
}
