//! Bare-expression scanning for shorthand bodies without braces.

use super::context::{ScanState, Tracker};

/// The extent of one top-level expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    /// Index just past the expression text. Trailing whitespace and a
    /// trailing line comment before the terminator are not part of it.
    pub end: usize,
    pub text: &'a [char],
}

impl Expression<'_> {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Default)]
struct Nesting {
    paren: u32,
    brace: u32,
    bracket: u32,
}

impl Nesting {
    fn at_top(&self) -> bool {
        self.paren == 0 && self.brace == 0 && self.bracket == 0
    }

    fn counter(&mut self, c: char) -> Option<&mut u32> {
        match c {
            '(' | ')' => Some(&mut self.paren),
            '{' | '}' => Some(&mut self.brace),
            '[' | ']' => Some(&mut self.bracket),
            _ => None,
        }
    }
}

/// Scan forward from `start` to the end of the expression beginning there.
///
/// Stops before the first `,` or `;` outside any bracket, or before a
/// closing bracket that belongs to an enclosing construct. Running off the
/// end of the input ends the expression there.
pub fn scan_expression(chars: &[char], start: usize) -> Expression<'_> {
    let mut tracker = Tracker::new();
    let mut nesting = Nesting::default();
    let mut end = start;
    let mut i = start;

    while i < chars.len() {
        let state = tracker.state();
        if state == ScanState::Code {
            let c = chars[i];
            match c {
                '(' | '{' | '[' => {
                    if let Some(count) = nesting.counter(c) {
                        *count += 1;
                    }
                }
                ')' | '}' | ']' => match nesting.counter(c) {
                    Some(count) if *count > 0 => *count -= 1,
                    _ => break,
                },
                ',' | ';' if nesting.at_top() => break,
                _ => {}
            }
        }

        let width = tracker.advance(chars, i);
        let in_line_comment =
            state == ScanState::LineComment || tracker.state() == ScanState::LineComment;
        if !in_line_comment && !chars[i..i + width].iter().all(|c| c.is_whitespace()) {
            end = i + width;
        }
        i += width;
    }

    Expression {
        end,
        text: &chars[start..end],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(src: &str) -> String {
        let chars: Vec<char> = src.chars().collect();
        scan_expression(&chars, 0).text.iter().collect()
    }

    #[test]
    fn stops_at_top_level_comma_and_semicolon() {
        assert_eq!(expr("x * 2, 3"), "x * 2");
        assert_eq!(expr("x * 2; next()"), "x * 2");
    }

    #[test]
    fn nested_commas_are_kept() {
        assert_eq!(expr("f(a, b)[c, d], e"), "f(a, b)[c, d]");
        assert_eq!(expr("({ a: 1, b: 2 }); z"), "({ a: 1, b: 2 })");
    }

    #[test]
    fn stops_at_enclosing_close_bracket() {
        assert_eq!(expr("x + 1 ) + 2"), "x + 1");
        assert_eq!(expr("[x] }"), "[x]");
        assert_eq!(expr("{ a } ]"), "{ a }");
    }

    #[test]
    fn mismatched_close_bracket_terminates() {
        assert_eq!(expr("(a ] b)"), "(a");
    }

    #[test]
    fn terminators_inside_literals_are_ignored() {
        assert_eq!(expr(r#"log("a, b; c)", 'd\'e,') ; x"#), r#"log("a, b; c)", 'd\'e,')"#);
        assert_eq!(expr("`a, ${ b; } c` , d"), "`a, ${ b; } c`");
        assert_eq!(expr("a /* , */ + b // ;\n + c; d"), "a /* , */ + b // ;\n + c");
    }

    #[test]
    fn trailing_line_comment_is_left_out() {
        assert_eq!(expr("x * 2 // double\n) + 1"), "x * 2");
        assert_eq!(expr("x // id"), "x");
        let chars: Vec<char> = "x // id\n]".chars().collect();
        assert_eq!(scan_expression(&chars, 0).end, 1);
    }

    #[test]
    fn inner_line_comment_is_kept() {
        assert_eq!(expr("a // first\n + b, c"), "a // first\n + b");
    }

    #[test]
    fn runs_to_end_of_input() {
        assert_eq!(expr("a + b \n"), "a + b");
        let chars: Vec<char> = "a + b \n".chars().collect();
        assert_eq!(scan_expression(&chars, 0).end, 5);
    }

    #[test]
    fn empty_expression() {
        let chars: Vec<char> = "; x".chars().collect();
        assert!(scan_expression(&chars, 0).is_empty());
    }
}
