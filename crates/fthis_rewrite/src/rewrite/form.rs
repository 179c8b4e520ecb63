//! Shorthand shape classification.
//!
//! Starting at a `ƒ` in code position, reads forward to decide which of the
//! shorthand forms it introduces:
//!
//! ```text
//! [async] ƒ [*] [name] [( params )] { body }
//! [async] ƒ     [name] [( params )] expression
//! ```
//!
//! Anything that does not fit yields `None`, and the caller emits the sigil
//! as ordinary text.

use super::balance::balance;
use super::expression::scan_expression;
use super::util::{scan_identifier, skip_whitespace};

/// Body of a shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'a> {
    /// Text between the braces of `{ ... }`.
    Block(&'a [char]),
    /// A single expression, implicitly returned.
    Expression(&'a [char]),
}

/// One recognised shorthand occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand<'a> {
    /// Byte offset in the output buffer where a preceding `async` begins.
    pub async_at: Option<usize>,
    pub is_generator: bool,
    pub name: Option<&'a [char]>,
    /// Text between the parameter parentheses; `None` when they are omitted.
    pub params: Option<&'a [char]>,
    pub body: Body<'a>,
    /// Index just past the shorthand in the input.
    pub end: usize,
}

impl Shorthand<'_> {
    pub fn is_async(&self) -> bool {
        self.async_at.is_some()
    }
}

/// Classify the shorthand whose sigil is at `sigil`.
///
/// `async_at` is the output offset of an `async` word met in code position
/// with only whitespace between it and the sigil.
pub fn classify(chars: &[char], sigil: usize, async_at: Option<usize>) -> Option<Shorthand<'_>> {
    let mut i = skip_whitespace(chars, sigil + 1);
    let is_generator = chars.get(i) == Some(&'*');
    if is_generator {
        i = skip_whitespace(chars, i + 1);
    }

    let name = match scan_identifier(chars, i) {
        Some(end) => {
            let name = &chars[i..end];
            i = skip_whitespace(chars, end);
            Some(name)
        }
        None => None,
    };

    let params = if chars.get(i) == Some(&'(') {
        let region = balance(chars, i, '(', ')')?;
        i = skip_whitespace(chars, region.end + 1);
        Some(region.inner)
    } else {
        None
    };

    let (body, end) = if chars.get(i) == Some(&'{') {
        let region = balance(chars, i, '{', '}')?;
        (Body::Block(region.inner), region.end + 1)
    } else if is_generator {
        return None;
    } else {
        let expr = scan_expression(chars, i);
        if expr.is_empty() {
            return None;
        }
        (Body::Expression(expr.text), expr.end)
    };

    Some(Shorthand {
        async_at,
        is_generator,
        name,
        params,
        body,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text(slice: &[char]) -> String {
        slice.iter().collect()
    }

    #[test]
    fn named_with_params_and_block() {
        let src = chars("ƒ add(a, b) { return a + b } rest");
        let form = classify(&src, 0, None).unwrap();
        assert_eq!(form.name.map(text).as_deref(), Some("add"));
        assert_eq!(form.params.map(text).as_deref(), Some("a, b"));
        assert_eq!(form.body, Body::Block(&src[13..27]));
        assert_eq!(form.end, 28);
        assert!(!form.is_async());
        assert!(!form.is_generator);
    }

    #[test]
    fn anonymous_expression_without_params() {
        let src = chars("ƒ (x) x * 2, y");
        let form = classify(&src, 0, None).unwrap();
        assert_eq!(form.name, None);
        assert_eq!(form.params.map(text).as_deref(), Some("x"));
        match form.body {
            Body::Expression(e) => assert_eq!(text(e), "x * 2"),
            other => panic!("expected expression body, got {other:?}"),
        }
    }

    #[test]
    fn named_without_params() {
        let src = chars("ƒ tick { log() }");
        let form = classify(&src, 0, None).unwrap();
        assert_eq!(form.name.map(text).as_deref(), Some("tick"));
        assert_eq!(form.params, None);
    }

    #[test]
    fn generator_marker() {
        let src = chars("ƒ * ids() { yield 1 }");
        let form = classify(&src, 0, None).unwrap();
        assert!(form.is_generator);
        assert_eq!(form.name.map(text).as_deref(), Some("ids"));
    }

    #[test]
    fn generator_requires_block_body() {
        let src = chars("ƒ* ids() 1");
        assert_eq!(classify(&src, 0, None), None);
    }

    #[test]
    fn unbalanced_params_is_not_shorthand() {
        let src = chars("ƒ f(a, b { }");
        assert_eq!(classify(&src, 0, None), None);
    }

    #[test]
    fn empty_expression_is_not_shorthand() {
        let src = chars("ƒ(x);");
        assert_eq!(classify(&src, 0, None), None);
    }
}
