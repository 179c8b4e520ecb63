//! The shorthand rewriting pass.
//!
//! One forward scan copies the input to the output. Each `ƒ` met in code
//! position is classified ([`form`]) and replaced in a single step by its
//! standard form ([`emit`]), after which the scan resumes past the
//! shorthand. Sub-spans (parameters, bodies) are rewritten by calling back
//! into the same scan over borrowed slices.

mod balance;
mod context;
mod emit;
mod expression;
mod form;
mod util;

use serde::Serialize;

use crate::options::RewriteOptions;

use context::Tracker;
use util::{char_offset_to_byte, is_ident_continue, is_ident_start};

/// The shorthand sigil (LATIN SMALL LETTER F WITH HOOK).
pub const SIGIL: char = 'ƒ';

/// Rewrite every shorthand occurrence in `source` to standard JavaScript.
///
/// Never fails: a sigil that does not start a well-formed shorthand (for
/// example an unterminated parameter list) is copied through unchanged.
pub fn rewrite(source: &str, options: &RewriteOptions) -> String {
    if !source.contains(SIGIL) {
        return source.to_string();
    }
    let chars: Vec<char> = source.chars().collect();
    rewrite_chars(&chars, options)
}

pub(crate) fn rewrite_chars(chars: &[char], options: &RewriteOptions) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut tracker = Tracker::new();
    // Output offset of an `async` word seen in code, followed by nothing
    // but whitespace so far.
    let mut pending_async: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        if tracker.in_code() {
            if chars[i] == SIGIL {
                match form::classify(chars, i, pending_async) {
                    Some(shorthand) => {
                        emit::emit(&shorthand, options, &mut out);
                        i = shorthand.end;
                    }
                    None => {
                        tracing::trace!(offset = i, "sigil does not start a shorthand, copied as-is");
                        out.push(SIGIL);
                        i += 1;
                    }
                }
                pending_async = None;
                continue;
            }

            if let Some(end) = code_word(chars, i) {
                let word = &chars[i..end];
                pending_async = (word == ['a', 's', 'y', 'n', 'c']).then_some(out.len());
                out.extend(word);
                i = end;
                continue;
            }

            if !chars[i].is_whitespace() {
                pending_async = None;
            }
        } else {
            pending_async = None;
        }

        let width = tracker.advance(chars, i);
        out.extend(&chars[i..i + width]);
        i += width;
    }

    out
}

/// End of the identifier-like word starting at `i`, if one starts there.
///
/// The sigil ends a word so that `asyncƒ` still reaches the classifier.
fn code_word(chars: &[char], i: usize) -> Option<usize> {
    if i > 0 && is_ident_continue(chars[i - 1]) {
        return None;
    }
    if !is_ident_start(chars[i]) {
        return None;
    }
    let mut end = i + 1;
    while end < chars.len() && chars[end] != SIGIL && is_ident_continue(chars[end]) {
        end += 1;
    }
    Some(end)
}

/// Location of a sigil left in code position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SigilSite {
    /// Byte offset into the scanned text.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
}

/// Find every sigil that sits in code position in `text`.
///
/// Run over rewriter output, a non-empty result means some shorthand could
/// not be parsed and was left as-is.
pub fn unrewritten_sigils(text: &str) -> Vec<SigilSite> {
    let chars: Vec<char> = text.chars().collect();
    let mut sites = Vec::new();
    let mut tracker = Tracker::new();
    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;

    while i < chars.len() {
        if tracker.in_code() && chars[i] == SIGIL {
            sites.push(SigilSite {
                offset: char_offset_to_byte(&chars, i),
                line,
                column: i - line_start + 1,
            });
        }
        let width = tracker.advance(&chars, i);
        for (k, &c) in chars[i..i + width].iter().enumerate() {
            if c == '\n' {
                line += 1;
                line_start = i + k + 1;
            }
        }
        i += width;
    }

    sites
}
