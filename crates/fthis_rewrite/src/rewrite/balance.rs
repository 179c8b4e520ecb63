//! Bracket matching that ignores brackets inside strings, comments and templates.

use super::context::Tracker;

/// A matched bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balanced<'a> {
    /// Index of the closing bracket.
    pub end: usize,
    /// Text strictly between the brackets.
    pub inner: &'a [char],
}

/// Find the bracket that closes the `open` at `start`.
///
/// Returns `None` if the input ends first.
pub fn balance(chars: &[char], start: usize, open: char, close: char) -> Option<Balanced<'_>> {
    debug_assert_eq!(chars.get(start), Some(&open));

    let mut tracker = Tracker::new();
    let mut depth: u32 = 0;
    let mut i = start;

    while i < chars.len() {
        if tracker.in_code() {
            if chars[i] == open {
                depth += 1;
            } else if chars[i] == close {
                depth -= 1;
                if depth == 0 {
                    return Some(Balanced {
                        end: i,
                        inner: &chars[start + 1..i],
                    });
                }
            }
        }
        i += tracker.advance(chars, i);
    }

    None
}
