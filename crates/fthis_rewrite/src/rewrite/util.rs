//! Shared character helpers.

use unicode_xid::UnicodeXID;

pub(super) fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

pub(super) fn is_ident_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_ascii_alphabetic() || (!c.is_ascii() && c.is_xid_start())
}

pub(super) fn is_ident_continue(c: char) -> bool {
    c == '$'
        || c == '_'
        || c == '\u{200C}'
        || c == '\u{200D}'
        || c.is_ascii_alphanumeric()
        || (!c.is_ascii() && c.is_xid_continue())
}

/// Read the identifier starting at `start`, returning the index past it.
pub(super) fn scan_identifier(chars: &[char], start: usize) -> Option<usize> {
    if !chars.get(start).copied().is_some_and(is_ident_start) {
        return None;
    }
    let mut i = start + 1;
    while i < chars.len() && is_ident_continue(chars[i]) {
        i += 1;
    }
    Some(i)
}

/// Convert a character index to a byte offset in UTF-8.
pub(super) fn char_offset_to_byte(chars: &[char], char_idx: usize) -> usize {
    chars[..char_idx].iter().map(|c| c.len_utf8()).sum()
}
