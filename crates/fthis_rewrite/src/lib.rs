//! Rewriter for the `ƒ` function shorthand.
//!
//! Scans JavaScript source at the text level and replaces each shorthand
//! occurrence with standard syntax, leaving everything else untouched:
//!
//! - `ƒ add(a, b) { return a + b }` → `var add = (a, b) => { return a + b };`
//! - `ƒ(x) x * 2` → `((x) => x * 2)`
//! - `async ƒ{ await tick() }` → `(async () => { await tick() })`
//! - `ƒ* ids() { yield 1 }` → `var ids = function* () { yield 1 };`
//!
//! The sigil is only recognised in code position: strings, comments and
//! template literal text pass through verbatim.

pub mod options;
pub mod rewrite;

pub use options::{DeclarationKeyword, RewriteOptions};
pub use rewrite::{rewrite, unrewritten_sigils, SigilSite, SIGIL};
