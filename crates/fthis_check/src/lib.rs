//! Checks run over rewriter output.
//!
//! The rewriter never reports problems: a shorthand it cannot parse is left
//! in place. These checks surface such leftovers and confirm the output is
//! valid JavaScript:
//!
//! - [`unrewritten_sigils`] finds `ƒ` still in code position
//! - [`check_script`] parses the text with SWC

pub mod check;

pub use check::{check_output, check_script};
pub use fthis_rewrite::{unrewritten_sigils, SigilSite};
