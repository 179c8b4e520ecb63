//! Source-tree builder.
//!
//! Mirrors a source directory into an output directory. Files with the
//! `.fjs` extension are run through the shorthand rewriter and written with
//! a `.js` extension; every other file is copied byte-for-byte.

pub mod build;
pub mod config;

pub use build::{build, BuildReport, Unrewritten};
pub use config::BuildConfig;
