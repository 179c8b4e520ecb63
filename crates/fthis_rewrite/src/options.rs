//! Rewrite configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Statement keyword that introduces a named shorthand rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKeyword {
    /// `var name = ...;` (hoisted, may be redeclared).
    #[default]
    Var,
    Let,
    Const,
}

impl DeclarationKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKeyword::Var => "var",
            DeclarationKeyword::Let => "let",
            DeclarationKeyword::Const => "const",
        }
    }
}

impl fmt::Display for DeclarationKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclarationKeyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "var" => Ok(DeclarationKeyword::Var),
            "let" => Ok(DeclarationKeyword::Let),
            "const" => Ok(DeclarationKeyword::Const),
            other => Err(format!(
                "unknown declaration keyword `{other}` (expected var, let or const)"
            )),
        }
    }
}

/// Options controlling the emitted syntax.
///
/// Only the keyword of named rewrites is configurable. Every non-generator
/// shorthand becomes an arrow function, so `this` and `arguments` are always
/// captured lexically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriteOptions {
    pub declaration_keyword: DeclarationKeyword,
}

impl RewriteOptions {
    pub fn with_keyword(declaration_keyword: DeclarationKeyword) -> Self {
        Self {
            declaration_keyword,
        }
    }
}
