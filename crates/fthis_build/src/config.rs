//! Build configuration, loadable from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fthis_rewrite::{DeclarationKeyword, RewriteOptions};
use serde::{Deserialize, Serialize};

/// Where to read sources, where to write output, and how to rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    pub source: PathBuf,
    pub distro: PathBuf,
    pub declaration_keyword: DeclarationKeyword,
    /// Remove the output directory before building.
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("source"),
            distro: PathBuf::from("distro"),
            declaration_keyword: DeclarationKeyword::default(),
            clean: true,
        }
    }
}

impl BuildConfig {
    /// Read a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions::with_keyword(self.declaration_keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: BuildConfig =
            serde_json::from_str(r#"{ "distro": "out", "declarationKeyword": "const" }"#).unwrap();
        assert_eq!(cfg.source, PathBuf::from("source"));
        assert_eq!(cfg.distro, PathBuf::from("out"));
        assert_eq!(cfg.declaration_keyword, DeclarationKeyword::Const);
        assert!(cfg.clean);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let err = serde_json::from_str::<BuildConfig>(r#"{ "declarationKeyword": "function" }"#);
        assert!(err.is_err());
    }
}
