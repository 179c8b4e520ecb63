//! The build walk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fthis_rewrite::{rewrite, unrewritten_sigils, RewriteOptions, SigilSite};
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::BuildConfig;

const SOURCE_EXTENSION: &str = "fjs";
const OUTPUT_EXTENSION: &str = "js";

/// A shorthand left in place in one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unrewritten {
    pub path: PathBuf,
    pub site: SigilSite,
}

/// What a build did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Output paths of rewritten `.fjs` files.
    pub transformed: Vec<PathBuf>,
    /// Output paths of files copied unchanged.
    pub copied: Vec<PathBuf>,
    pub unrewritten: Vec<Unrewritten>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.unrewritten.is_empty()
    }
}

/// Build `config.source` into `config.distro`.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let options = config.rewrite_options();
    let source = config.source.as_path();
    let distro = config.distro.as_path();

    if !source.is_dir() {
        anyhow::bail!("source directory {} does not exist", source.display());
    }
    check_disjoint(source, distro, config.clean)?;

    if config.clean && distro.exists() {
        fs::remove_dir_all(distro)
            .with_context(|| format!("failed to clean {}", distro.display()))?;
    }
    fs::create_dir_all(distro)
        .with_context(|| format!("failed to create {}", distro.display()))?;

    let mut report = BuildReport::default();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", source.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = path
            .strip_prefix(source)
            .with_context(|| format!("{} is outside {}", path.display(), source.display()))?;

        if is_shorthand_source(path) {
            let out_path = distro.join(rel).with_extension(OUTPUT_EXTENSION);
            transform_file(path, &out_path, &options, &mut report)?;
            report.transformed.push(out_path);
        } else {
            let out_path = distro.join(rel);
            ensure_parent(&out_path)?;
            fs::copy(path, &out_path).with_context(|| {
                format!("failed to copy {} to {}", path.display(), out_path.display())
            })?;
            tracing::debug!(from = %path.display(), to = %out_path.display(), "copied");
            report.copied.push(out_path);
        }
    }

    tracing::info!(
        transformed = report.transformed.len(),
        copied = report.copied.len(),
        "built {} into {}",
        source.display(),
        distro.display()
    );

    Ok(report)
}

fn transform_file(
    path: &Path,
    out_path: &Path,
    options: &RewriteOptions,
    report: &mut BuildReport,
) -> Result<()> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let js = rewrite(&src, options);

    for site in unrewritten_sigils(&js) {
        tracing::warn!(
            file = %path.display(),
            line = site.line,
            column = site.column,
            "ƒ shorthand could not be rewritten"
        );
        report.unrewritten.push(Unrewritten {
            path: out_path.to_path_buf(),
            site,
        });
    }

    ensure_parent(out_path)?;
    fs::write(out_path, js).with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::debug!(from = %path.display(), to = %out_path.display(), "rewrote");
    Ok(())
}

/// The output tree must not be the source tree or live inside it, and a
/// cleaned output tree must not contain the source.
fn check_disjoint(source: &Path, distro: &Path, clean: bool) -> Result<()> {
    let source_abs = resolve(source)?;
    let distro_abs = resolve(distro)?;

    if distro_abs.starts_with(&source_abs) {
        anyhow::bail!(
            "output directory {} is inside source directory {}",
            distro.display(),
            source.display()
        );
    }
    if clean && source_abs.starts_with(&distro_abs) {
        anyhow::bail!(
            "cleaning output directory {} would delete source directory {}",
            distro.display(),
            source.display()
        );
    }
    Ok(())
}

/// Canonical form of `path`, which may not exist yet: the nearest existing
/// ancestor is canonicalized and the rest appended.
fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to read current directory")?
            .join(path)
    };

    let mut existing = absolute.as_path();
    let mut rest = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    resolved.extend(rest.iter().rev());
    Ok(resolved)
}

fn is_shorthand_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fthis_rewrite::DeclarationKeyword;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> BuildConfig {
        BuildConfig {
            source: dir.path().join("source"),
            distro: dir.path().join("distro"),
            ..BuildConfig::default()
        }
    }

    fn write(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn rewrites_fjs_and_copies_the_rest() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir);
        write(&cfg.source.join("app.fjs"), "ƒ add(a, b) a + b".as_bytes());
        write(&cfg.source.join("lib/util.FJS"), "export default ƒ(x) x".as_bytes());
        write(&cfg.source.join("index.html"), b"<script src=app.js></script>");
        write(&cfg.source.join("img/logo.png"), &[0x89, b'P', b'N', b'G', 0, 0xff]);

        let report = build(&cfg).unwrap();

        assert_eq!(
            fs::read_to_string(cfg.distro.join("app.js")).unwrap(),
            "var add = (a, b) => a + b;"
        );
        assert_eq!(
            fs::read_to_string(cfg.distro.join("lib/util.js")).unwrap(),
            "export default ((x) => x)"
        );
        assert_eq!(
            fs::read(cfg.distro.join("img/logo.png")).unwrap(),
            vec![0x89, b'P', b'N', b'G', 0, 0xff]
        );
        assert!(cfg.distro.join("index.html").is_file());
        assert!(!cfg.distro.join("app.fjs").exists());
        assert_eq!(report.transformed.len(), 2);
        assert_eq!(report.copied.len(), 2);
        assert!(report.is_clean());
    }

    #[test]
    fn keyword_from_config_is_used() {
        let dir = TempDir::new().unwrap();
        let cfg = BuildConfig {
            declaration_keyword: DeclarationKeyword::Let,
            ..config_in(&dir)
        };
        write(&cfg.source.join("a.fjs"), "ƒ one 1".as_bytes());

        build(&cfg).unwrap();

        assert_eq!(
            fs::read_to_string(cfg.distro.join("a.js")).unwrap(),
            "let one = () => 1;"
        );
    }

    #[test]
    fn clean_removes_stale_output() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir);
        write(&cfg.source.join("a.js"), b"1");
        write(&cfg.distro.join("stale.js"), b"old");

        build(&cfg).unwrap();
        assert!(!cfg.distro.join("stale.js").exists());

        write(&cfg.distro.join("stale.js"), b"old");
        build(&BuildConfig {
            clean: false,
            ..cfg.clone()
        })
        .unwrap();
        assert!(cfg.distro.join("stale.js").exists());
    }

    #[test]
    fn reports_unrewritten_shorthand() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir);
        write(&cfg.source.join("broken.fjs"), "ok()\nƒ f(a, b".as_bytes());

        let report = build(&cfg).unwrap();

        assert_eq!(report.unrewritten.len(), 1);
        assert_eq!(report.unrewritten[0].site.line, 2);
        assert_eq!(report.unrewritten[0].path, cfg.distro.join("broken.js"));
        assert!(!report.is_clean());
    }

    #[test]
    fn output_equal_to_source_is_rejected() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src");
        write(&source.join("app.fjs"), "ƒ one 1".as_bytes());
        let cfg = BuildConfig {
            source: source.clone(),
            distro: source.clone(),
            ..BuildConfig::default()
        };

        let err = build(&cfg).unwrap_err();

        assert!(err.to_string().contains("inside source"), "{err}");
        assert!(source.join("app.fjs").is_file());
    }

    #[test]
    fn output_nested_in_source_is_rejected() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src");
        write(&source.join("app.fjs"), "ƒ one 1".as_bytes());
        let cfg = BuildConfig {
            source: source.clone(),
            distro: source.join("out/js"),
            ..BuildConfig::default()
        };

        assert!(build(&cfg).is_err());
        assert!(!source.join("out").exists());
    }

    #[test]
    fn cleaning_a_parent_of_source_is_rejected() {
        let dir = TempDir::new().unwrap();
        let distro = dir.path().join("site");
        let source = distro.join("src");
        write(&source.join("app.fjs"), "ƒ one 1".as_bytes());
        let cfg = BuildConfig {
            source: source.clone(),
            distro,
            ..BuildConfig::default()
        };

        let err = build(&cfg).unwrap_err();

        assert!(err.to_string().contains("would delete"), "{err}");
        assert!(source.join("app.fjs").is_file());
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = build(&config_in(&dir)).unwrap_err();
        assert!(err.to_string().contains("does not exist"), "{err}");
    }
}
