use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fthis_build::{build, BuildConfig};
use fthis_check::check_output;
use fthis_rewrite::{rewrite, DeclarationKeyword, RewriteOptions};

mod tracing_config;

#[derive(Parser)]
#[command(name = "fthis", about = "F-this: ƒ function shorthand for JavaScript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite one file to standard JavaScript.
    Rewrite {
        /// Input .fjs file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keyword for named shorthand declarations: var, let or const.
        #[arg(long, default_value_t = DeclarationKeyword::Var)]
        decl: DeclarationKeyword,
    },
    /// Rewrite every .fjs file under a source tree and copy everything else.
    Build {
        /// JSON config file (`source`, `distro`, `declarationKeyword`, `clean`).
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        source: Option<PathBuf>,
        #[arg(long)]
        distro: Option<PathBuf>,
        /// Overrides `declarationKeyword` from the config: var, let or const.
        #[arg(long)]
        decl: Option<DeclarationKeyword>,
        /// Keep existing files in the output directory.
        #[arg(long)]
        no_clean: bool,
        /// Print the build report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a file and verify the result: no ƒ left, valid JavaScript.
    Check {
        input: PathBuf,
        #[arg(long, default_value_t = DeclarationKeyword::Var)]
        decl: DeclarationKeyword,
    },
}

fn main() -> Result<()> {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rewrite {
            input,
            output,
            decl,
        } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            tracing::debug!(input = %input.display(), keyword = ?decl, "rewriting");
            let js = rewrite(&source, &RewriteOptions::with_keyword(decl));

            match &output {
                Some(path) => std::fs::write(path, &js)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{js}"),
            }
        }
        Commands::Build {
            config,
            source,
            distro,
            decl,
            no_clean,
            json,
        } => {
            let mut cfg = match &config {
                Some(path) => BuildConfig::load(path)?,
                None => BuildConfig::default(),
            };
            if let Some(source) = source {
                cfg.source = source;
            }
            if let Some(distro) = distro {
                cfg.distro = distro;
            }
            if let Some(decl) = decl {
                cfg.declaration_keyword = decl;
            }
            if no_clean {
                cfg.clean = false;
            }

            let report = build(&cfg)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                eprintln!(
                    "Built {} → {}: {} rewritten, {} copied.",
                    cfg.source.display(),
                    cfg.distro.display(),
                    report.transformed.len(),
                    report.copied.len()
                );
                for left in &report.unrewritten {
                    eprintln!(
                        "warning: {}:{}:{}: ƒ shorthand was not rewritten",
                        left.path.display(),
                        left.site.line,
                        left.site.column
                    );
                }
            }
        }
        Commands::Check { input, decl } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let filename = input.display().to_string();
            let js = rewrite(&source, &RewriteOptions::with_keyword(decl));

            if let Err(e) = check_output(&js, &filename) {
                bail!("check failed: {e}");
            }
            eprintln!("OK: {filename}");
        }
    }

    Ok(())
}
