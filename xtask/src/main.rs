//! Workspace tasks: `cargo run -p veneer-xtask -- <command>`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use veneer::options::Options;

#[derive(Parser)]
#[command(about = "Build tasks for the veneer workspace")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the options JSON Schema.
    Schema {
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the default options as a TOML preset.
    Preset {
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Parse a TOML preset and report the effective options.
    Check {
        /// Preset to validate.
        path: PathBuf,
    },
}

fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            emit(&schema, out.as_deref())
        }
        Command::Preset { out } => {
            let preset = Options::default().to_toml_string()?;
            emit(&preset, out.as_deref())
        }
        Command::Check { path } => {
            let options = Options::load(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            println!(
                "{}: ok ({} placeholder(s), {}ms load, {}ms stagger)",
                path.display(),
                options.skeleton.placeholder_count,
                options.skeleton.simulated_load_ms,
                options.entrance.stagger_ms,
            );
            Ok(())
        }
    }
}
