//! Write a lean ASCII tree of the current directory to a text file.
//!
//! Build output, dependency caches, binary assets and hidden files are left
//! out, so the result is small enough to paste into docs or a prompt.

mod config;
mod core;
mod error;
mod render;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::config::{RenderOptions, SkipRules, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Generate a lean project structure tree"
)]
struct Cli {
    /// Add a description header wrapped in `**`.
    #[arg(long)]
    title: Option<String>,

    /// Maximum directory depth to display.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, allow_negative_numbers = true)]
    max_depth: i64,

    /// Output file name.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Cli> for RenderOptions {
    fn from(cli: Cli) -> Self {
        Self {
            title: cli.title,
            max_depth: cli.max_depth,
            output: cli.output,
        }
    }
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout carries the report
        .init();

    let opts = RenderOptions::from(Cli::parse());
    let rules = SkipRules::default();

    // Walk relative to the working directory so only segments below it can
    // match a skipped directory name.
    let report = render::render(Path::new("."), &rules, &opts)?;

    println!("✓ Lean structure saved to {}", report.output.display());
    println!("Total lines: {}", report.line_count);
    Ok(())
}
