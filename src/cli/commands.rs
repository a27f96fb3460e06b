use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::splitter::{DEFAULT_PARTS, SplitOptions, SplitReport, split_archive};
use crate::utils::{LogConfig, format_path_with_tilde, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "chat-export-splitter")]
#[command(version)]
#[command(
    about = "Split a conversation export archive into evenly sized text files",
    long_about = None
)]
pub struct Cli {
    /// Path to the export archive (e.g. conversations.json)
    pub archive: PathBuf,

    /// Number of part files to write
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PARTS, value_parser = parse_parts)]
    pub parts: usize,

    /// Skip text messages without an author role instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions { parts: self.parts, skip_malformed: self.skip_malformed }
    }
}

fn parse_parts(value: &str) -> std::result::Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("`--parts` expects a positive integer, got '{}'", value)),
        Ok(n) => Ok(n),
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(LogConfig { debug: cli.debug })?;

    let report = split_archive(&cli.archive, &cli.split_options())
        .with_context(|| format!("Failed to split {}", cli.archive.display()))?;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &SplitReport) {
    if report.is_empty() {
        println!("No textual messages found - nothing to split.");
        return;
    }

    println!(
        "✅ Split {} messages into {} parts in {}",
        report.messages,
        report.parts,
        format_path_with_tilde(&report.output_dir)
    );
}
