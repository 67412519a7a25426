//! CLI argument parsing and command definitions.

use clap::{Args, Parser, Subcommand};
use refsheet_content::ParseOptions;
use std::path::PathBuf;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments for the refsheet binary.
#[derive(Parser, Debug)]
#[command(name = "refsheet")]
#[command(version, about = "Parse structured cheatsheet markdown into JSON", long_about = None)]
pub struct CliArgs {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a single markdown file and write its JSON document.
    Single {
        /// Input markdown file.
        file: PathBuf,

        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        format: FormatFlags,
    },

    /// Parse every file matching a glob pattern.
    Batch {
        /// Glob pattern, e.g. "content/*.md".
        pattern: String,

        /// Directory receiving one JSON file per input.
        #[arg(short = 'd', long, default_value = ".")]
        output_dir: PathBuf,

        #[command(flatten)]
        format: FormatFlags,
    },
}

/// Formatting flags shared by both subcommands.
#[derive(Args, Debug)]
pub struct FormatFlags {
    /// Pretty-print JSON with 2-space indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Leave front-matter metadata out of the output.
    #[arg(long)]
    pub no_metadata: bool,

    /// Store bare code text instead of fenced code blocks.
    #[arg(long)]
    pub no_code_blocks: bool,

    /// Drop span-config layout hints from cards.
    #[arg(long)]
    pub no_span_config: bool,
}

impl FormatFlags {
    /// Translate the `--no-*` flags into parser options.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_include_metadata(!self.no_metadata)
            .with_preserve_code_blocks(!self.no_code_blocks)
            .with_include_span_config(!self.no_span_config)
    }

    /// JSON indentation implied by `--pretty`.
    pub fn indent(&self) -> usize {
        if self.pretty { 2 } else { 0 }
    }
}

// ============================================================================
// Tests
// ============================================================================
