//! # CLI Argument Definitions
//!
//! Command-line interface of the asset toolkit, declared with `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Bike Manager PWA assets")]
pub struct Cli {
    /// TOML configuration file (environment overrides use the `BIKEMGR__` prefix)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the single-file consolidation checklist
    Consolidate {
        /// Markup files to scan for Tailwind classes
        #[arg(long, value_name = "FILE", num_args = 1..)]
        scan: Vec<PathBuf>,
    },
    /// Generate the 192px and 512px PWA icons
    Icons {},
}
