#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::disallowed_methods,
    clippy::disallowed_types
)]

pub mod handlers;
pub mod models;

use crate::handlers::{consolidate, icons};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context, Result};
use bikemgr_assets::config::{AssetsConfig, load_config};
use bikemgr_logger::{LevelFilter, Logger};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).init()?;

    let config: AssetsConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    match cli.command {
        AppCommands::Consolidate { scan } => consolidate::consolidate(&scan)?,
        AppCommands::Icons {} => icons::generate_icons(&config.icons)?,
    }

    Ok(())
}
