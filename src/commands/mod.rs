pub mod export;
pub mod history;
pub mod init;
pub mod sum;

use crate::data;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::shift::ShiftEntry;
use crate::msg_debug;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Weekly hours against the target")]
    Sum(sum::SumArgs),
    #[command(about = "Recorded shift history")]
    History,
    #[command(about = "Export shift history or the weekly summary")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::History => history::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Loads the current shift entries from the configured data source.
pub(crate) fn load_entries() -> Result<Vec<ShiftEntry>> {
    load_entries_from(&Config::path()?)
}

/// Loads shift entries using the configuration stored at `config_path`.
///
/// A missing configuration selects the built-in history. A configuration
/// that exists but cannot be read is an error.
pub fn load_entries_from(config_path: &Path) -> Result<Vec<ShiftEntry>> {
    let config = Config::read_from(config_path)
        .with_context(|| Message::ConfigReadFailed(config_path.display().to_string()).to_string())?;

    match &config.data {
        Some(data) => msg_debug!(Message::DataSourceFile(data.entries_file.display().to_string())),
        None => msg_debug!(Message::DataSourceSample),
    }

    let entries = data::provider(&config)
        .fetch_entries()
        .with_context(|| Message::EntriesLoadFailed.to_string())?;
    msg_debug!(format!("Loaded {} shift entries", entries.len()));

    Ok(entries)
}
