//! Data export command.
//!
//! Writes the current shift history or the weekly summary computed from it
//! to CSV or JSON.

use super::load_entries;
use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Data set to export
    #[arg(value_enum, default_value = "history")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `inout_export_<timestamp>.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let entries = load_entries()?;
    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(args.data, &entries)?;

    msg_success!(Message::ExportSuccess(path.display().to_string()));
    Ok(())
}
