//! Data export of shift history and weekly summaries.
//!
//! ## Supported Formats
//!
//! - **CSV**: One header row followed by data rows, for spreadsheet tools
//! - **JSON**: Pretty-printed structured data
//!
//! History exported as JSON uses the same camelCase shape the JSON file data
//! source reads, so an export can be configured as a data file directly.

use crate::libs::shift::ShiftEntry;
use crate::libs::summary::{compute_weekly_summary, WeeklySummary};
use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output format for exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which data set to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportData {
    /// Every shift entry as supplied by the data source
    History,
    /// The weekly summary computed from those entries
    Summary,
}

/// Weekly summary with the display strings used on the dashboard.
#[derive(Debug, Serialize)]
pub struct ExportSummary {
    #[serde(flatten)]
    pub summary: WeeklySummary,
    pub variance_label: String,
}

impl From<WeeklySummary> for ExportSummary {
    fn from(summary: WeeklySummary) -> Self {
        let variance_label = summary.variance_label();
        ExportSummary { summary, variance_label }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `inout_export_<YYYYMMDD_HHMMSS>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "inout_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `data` derived from `entries` and returns the written path.
    pub fn export(&self, data: ExportData, entries: &[ShiftEntry]) -> Result<&Path> {
        match (data, self.format) {
            (ExportData::History, ExportFormat::Csv) => self.export_history_csv(entries)?,
            (ExportData::History, ExportFormat::Json) => self.write_json(entries)?,
            (ExportData::Summary, ExportFormat::Csv) => self.export_summary_csv(&compute_weekly_summary(entries))?,
            (ExportData::Summary, ExportFormat::Json) => {
                self.write_json(&ExportSummary::from(compute_weekly_summary(entries)))?
            }
        }
        Ok(&self.output_path)
    }

    fn export_history_csv(&self, entries: &[ShiftEntry]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Date", "Check In", "Check Out", "Total", "Minutes", "Location", "Status"])?;

        for entry in entries {
            wtr.write_record([
                entry.id.as_str(),
                entry.date.as_str(),
                entry.check_in.as_str(),
                entry.check_out.as_str(),
                entry.total.as_str(),
                entry.minutes().to_string().as_str(),
                entry.location.as_str(),
                entry.status.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_summary_csv(&self, summary: &WeeklySummary) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Metric", "Minutes", "Display"])?;
        let rows = [
            ("Target", summary.target_minutes.to_string(), summary.formatted_target.clone()),
            ("Actual", summary.actual_minutes.to_string(), summary.formatted_actual.clone()),
            ("Variance", summary.variance_minutes.to_string(), summary.variance_label()),
            ("Progress", summary.progress_percent.to_string(), format!("{}%", summary.progress_percent)),
        ];
        for (metric, minutes, display) in &rows {
            wtr.write_record([*metric, minutes.as_str(), display.as_str()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.output_path, json)?;
        Ok(())
    }
}
