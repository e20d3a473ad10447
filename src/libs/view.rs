use super::shift::ShiftEntry;
use super::summary::WeeklySummary;
use anyhow::Result;
use prettytable::{row, Table};

const PROGRESS_BAR_WIDTH: usize = 20;

pub struct View {}

impl View {
    /// Target, actual and variance for the week, with a progress bar.
    pub fn summary(summary: &WeeklySummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TARGET", "ACTUAL", "VARIANCE", "PROGRESS"]);
        table.add_row(row![
            summary.formatted_target,
            summary.formatted_actual,
            summary.variance_label(),
            format!("{} {}%", Self::progress_bar(summary.progress_percent), summary.progress_percent)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn history(entries: &[ShiftEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "IN", "OUT", "TOTAL", "LOCATION", "STATUS"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.date,
                entry.check_in,
                entry.check_out,
                entry.total,
                entry.location,
                entry.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders `percent` (0–100) as a fixed-width bar.
    pub fn progress_bar(percent: u8) -> String {
        let filled = usize::from(percent.min(100)) * PROGRESS_BAR_WIDTH / 100;
        format!("[{}{}]", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled))
    }
}
