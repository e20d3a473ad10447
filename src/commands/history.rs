use super::load_entries;
use crate::{
    libs::{messages::Message, summary::SummaryCalculator, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let entries = load_entries()?;

    if entries.is_empty() {
        msg_info!(Message::NoShiftEntries);
        return Ok(());
    }

    msg_print!(Message::HistoryHeader, true);
    View::history(&entries)?;

    let summary = entries.weekly_summary();
    println!();
    View::summary(&summary)?;
    msg_print!(Message::ProgressCompleted {
        progress: summary.progress_percent,
        variance: summary.variance_label(),
    });

    Ok(())
}
