use super::load_entries;
use crate::{
    libs::{messages::Message, summary::compute_weekly_summary, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, help = "Print the summary as JSON")]
    json: bool,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let summary = compute_weekly_summary(&load_entries()?);

    if sum_args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let now = Local::now();
    msg_print!(Message::WeeklySummaryHeader(now.format("%B %-d, %Y").to_string()), true);
    View::summary(&summary)?;
    msg_print!(Message::ProgressCompleted {
        progress: summary.progress_percent,
        variance: summary.variance_label(),
    });

    Ok(())
}
