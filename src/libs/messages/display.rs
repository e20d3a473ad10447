//! Display implementation for inout application messages.
//!
//! Every user-facing string lives here, so the wording of the dashboard,
//! history and configuration output can be reviewed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigReadFailed(path) => format!("Failed to read config at {}", path),
            Message::ConfigModuleData => "Shift data settings".to_string(),

            // === DATA SOURCE MESSAGES ===
            Message::DataSourceSample => "Using built-in sample shift history".to_string(),
            Message::DataSourceFile(path) => format!("Using shift history from {}", path),
            Message::EntriesLoadFailed => "Failed to load shift entries".to_string(),
            Message::NoShiftEntries => "No shift entries recorded".to_string(),

            // === SUMMARY MESSAGES ===
            Message::WeeklySummaryHeader(date) => format!("Weekly hours as of {}", date),
            Message::ProgressCompleted { progress, variance } => {
                format!("{}% completed · {} vs plan", progress, variance)
            }
            Message::HistoryHeader => "Shift history".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported successfully to: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptEntriesFile => "Path to shift entries JSON file".to_string(),
        };
        write!(f, "{}", text)
    }
}
