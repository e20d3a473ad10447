//! Weekly summary of worked time against the weekly target.
//!
//! The summary is recomputed from the current shift entries on every read and
//! is never stored. Both the dashboard and the history view render the same
//! [`WeeklySummary`], so their numbers always agree.
//!
//! ## Calculation
//!
//! ```text
//! actual   = Σ parse_duration(entry.total)
//! variance = actual - target
//! progress = clamp(round(actual / target * 100), 0, 100)
//! ```
//!
//! Progress is clamped rather than scaled: a week far above target still
//! reports 100. Variance is never clamped.

use crate::libs::duration::{format_duration, format_variance};
use crate::libs::shift::ShiftEntry;
use serde::Serialize;

/// Weekly working-hours target in minutes (40 hours).
pub const WEEKLY_TARGET_MINUTES: i64 = 40 * 60;

/// Actual versus target worked time for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub actual_minutes: i64,
    pub target_minutes: i64,
    /// `actual_minutes - target_minutes`; negative when behind plan.
    pub variance_minutes: i64,
    /// Completion ratio in `[0, 100]`.
    pub progress_percent: u8,
    pub formatted_actual: String,
    pub formatted_target: String,
}

impl WeeklySummary {
    fn from_actual(actual_minutes: i64) -> Self {
        let target_minutes = WEEKLY_TARGET_MINUTES;
        let ratio = actual_minutes as f64 / target_minutes as f64;
        let progress_percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;

        WeeklySummary {
            actual_minutes,
            target_minutes,
            variance_minutes: actual_minutes.saturating_sub(target_minutes),
            progress_percent,
            formatted_actual: format_duration(actual_minutes),
            formatted_target: format_duration(target_minutes),
        }
    }

    /// Variance as shown next to the plan, e.g. `+1h 15m` or `-10h 19m`.
    pub fn variance_label(&self) -> String {
        format_variance(self.variance_minutes)
    }
}

/// Folds shift entries into a [`WeeklySummary`].
///
/// Order of `entries` does not affect the result. Entries whose duration label
/// cannot be read contribute zero minutes.
///
/// ```rust
/// use inout::libs::shift::ShiftEntry;
/// use inout::libs::summary::compute_weekly_summary;
///
/// let entries = vec![ShiftEntry::new("E-1", "Mon", "08:00", "16:30", "8h 30m", "Gate", "Validated")];
/// let summary = compute_weekly_summary(&entries);
/// assert_eq!(summary.actual_minutes, 510);
/// assert_eq!(summary.progress_percent, 21);
/// assert_eq!(summary.variance_label(), "-31h 30m");
/// ```
pub fn compute_weekly_summary(entries: &[ShiftEntry]) -> WeeklySummary {
    let actual_minutes = entries.iter().fold(0i64, |acc, entry| acc.saturating_add(entry.minutes()));
    WeeklySummary::from_actual(actual_minutes)
}

pub trait SummaryCalculator {
    fn weekly_summary(&self) -> WeeklySummary;
}

impl SummaryCalculator for [ShiftEntry] {
    fn weekly_summary(&self) -> WeeklySummary {
        compute_weekly_summary(self)
    }
}
