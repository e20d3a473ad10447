//! Recorded shift entries as supplied by a data source.

use crate::libs::duration::parse_duration;
use serde::{Deserialize, Serialize};

/// One completed clock-in/clock-out record.
///
/// All fields are display labels exactly as the data source supplied them.
/// Field names serialize in camelCase (`checkIn`, `checkOut`) so existing
/// shift-history JSON files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    /// Record identifier, e.g. `E-9845`.
    pub id: String,
    /// Date label, e.g. `Mon, 23 Dec`.
    pub date: String,
    /// Clock-in time as `HH:MM`.
    pub check_in: String,
    /// Clock-out time as `HH:MM`.
    pub check_out: String,
    /// Worked time label as `<H>h <MM>m`.
    pub total: String,
    pub location: String,
    /// Open set of labels such as `Validated` or `Correction`.
    pub status: String,
}

impl ShiftEntry {
    pub fn new(id: &str, date: &str, check_in: &str, check_out: &str, total: &str, location: &str, status: &str) -> Self {
        ShiftEntry {
            id: id.to_string(),
            date: date.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            total: total.to_string(),
            location: location.to_string(),
            status: status.to_string(),
        }
    }

    /// Worked minutes for this shift; a malformed `total` counts as zero.
    pub fn minutes(&self) -> i64 {
        parse_duration(&self.total)
    }
}
