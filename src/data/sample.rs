//! Built-in shift history used when no data file is configured.

use super::{DataError, EntryProvider};
use crate::libs::shift::ShiftEntry;

pub struct SampleEntries;

impl SampleEntries {
    pub fn entries() -> Vec<ShiftEntry> {
        vec![
            ShiftEntry::new("E-9845", "Mon, 23 Dec", "07:58", "16:32", "8h 34m", "North Gate", "Validated"),
            ShiftEntry::new("E-9844", "Sun, 22 Dec", "09:02", "13:15", "4h 13m", "Mobile app", "Correction"),
            ShiftEntry::new("E-9843", "Sat, 21 Dec", "07:50", "15:58", "8h 08m", "South Gate", "Validated"),
            ShiftEntry::new("E-9842", "Fri, 20 Dec", "07:55", "16:41", "8h 46m", "North Gate", "Validated"),
        ]
    }
}

impl EntryProvider for SampleEntries {
    fn fetch_entries(&self) -> Result<Vec<ShiftEntry>, DataError> {
        Ok(Self::entries())
    }
}
