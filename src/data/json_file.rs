//! Shift entries loaded from a JSON file.
//!
//! The file holds a JSON array of entries in camelCase form:
//!
//! ```json
//! [
//!   {
//!     "id": "E-9845",
//!     "date": "Mon, 23 Dec",
//!     "checkIn": "07:58",
//!     "checkOut": "16:32",
//!     "total": "8h 34m",
//!     "location": "North Gate",
//!     "status": "Validated"
//!   }
//! ]
//! ```

use super::{DataError, EntryProvider};
use crate::libs::shift::ShiftEntry;
use crate::msg_debug;
use std::fs;
use std::path::PathBuf;

pub struct JsonFileEntries {
    path: PathBuf,
}

impl JsonFileEntries {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl EntryProvider for JsonFileEntries {
    fn fetch_entries(&self) -> Result<Vec<ShiftEntry>, DataError> {
        msg_debug!(format!("Loading shift entries from {}", self.path.display()));

        let content = fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
