//! Sources of recorded shift entries.
//!
//! The summary calculation never reads data itself; commands ask an
//! [`EntryProvider`] for the current entries and hand them to the aggregator.
//! The provider is chosen from configuration: a JSON file when
//! `data.entries_file` is set, the built-in sample dataset otherwise.

pub mod json_file;
pub mod sample;

use crate::libs::config::Config;
use crate::libs::shift::ShiftEntry;
use json_file::JsonFileEntries;
use sample::SampleEntries;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading shift entries.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read shift entries from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse shift entries in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can supply the current list of shift entries.
pub trait EntryProvider {
    fn fetch_entries(&self) -> Result<Vec<ShiftEntry>, DataError>;
}

/// Selects the entry provider described by `config`.
pub fn provider(config: &Config) -> Box<dyn EntryProvider> {
    match &config.data {
        Some(data) => Box::new(JsonFileEntries::new(data.entries_file.clone())),
        None => Box::new(SampleEntries),
    }
}
