//! Core library modules for the inout application.
//!
//! ## Features
//!
//! - **Duration Handling**: Parsing and formatting of `"<H>h <MM>m"` labels
//! - **Weekly Summary**: Actual vs. target worked time, progress and variance
//! - **Core Infrastructure**: Configuration, data storage, messaging, logging
//! - **User Interface**: Console tables and data export
//!
//! ## Usage
//!
//! ```rust
//! use inout::data::{sample::SampleEntries, EntryProvider};
//! use inout::libs::summary::compute_weekly_summary;
//!
//! let entries = SampleEntries.fetch_entries().unwrap();
//! let summary = compute_weekly_summary(&entries);
//! assert_eq!(summary.formatted_actual, "29h 41m");
//! ```

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod logger;
pub mod messages;
pub mod shift;
pub mod summary;
pub mod view;
