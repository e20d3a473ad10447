//! # Inout - weekly shift time summaries
//!
//! A command-line utility for reviewing recorded shifts and tracking weekly
//! progress against the working-hours target.
//!
//! ## Features
//!
//! - **Weekly Summary**: Actual vs. target minutes, clamped progress and signed variance
//! - **Shift History**: Tabular listing of recorded clock-in/clock-out entries
//! - **Pluggable Data Sources**: Built-in sample history or a JSON file of entries
//! - **Data Export**: Export history or summary to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inout::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod data;
pub mod libs;
