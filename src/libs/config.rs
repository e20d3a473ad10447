//! Configuration management for the inout application.
//!
//! The configuration decides where shift entries come from. Without any
//! configuration the built-in sample history is used; setting the data module
//! points the application at a JSON file of entries instead. The weekly target
//! is fixed and is deliberately not configurable.
//!
//! ## Storage
//!
//! Configuration is stored as pretty-printed JSON in the platform data
//! directory:
//! - **Windows**: `%LOCALAPPDATA%\inout360\inout\config.json`
//! - **macOS**: `~/Library/Application Support/inout360/inout/config.json`
//! - **Linux**: `~/.local/share/inout360/inout/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use inout::libs::config::{Config, DataConfig};
//! use std::path::PathBuf;
//!
//! let mut config = Config::read()?;
//! config.data = Some(DataConfig {
//!     entries_file: PathBuf::from("shifts.json"),
//! });
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Shift data source settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DataConfig {
    /// JSON file holding an array of shift entries.
    pub entries_file: PathBuf,
}

impl DataConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "data".to_string(),
            name: Message::ConfigModuleData.to_string(),
        }
    }
}

/// Main configuration container.
///
/// Every module is optional and omitted from the JSON file when unset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Shift data source; the built-in sample history is used when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataConfig>,
}

impl Config {
    /// Location of the configuration file in the platform data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the configuration from the platform data directory.
    ///
    /// A missing file is not an error and yields `Config::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Reads the configuration from an explicit path.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the platform data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Saves the configuration as pretty-printed JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file at `path`.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults. The returned configuration is
    /// not saved; call [`Config::save`] on it.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = [DataConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "data" => {
                    let default = config
                        .data
                        .as_ref()
                        .map(|data| data.entries_file.display().to_string())
                        .unwrap_or_default();
                    msg_print!(Message::ConfigModuleData);
                    let entries_file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptEntriesFile.to_string())
                        .default(default)
                        .interact_text()?;
                    config.data = Some(DataConfig {
                        entries_file: PathBuf::from(entries_file),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
