use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "inout360";
pub const APP_NAME: &str = "inout";

/// Platform application data directory for inout files.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        Self::at(Path::new(&base_path))
    }

    /// Data directory for inout under an explicit `root`.
    ///
    /// ```rust
    /// use inout::libs::data_storage::DataStorage;
    /// use std::path::Path;
    ///
    /// let storage = DataStorage::at(Path::new("/srv/data"));
    /// assert_eq!(storage.base_path(), Path::new("/srv/data/inout360/inout"));
    /// ```
    pub fn at(root: &Path) -> Self {
        Self {
            base_path: root.join(VENDOR_NAME).join(APP_NAME),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of `file_name` inside the data directory, creating the
    /// directory on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
