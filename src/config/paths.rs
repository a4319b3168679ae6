//! Path resolution for minop configuration and data files.
//!
//! By default everything lives next to the `minop` executable:
//! - `minop.db` - SQLite database with host groups and hosts
//! - `config.yaml` - Optional configuration file

use std::path::{Path, PathBuf};

use crate::error::MinopError;

/// Database file name.
pub const DATABASE_FILE: &str = "minop.db";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.yaml";

/// Paths to minop configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: the directory containing the executable.
    pub root: PathBuf,
    /// Config file: `<root>/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `<root>/minop.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the location of the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn new() -> Result<Self, MinopError> {
        let exe = std::env::current_exe().map_err(|e| {
            MinopError::Config(format!("Could not determine executable path: {e}"))
        })?;

        let root = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            MinopError::Config(format!("Executable {} has no parent directory", exe.display()))
        })?;

        Ok(Self::with_root(root))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join(CONFIG_FILE),
            database: root.join(DATABASE_FILE),
            root,
        }
    }

    /// Ensure the directory holding `file` exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_parent(file: &Path) -> Result<(), MinopError> {
        let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return Ok(());
        };

        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                MinopError::Config(format!("Failed to create directory {}: {e}", dir.display()))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            log::warn!("{e}; using the working directory");
            Self::with_root(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
        })
    }
}
