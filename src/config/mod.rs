//! Configuration management for minop.
//!
//! This module resolves where the database and `config.yaml` live and loads
//! settings from the latter.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DatabaseConfig, GeneralConfig};
