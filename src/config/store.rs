// file: src/config/store.rs
// version: 1.0.0
// guid: 7b3d9e62-1a4f-4c08-b5e7-3c9a0f6d2e81

//! YAML-backed persistence for the configuration record

use super::ConfigRecord;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name used when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Loads and saves the configuration record at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, or an empty one when the file does not exist yet
    pub fn load(&self) -> Result<ConfigRecord> {
        if !self.path.exists() {
            debug!("No config at {}, starting empty", self.path.display());
            return Ok(ConfigRecord::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            crate::error::BundlerError::ConfigError(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(ConfigRecord::default());
        }

        let record: ConfigRecord = serde_yaml::from_str(&content)?;
        Ok(record)
    }

    /// Overwrite the file with the given record
    pub fn save(&self, record: &ConfigRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(record)?;
        fs::write(&self.path, content).map_err(|e| {
            crate::error::BundlerError::ConfigError(format!(
                "Failed to write config file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        // The record carries AWS secrets
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
