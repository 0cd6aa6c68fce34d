//! Configuration handling

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Store file used when no platform data directory is available
const FALLBACK_STORE_FILE: &str = "formsmith-store.json";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsmithConfig {
    /// Path of the JSON store holding forms
    pub data_file: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset (e.g. "formsmith=debug")
    pub log_filter: Option<String>,
}

impl FormsmithConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "formsmith", "formsmith")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormsmithConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Overwrite the given settings; returns whether anything changed
    pub fn apply(&mut self, data_file: Option<PathBuf>, log_filter: Option<String>) -> bool {
        let mut changed = false;
        if let Some(path) = data_file {
            changed |= self.data_file.as_ref() != Some(&path);
            self.data_file = Some(path);
        }
        if let Some(filter) = log_filter {
            changed |= self.log_filter.as_ref() != Some(&filter);
            self.log_filter = Some(filter);
        }
        changed
    }

    /// Resolve the store file: explicit override, then config, then the
    /// platform data directory, then the working directory
    pub fn data_file(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("store.json"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_FILE))
    }

    /// Log filter directive, falling back to `formsmith=info`
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("formsmith=info")
    }
}
