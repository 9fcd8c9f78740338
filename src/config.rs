//! Configuration module
//!
//! Reads `~/.config/agro-report/config.toml`. Every section is optional;
//! a missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::support::{AppError, DomainError, InfraError};

/// Default number of rows shown per page in list views
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
    pub api: ApiConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format: "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// List view pagination defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub items_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.items_per_page == 0 {
            return Err(DomainError::InvalidConfiguration(
                "pagination.items_per_page must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Mock data-access layer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Artificial delay applied to every mock API call, in milliseconds
    pub simulated_latency_ms: u64,
}

impl AppConfig {
    /// Load configuration from a TOML file. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(InfraError::from)?;
        let config: AppConfig = toml::from_str(&raw).map_err(InfraError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as TOML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        let raw = toml::to_string_pretty(self).map_err(InfraError::from)?;
        fs::write(path, raw).map_err(InfraError::from)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.pagination.validate()
    }
}

/// `<config dir>/agro-report/config.toml`, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agro-report")
        .join("config.toml")
}
