//! Configuration file management.
//!
//! Handles loading and saving the TOML configuration: mode durations,
//! the mocked credential pair and the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, DurationTable, Result};

/// Default configuration file content.
const DEFAULT_CONFIG: &str = r#"# focustime configuration
# Auto-generated - edit as needed

[durations]
# Mode durations in whole minutes (must be positive)
pomodoro_minutes = 25
short_break_minutes = 5
long_break_minutes = 15

[auth]
# Mocked login credentials - this is a demo login, not real authentication
username = "admin"
password = "password"

[paths]
# Custom data directory (optional, defaults to ~/.focustime)
# data_dir = "/custom/path"
"#;

/// Mode durations in whole minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationsConfig {
    #[serde(default = "default_pomodoro_minutes")]
    pub pomodoro_minutes: u32,

    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,

    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            pomodoro_minutes: default_pomodoro_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
        }
    }
}

const fn default_pomodoro_minutes() -> u32 {
    crate::domain::models::DEFAULT_POMODORO_MINUTES
}

const fn default_short_break_minutes() -> u32 {
    crate::domain::models::DEFAULT_SHORT_BREAK_MINUTES
}

const fn default_long_break_minutes() -> u32 {
    crate::domain::models::DEFAULT_LONG_BREAK_MINUTES
}

/// Credential pair for the mocked login check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub durations: DurationsConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

impl AppConfig {
    /// Get the data directory, using default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".focustime")
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.data_dir().join("config.toml")
    }

    /// Get the login record path.
    #[must_use]
    pub fn session_file_path(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Build the validated duration table from the configured minutes.
    ///
    /// # Errors
    /// Returns a validation error if a configured value is zero.
    pub fn duration_table(&self) -> Result<DurationTable> {
        DurationTable::from_minutes(
            self.durations.pomodoro_minutes,
            self.durations.short_break_minutes,
            self.durations.long_break_minutes,
        )
        .map_err(|e| AppError::Config {
            message: format!("bad [durations] in config: {e}"),
        })
    }
}

/// Load configuration from file or create default.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppConfig> {
    let config_path = AppConfig::default_data_dir().join("config.toml");

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Save configuration to file.
///
/// # Errors
/// Returns error if file cannot be written.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let config_path = config.config_file_path();

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| AppError::Config {
        message: format!("Failed to serialize config: {e}"),
    })?;

    fs::write(&config_path, content).map_err(|e| {
        AppError::io(
            format!("Failed to write config file: {}", config_path.display()),
            e,
        )
    })?;

    tracing::info!(path = %config_path.display(), "Configuration saved");

    Ok(())
}

/// Create default configuration file if it doesn't exist.
///
/// # Errors
/// Returns error if file cannot be created.
pub fn ensure_config_exists() -> Result<()> {
    let config_path = AppConfig::default_data_dir().join("config.toml");

    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create config directory", e))?;
        }

        fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| AppError::io("Failed to create default config", e))?;

        tracing::info!(path = %config_path.display(), "Created default configuration");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.durations.pomodoro_minutes, 25);
        assert_eq!(config.durations.short_break_minutes, 5);
        assert_eq!(config.durations.long_break_minutes, 15);
        assert_eq!(config.auth.username, "admin");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.durations.pomodoro_minutes, 25);
        assert_eq!(config.auth.password, "password");
        assert!(config.paths.data_dir.is_none());
    }

    #[test]
    fn test_duration_table_validated() {
        let config: AppConfig = toml::from_str("[durations]\npomodoro_minutes = 0\n").unwrap();
        assert!(config.duration_table().is_err());

        let table = AppConfig::default().duration_table().unwrap();
        assert_eq!(table.secs_for(Mode::Pomodoro), 25 * 60);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.durations.pomodoro_minutes = 50;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_path, content).unwrap();

        let loaded = load_config_from_file(&config_path).unwrap();
        assert_eq!(loaded.durations.pomodoro_minutes, 50);
        assert_eq!(loaded.durations.short_break_minutes, 5);
    }
}
