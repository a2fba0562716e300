use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// strftime pattern for the booking date (en-US short date by default).
    #[serde(default = "default_booking_date_format")]
    pub booking_date_format: String,
    #[serde(default = "default_image")]
    pub default_image: String,
}

/// Keys a complete config file carries; used by `config --check`.
pub const CONFIG_KEYS: [&str; 4] = [
    "database",
    "page_size",
    "booking_date_format",
    "default_image",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_booking_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}
fn default_image() -> String {
    "/placeholder.png".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            page_size: default_page_size(),
            booking_date_format: default_booking_date_format(),
            default_image: default_image(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.eventbuddy`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eventbuddy")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eventbuddy.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("eventbuddy.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Keys absent from a config file; their defaults apply at load time.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value.as_mapping();

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| map.is_none_or(|m| !m.contains_key(*k)))
            .collect())
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the resulting configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let database = match custom_db {
            Some(path) => expand_tilde(path),
            None => Self::database_file(),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if let Some(parent) = database.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}
