use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Base URL of the store API baked in at build time.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://fakestoreapi.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Local persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the database and preference files.
    /// Falls back to the platform data directory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// SQLite file name inside `data_dir` (default: "storefront.db").
    #[serde(default = "default_database_file")]
    pub database_file: String,
    /// Preference file name inside `data_dir` (default: "preferences.toml").
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_database_file() -> String {
    "storefront.db".to_string()
}

fn default_preferences_file() -> String {
    "preferences.toml".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            database_file: default_database_file(),
            preferences_file: default_preferences_file(),
        }
    }
}

impl StorageConfig {
    /// Directory holding local state.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("storefront")
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.database_file)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.preferences_file)
    }
}
