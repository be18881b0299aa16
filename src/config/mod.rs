//! Application configuration.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, StorageConfig, DEFAULT_BASE_URL};
