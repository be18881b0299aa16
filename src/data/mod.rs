//! Data layer: REST API client, local persistence and repositories.

pub mod api;
pub mod database;
pub mod preferences;
pub mod repository;

pub use api::{HttpStoreApi, ProductDto, StoreApi};
pub use database::{LocalDatabase, StorageError};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences};
