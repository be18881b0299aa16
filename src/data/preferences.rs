//! Key-value preference store.
//!
//! Holds two keys: the session token and whether onboarding was finished.
//! Writes are last-write-wins.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::data::database::StorageError;
use crate::domain::DomainResponse;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn session_token(&self) -> DomainResponse<Option<String>>;

    /// `None` clears the token.
    async fn set_session_token(&self, token: Option<String>) -> DomainResponse<()>;

    async fn is_app_intro_finished(&self) -> DomainResponse<bool>;

    async fn set_app_intro_finished(&self, finished: bool) -> DomainResponse<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub app_intro_finished: bool,
}

/// Preferences persisted as a TOML file.
///
/// The whole file is rewritten on every change, under the same lock that
/// guards the in-memory copy, so the file always holds the last write. The
/// in-memory copy only changes once the file write succeeded.
#[derive(Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    current: Arc<Mutex<Preferences>>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, starting empty when the file is missing.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let current = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| StorageError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Preferences::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            current: Arc::new(Mutex::new(current)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> Preferences {
        self.current.lock().clone()
    }

    async fn write<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Preferences) + Send + 'static,
    {
        let path = self.path.clone();
        let current = Arc::clone(&self.current);
        tokio::task::spawn_blocking(move || {
            let mut prefs = current.lock();
            let mut next = prefs.clone();
            change(&mut next);
            let content = toml::to_string(&next)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, content).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            *prefs = next;
            Ok(())
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn session_token(&self) -> DomainResponse<Option<String>> {
        Ok(self.snapshot().session_token)
    }

    async fn set_session_token(&self, token: Option<String>) -> DomainResponse<()> {
        self.write(move |prefs| prefs.session_token = token).await?;
        Ok(())
    }

    async fn is_app_intro_finished(&self) -> DomainResponse<bool> {
        Ok(self.snapshot().app_intro_finished)
    }

    async fn set_app_intro_finished(&self, finished: bool) -> DomainResponse<()> {
        self.write(move |prefs| prefs.app_intro_finished = finished)
            .await?;
        Ok(())
    }
}

/// Preferences kept only in memory.
#[derive(Clone, Default)]
pub struct MemoryPreferenceStore {
    current: Arc<Mutex<Preferences>>,
}

impl MemoryPreferenceStore {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            current: Arc::new(Mutex::new(preferences)),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn session_token(&self) -> DomainResponse<Option<String>> {
        Ok(self.current.lock().session_token.clone())
    }

    async fn set_session_token(&self, token: Option<String>) -> DomainResponse<()> {
        self.current.lock().session_token = token;
        Ok(())
    }

    async fn is_app_intro_finished(&self) -> DomainResponse<bool> {
        Ok(self.current.lock().app_intro_finished)
    }

    async fn set_app_intro_finished(&self, finished: bool) -> DomainResponse<()> {
        self.current.lock().app_intro_finished = finished;
        Ok(())
    }
}
