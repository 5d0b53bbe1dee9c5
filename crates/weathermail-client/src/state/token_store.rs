//! Persisted access token
//!
//! The token survives restarts in a small JSON file, the way a browser
//! keeps it in local storage. It is never cleared by the client.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Failed to write session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: Option<PathBuf>,
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Open the store backed by `path`, loading any token already saved there.
    /// An unreadable file is treated as an empty store.
    pub fn open(path: Option<PathBuf>) -> Self {
        let token = path.as_deref().and_then(load_token);

        Self {
            path,
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// The stored token. An empty string counts as no token.
    pub async fn get(&self) -> Option<String> {
        self.token
            .read()
            .await
            .clone()
            .filter(|token| !token.is_empty())
    }

    /// Replace the stored token. The in-memory value is always updated,
    /// even if writing the file fails.
    pub async fn set(&self, token: String) -> Result<(), TokenStoreError> {
        let mut guard = self.token.write().await;
        *guard = Some(token.clone());

        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&SessionFile {
            access_token: Some(token),
        })?;
        tokio::fs::write(path, json).await?;

        tracing::debug!("Saved session to {:?}", path);
        Ok(())
    }
}

fn load_token(path: &Path) -> Option<String> {
    if !path.exists() {
        tracing::debug!("Session file does not exist, starting logged out");
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<SessionFile>(&contents) {
            Ok(session) => {
                tracing::info!("Loaded session from {:?}", path);
                session.access_token
            }
            Err(e) => {
                tracing::error!("Failed to parse session file: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::error!("Failed to read session file: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_store_starts_empty() {
        let store = TokenStore::in_memory();
        assert_eq!(store.get().await, None);

        store.set("abc123".to_string()).await.unwrap();
        assert_eq!(store.get().await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = TokenStore::open(Some(path.clone()));
        assert_eq!(store.get().await, None);
        store.set("abc123".to_string()).await.unwrap();

        let reopened = TokenStore::open(Some(path.clone()));
        assert_eq!(reopened.get().await.as_deref(), Some("abc123"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["access_token"], "abc123");
    }

    #[tokio::test]
    async fn newer_token_replaces_older() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = TokenStore::open(Some(path.clone()));
        store.set("first".to_string()).await.unwrap();
        store.set("second".to_string()).await.unwrap();

        assert_eq!(store.get().await.as_deref(), Some("second"));
        assert_eq!(
            TokenStore::open(Some(path)).get().await.as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(TokenStore::open(Some(path)).get().await, None);
    }

    #[tokio::test]
    async fn empty_token_counts_as_absent() {
        let store = TokenStore::in_memory();
        store.set(String::new()).await.unwrap();
        assert_eq!(store.get().await, None);
    }
}
