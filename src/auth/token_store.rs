//! Bearer token persistence
//!
//! Stores the session token as a small JSON file in the application
//! data directory. Only the session service writes or clears it; every
//! other component reads through it.

use crate::config::SESSION_FILE;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

/// File-backed store for the bearer token
#[derive(Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a token store rooted in the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Load the persisted token, if any. A missing file means no
    /// session; an unreadable file is treated the same way after a
    /// warning, since a corrupt session is not worth failing startup.
    pub async fn load(&self) -> Option<String> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(_) => return None,
        };

        match serde_json::from_str::<PersistedSession>(&contents) {
            Ok(session) if !session.token.is_empty() => Some(session.token),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                None
            }
        }
    }

    /// Persist a token, replacing any previous one
    pub async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string(&PersistedSession {
            token: token.to_string(),
        })?;

        fs::write(&self.path, contents).await?;

        tracing::debug!("Session token persisted");

        Ok(())
    }

    /// Remove the persisted token. Clearing an absent token is fine.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!("Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TokenStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let (store, _temp) = create_test_store();

        store.save("abc123").await.unwrap();

        assert_eq!(store.load().await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_load_without_file_is_none() {
        let (store, _temp) = create_test_store();

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_token() {
        let (store, _temp) = create_test_store();

        store.save("abc123").await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let (store, _temp) = create_test_store();

        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_none() {
        let (store, temp) = create_test_store();

        tokio::fs::write(temp.path().join(SESSION_FILE), "not json")
            .await
            .unwrap();

        assert!(store.load().await.is_none());
    }
}
