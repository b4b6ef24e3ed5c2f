//! In-memory PlaylistRepository implementation.
//!
//! A HashMap keyed by esn stands in for an embedded document store.
//! Uniqueness of `esn` is inherent in the map, so the startup index setup is
//! a logged no-op here.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Esn, Playlist, PlaylistRepository, RepositoryError};

/// In-memory playlist document store.
pub struct InMemoryPlaylistRepository {
    records: Arc<Mutex<HashMap<String, Playlist>>>,
}

impl InMemoryPlaylistRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryPlaylistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepository {
    async fn ensure_esn_index(&self) -> Result<(), RepositoryError> {
        // The map key is the index; nothing to build.
        tracing::debug!("esn index is inherent in the in-memory store");
        Ok(())
    }

    async fn find(&self, esn: &Esn) -> Result<Option<Playlist>, RepositoryError> {
        let records = self.records.lock().await;
        Ok(records.get(esn.as_str()).cloned())
    }

    async fn upsert(&self, playlist: Playlist) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().await;
        // PUT is overwrite semantics: drop any old record first.
        if records.remove(playlist.esn.as_str()).is_some() {
            tracing::info!("Deleted record: {}", playlist.esn);
        }
        records.insert(playlist.esn.as_str().to_string(), playlist);
        Ok(())
    }

    async fn remove(&self, esn: &Esn) -> Result<bool, RepositoryError> {
        let mut records = self.records.lock().await;
        let existed = records.remove(esn.as_str()).is_some();
        if existed {
            tracing::info!("Deleted record: {}", esn);
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn playlist(esn: &str, feed: serde_json::Value) -> Playlist {
        Playlist::new(Esn::new(esn.to_string()), feed)
    }

    #[tokio::test]
    async fn test_find_missing_record_returns_none() {
        // given:
        let repo = InMemoryPlaylistRepository::new();

        // when:
        let result = repo.find(&Esn::new("nope".to_string())).await.unwrap();

        // then:
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_upsert_then_find_returns_feed() {
        // given:
        let repo = InMemoryPlaylistRepository::new();
        repo.upsert(playlist("device-1", json!({"a": 1}))).await.unwrap();

        // when:
        let found = repo.find(&Esn::new("device-1".to_string())).await.unwrap();

        // then:
        assert_eq!(found.unwrap().feed, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_upsert_overwrites_existing_record() {
        // given:
        let repo = InMemoryPlaylistRepository::new();
        repo.upsert(playlist("device-1", json!({"a": 1}))).await.unwrap();

        // when:
        repo.upsert(playlist("device-1", json!({"b": 2}))).await.unwrap();

        // then:
        let found = repo.find(&Esn::new("device-1".to_string())).await.unwrap();
        assert_eq!(found.unwrap().feed, json!({"b": 2}));
    }

    #[tokio::test]
    async fn test_remove_reports_whether_record_existed() {
        // given:
        let repo = InMemoryPlaylistRepository::new();
        repo.upsert(playlist("device-1", json!([1, 2, 3]))).await.unwrap();

        // when / then:
        let esn = Esn::new("device-1".to_string());
        assert!(repo.remove(&esn).await.unwrap());
        assert!(!repo.remove(&esn).await.unwrap());
        assert_eq!(repo.find(&esn).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ensure_esn_index_succeeds() {
        // given:
        let repo = InMemoryPlaylistRepository::new();

        // when / then:
        assert!(repo.ensure_esn_index().await.is_ok());
    }
}
