//! UseCase: playlist storage with PUT overwrite semantics.

use std::sync::Arc;

use crate::domain::{Esn, Playlist, PlaylistRepository, RepositoryError};

/// Playlist storage use case
pub struct StorePlaylistUseCase {
    repository: Arc<dyn PlaylistRepository>,
}

impl StorePlaylistUseCase {
    pub fn new(repository: Arc<dyn PlaylistRepository>) -> Self {
        Self { repository }
    }

    /// Overwrite any existing record for the esn, or insert a new one.
    pub async fn execute(&self, esn: Esn, feed: serde_json::Value) -> Result<(), RepositoryError> {
        self.repository.upsert(Playlist::new(esn, feed)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryPlaylistRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_store_then_replace_playlist() {
        // given:
        let repository = Arc::new(InMemoryPlaylistRepository::new());
        let usecase = StorePlaylistUseCase::new(repository.clone());
        let esn = Esn::new("device-1".to_string());

        // when: stored, then overwritten
        usecase.execute(esn.clone(), json!({"a": 1})).await.unwrap();
        usecase.execute(esn.clone(), json!({"a": 2})).await.unwrap();

        // then: PUT is overwrite semantics
        let stored = repository.find(&esn).await.unwrap().unwrap();
        assert_eq!(stored.feed, json!({"a": 2}));
    }
}
