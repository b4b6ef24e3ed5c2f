//! UseCase: playlist lookup by esn.

use std::sync::Arc;

use crate::domain::{Esn, Playlist, PlaylistRepository, RepositoryError};

/// Playlist lookup use case
pub struct GetPlaylistUseCase {
    repository: Arc<dyn PlaylistRepository>,
}

impl GetPlaylistUseCase {
    pub fn new(repository: Arc<dyn PlaylistRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, esn: &Esn) -> Result<Option<Playlist>, RepositoryError> {
        self.repository.find(esn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryPlaylistRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_existing_playlist() {
        // given:
        let repository = Arc::new(InMemoryPlaylistRepository::new());
        repository
            .upsert(Playlist::new(Esn::new("device-1".to_string()), json!({"a": 1})))
            .await
            .unwrap();
        let usecase = GetPlaylistUseCase::new(repository);

        // when:
        let result = usecase.execute(&Esn::new("device-1".to_string())).await;

        // then:
        assert_eq!(result.unwrap().unwrap().feed, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_get_missing_playlist_returns_none() {
        // given:
        let repository = Arc::new(InMemoryPlaylistRepository::new());
        let usecase = GetPlaylistUseCase::new(repository);

        // when:
        let result = usecase.execute(&Esn::new("never-written".to_string())).await;

        // then:
        assert_eq!(result.unwrap(), None);
    }
}
