//! UseCase: playlist deletion by esn.

use std::sync::Arc;

use crate::domain::{Esn, PlaylistRepository, RepositoryError};

/// Playlist deletion use case
pub struct DeletePlaylistUseCase {
    repository: Arc<dyn PlaylistRepository>,
}

impl DeletePlaylistUseCase {
    pub fn new(repository: Arc<dyn PlaylistRepository>) -> Self {
        Self { repository }
    }

    /// Delete the record for an esn. Returns whether a record existed;
    /// deleting an absent record is not an error.
    pub async fn execute(&self, esn: &Esn) -> Result<bool, RepositoryError> {
        self.repository.remove(esn).await
    }
}
