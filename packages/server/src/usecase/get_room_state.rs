//! UseCase: room state inspection (debug endpoint).

use std::sync::Arc;

use crate::domain::{RepositoryError, Room, RoomRepository};

/// Room state inspection use case
pub struct GetRoomStateUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Room, RepositoryError> {
        self.repository.get_room().await
    }
}
