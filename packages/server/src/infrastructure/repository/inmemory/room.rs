//! In-memory RoomRepository implementation.
//!
//! The registry and the message log live in one `Room` aggregate behind a
//! single mutex, so registry iteration (roster snapshots, broadcast target
//! lists, history replay) and registry mutation never interleave
//! inconsistently.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, Connection, DisplayName, RepositoryError, Room, RoomRepository, SessionId,
};

/// In-memory RoomRepository backed by a single `Mutex<Room>`.
pub struct InMemoryRoomRepository {
    room: Arc<Mutex<Room>>,
}

impl InMemoryRoomRepository {
    pub fn new(room: Arc<Mutex<Room>>) -> Self {
        Self { room }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn register(&self, connection: Connection) -> Vec<ChatMessage> {
        let mut room = self.room.lock().await;
        let id = connection.id.clone();
        room.register(connection);
        tracing::debug!("Session '{}' registered", id);
        // Snapshot under the same lock: replay contains exactly the messages
        // appended before this registration.
        room.messages.clone()
    }

    async fn unregister(&self, id: &SessionId) -> bool {
        let mut room = self.room.lock().await;
        let removed = room.unregister(id);
        if removed {
            tracing::debug!("Session '{}' unregistered", id);
        }
        removed
    }

    async fn set_name(&self, id: &SessionId, name: DisplayName) {
        let mut room = self.room.lock().await;
        room.set_name(id, name);
    }

    async fn name_of(&self, id: &SessionId) -> Option<DisplayName> {
        let room = self.room.lock().await;
        room.name_of(id)
    }

    async fn names_snapshot(&self) -> Vec<DisplayName> {
        let room = self.room.lock().await;
        room.names_snapshot()
    }

    async fn session_ids(&self) -> Vec<SessionId> {
        let room = self.room.lock().await;
        room.session_ids()
    }

    async fn append_message(&self, message: ChatMessage) {
        let mut room = self.room.lock().await;
        room.append_message(message);
    }

    async fn count_connections(&self) -> usize {
        let room = self.room.lock().await;
        room.connections.len()
    }

    async fn get_room(&self) -> Result<Room, RepositoryError> {
        let room = self.room.lock().await;
        Ok(room.clone())
    }
}
