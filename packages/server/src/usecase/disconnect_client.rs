//! UseCase: client disconnection.
//!
//! Removal is idempotent: the first disconnect yields the post-removal
//! roster for rebroadcast to the remaining connections; a repeat disconnect
//! of the same session is a no-op and must not re-trigger a roster
//! broadcast.

use std::sync::Arc;

use crate::domain::{DisplayName, MessagePusher, RoomRepository, SessionId};

/// Client disconnection use case
pub struct DisconnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Remove a session from the registry and the pusher.
    ///
    /// # Returns
    ///
    /// * `Some(roster)` - the roster snapshot after removal, to rebroadcast
    /// * `None` - the session was already gone; nothing to broadcast
    pub async fn execute(&self, id: &SessionId) -> Option<Vec<DisplayName>> {
        let removed = self.repository.unregister(id).await;
        self.message_pusher.unregister_client(id).await;

        if !removed {
            return None;
        }

        tracing::info!("Session '{}' disconnected and removed from registry", id);
        Some(self.repository.names_snapshot().await)
    }

    /// Broadcast a serialized roster frame to every remaining connection.
    pub async fn broadcast_roster(&self, frame: &str) {
        let targets = self.repository.session_ids().await;
        self.message_pusher.broadcast(targets, frame).await;
    }
}
