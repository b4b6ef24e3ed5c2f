//! UseCase: client identification.
//!
//! Coerces the raw name (empty/absent becomes `"Anonymous"`), stores it on
//! the connection, and yields the roster snapshot that must then be
//! rebroadcast to every registered connection, including the renamer.

use std::sync::Arc;

use crate::domain::{DisplayName, MessagePusher, RoomRepository, SessionId};

/// Client identification use case
pub struct IdentifyClientUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl IdentifyClientUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Set or overwrite the session's display name.
    ///
    /// # Returns
    ///
    /// The roster snapshot after the rename: every registered connection's
    /// current name, in registration order.
    pub async fn execute(&self, id: &SessionId, raw_name: Option<String>) -> Vec<DisplayName> {
        let name = DisplayName::coerce(raw_name);
        tracing::info!("Session '{}' identified as '{}'", id, name.as_str());

        self.repository.set_name(id, name).await;
        self.repository.names_snapshot().await
    }

    /// Broadcast a serialized roster frame to every registered connection.
    pub async fn broadcast_roster(&self, frame: &str) {
        let targets = self.repository.session_ids().await;
        self.message_pusher.broadcast(targets, frame).await;
    }
}
