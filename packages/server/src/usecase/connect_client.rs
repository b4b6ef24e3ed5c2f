//! UseCase: client connection.
//!
//! Registers the new session with the registry and the pusher, and hands the
//! caller the message history snapshot for replay. Replay happens exactly
//! once, at connect time, in log order; the snapshot is taken atomically
//! with registration so it contains exactly the messages appended before
//! this connection.

use std::sync::Arc;

use crate::domain::{ChatMessage, Connection, MessagePusher, PusherChannel, RoomRepository};

/// Client connection use case
pub struct ConnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Register a connection. No error conditions: any client that completes
    /// the transport handshake is admitted.
    ///
    /// # Arguments
    ///
    /// * `connection` - The new connection record (fresh id, no name)
    /// * `sender` - Channel for pushing frames to this client's socket task
    ///
    /// # Returns
    ///
    /// The message history to replay to this connection, in log order.
    pub async fn execute(
        &self,
        connection: Connection,
        sender: PusherChannel,
    ) -> Vec<ChatMessage> {
        let id = connection.id.clone();

        // Pusher channel first, registry second. A message landing before
        // the registry snapshot is not yet targeted at this session and is
        // covered by the replay; one landing after the snapshot reaches the
        // already-registered channel. Either way it arrives exactly once.
        self.message_pusher.register_client(id, sender).await;

        self.repository.register(connection).await
    }
}
