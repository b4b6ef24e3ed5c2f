//! UseCase: chat message submission.
//!
//! Empty and whitespace-only text is silently dropped: nothing is appended
//! and nothing is broadcast. A surviving message records the sender's
//! display name at time of send (or unset), is appended to the log in
//! receipt order, and is then broadcast to every registered connection,
//! including the sender. Identical text sent twice is two independent
//! messages.

use std::sync::Arc;

use parlor_shared::time::get_timestamp;

use crate::domain::{
    ChatMessage, MessagePusher, MessageText, RoomRepository, SessionId, Timestamp,
};

/// Chat message submission use case
pub struct SendMessageUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Accept raw message text from a session.
    ///
    /// # Returns
    ///
    /// * `Some(ChatMessage)` - the message as appended to the log
    /// * `None` - the text coerced to empty and was dropped
    pub async fn execute(&self, id: &SessionId, raw_text: Option<String>) -> Option<ChatMessage> {
        let Some(text) = MessageText::coerce(raw_text) else {
            tracing::debug!("Dropped empty message from session '{}'", id);
            return None;
        };

        // Name at time of send; later renames do not rewrite the log.
        let name = self.repository.name_of(id).await;
        let message = ChatMessage::new(name, text, Timestamp::new(get_timestamp()));

        self.repository.append_message(message.clone()).await;

        Some(message)
    }

    /// Broadcast a serialized message frame to every registered connection,
    /// including the sender.
    pub async fn broadcast_message(&self, frame: &str) {
        let targets = self.repository.session_ids().await;
        self.message_pusher.broadcast(targets, frame).await;
    }
}
