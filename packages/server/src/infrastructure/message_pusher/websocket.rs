//! WebSocket-backed MessagePusher implementation.
//!
//! The socket itself is created and split in the UI layer
//! (`src/ui/handler/websocket.rs`); this implementation only manages the
//! per-session `UnboundedSender` halves and writes frames into them. The
//! socket task on the other end of each channel drains it into the network.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{MessagePushError, MessagePusher, PusherChannel, SessionId};

/// MessagePusher over per-session WebSocket channels.
pub struct WebSocketMessagePusher {
    /// Outbound channel per connected session
    clients: Arc<Mutex<HashMap<SessionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<HashMap<SessionId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, id: SessionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Session '{}' registered to MessagePusher", id);
        clients.insert(id, sender);
    }

    async fn unregister_client(&self, id: &SessionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(id);
        tracing::debug!("Session '{}' unregistered from MessagePusher", id);
    }

    async fn push_to(&self, id: &SessionId, frame: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(id) {
            sender
                .send(frame.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed frame to session '{}'", id);
            Ok(())
        } else {
            Err(MessagePushError::SessionNotFound(id.to_string()))
        }
    }

    async fn broadcast(&self, targets: Vec<SessionId>, frame: &str) {
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // One dead transport must not abort the rest of the fan-out.
                if let Err(e) = sender.send(frame.to_string()) {
                    tracing::warn!("Failed to push frame to session '{}': {}", target, e);
                } else {
                    tracing::debug!("Broadcasted frame to session '{}'", target);
                }
            } else {
                tracing::warn!("Session '{}' not found during broadcast, skipping", target);
            }
        }
    }
}
