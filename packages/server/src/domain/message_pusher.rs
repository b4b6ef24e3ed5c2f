//! MessagePusher trait: the notification interface the use cases depend on.
//!
//! The concrete WebSocket implementation lives in the infrastructure layer;
//! the use cases only know that a registered session can be handed a text
//! frame.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::value_object::SessionId;

/// Channel over which serialized frames reach one connection's socket task
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Errors for single-target pushes.
///
/// Broadcast has no error type: fan-out is fire-and-forget and per-target
/// failures are isolated from each other.
#[derive(Debug, Error)]
pub enum MessagePushError {
    /// The session is not registered with the pusher
    #[error("session '{0}' is not registered")]
    SessionNotFound(String),

    /// The session's channel rejected the frame
    #[error("failed to push frame: {0}")]
    PushFailed(String),
}

/// Outbound event delivery to connected clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a session's outbound channel
    async fn register_client(&self, id: SessionId, sender: PusherChannel);

    /// Remove a session's outbound channel (idempotent)
    async fn unregister_client(&self, id: &SessionId);

    /// Push one frame to one session
    async fn push_to(&self, id: &SessionId, frame: &str) -> Result<(), MessagePushError>;

    /// Deliver one frame to every target, in order. A failed delivery is
    /// logged and skipped; the remaining deliveries still proceed.
    async fn broadcast(&self, targets: Vec<SessionId>, frame: &str);
}
