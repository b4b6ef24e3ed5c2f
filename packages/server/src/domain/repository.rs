//! Repository traits: the data-access interfaces the use cases depend on.
//!
//! Concrete implementations live in the infrastructure layer (dependency
//! inversion); the use cases never see the storage technology.

use async_trait::async_trait;

use super::{
    entity::{ChatMessage, Connection, Playlist, Room},
    error::RepositoryError,
    value_object::{DisplayName, Esn, SessionId},
};

/// Connection registry and message log, guarded as one aggregate.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Register a connection and return the message history snapshot taken
    /// atomically with registration. The snapshot is replayed to exactly
    /// this connection, in log order, and contains exactly the messages
    /// appended before registration.
    async fn register(&self, connection: Connection) -> Vec<ChatMessage>;

    /// Remove a connection by identity. Returns `false` when it was not
    /// present (idempotent no-op).
    async fn unregister(&self, id: &SessionId) -> bool;

    /// Set or overwrite a connection's display name
    async fn set_name(&self, id: &SessionId, name: DisplayName);

    /// The sender's current display name, if identified
    async fn name_of(&self, id: &SessionId) -> Option<DisplayName>;

    /// Ordered names of all registered connections, registration order,
    /// unset names rendered as the registry default
    async fn names_snapshot(&self) -> Vec<DisplayName>;

    /// Consistent snapshot of registered session ids, registration order
    async fn session_ids(&self) -> Vec<SessionId>;

    /// Append one message to the end of the log
    async fn append_message(&self, message: ChatMessage);

    /// Number of currently registered connections
    async fn count_connections(&self) -> usize;

    /// The whole room state (debug endpoint)
    async fn get_room(&self) -> Result<Room, RepositoryError>;
}

/// Playlist document store keyed by unique `esn`.
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// Best-effort unique-index setup on `esn`, invoked once at startup.
    /// Failures are reported to the caller, which logs and continues.
    async fn ensure_esn_index(&self) -> Result<(), RepositoryError>;

    /// Look up the record for an esn
    async fn find(&self, esn: &Esn) -> Result<Option<Playlist>, RepositoryError>;

    /// Overwrite any existing record for the esn (delete-then-insert) or
    /// insert a new one
    async fn upsert(&self, playlist: Playlist) -> Result<(), RepositoryError>;

    /// Delete the record for an esn. Returns whether a record existed.
    async fn remove(&self, esn: &Esn) -> Result<bool, RepositoryError>;
}
