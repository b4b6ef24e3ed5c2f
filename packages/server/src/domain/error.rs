//! Domain-level error types.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// The chat room registry itself has no failure modes (registration always
/// succeeds, removal is idempotent); repository errors come from the playlist
/// document store and from state access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// The room state could not be read
    #[error("room state is unavailable")]
    RoomUnavailable,

    /// The playlist document store failed
    #[error("playlist store failure: {0}")]
    StoreFailure(String),
}
