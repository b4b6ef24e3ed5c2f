//! Domain layer: value objects, entities, and the interfaces the use cases
//! depend on.
//!
//! The domain defines the data-access and notification interfaces it needs
//! (`RoomRepository`, `PlaylistRepository`, `MessagePusher`); the concrete
//! implementations live in the infrastructure layer (dependency inversion).

pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, Connection, Playlist, Room};
pub use error::RepositoryError;
pub use message_pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use repository::{PlaylistRepository, RoomRepository};
pub use value_object::{DisplayName, Esn, MessageText, SessionId, Timestamp};
