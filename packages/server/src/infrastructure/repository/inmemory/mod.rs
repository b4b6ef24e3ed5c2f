//! In-memory repository implementations.

mod playlist;
mod room;

pub use playlist::InMemoryPlaylistRepository;
pub use room::InMemoryRoomRepository;
