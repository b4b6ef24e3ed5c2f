//! UseCase layer: one struct per operation, depending only on the domain
//! traits.
//!
//! The chat operations have no failure modes of their own: registration
//! always succeeds, removal is idempotent, empty message text is silently
//! dropped rather than rejected, and broadcast is fire-and-forget. The
//! playlist operations surface `RepositoryError` from the document store.

mod connect_client;
mod delete_playlist;
mod disconnect_client;
mod get_playlist;
mod get_room_state;
mod identify_client;
mod send_message;
mod store_playlist;

pub use connect_client::ConnectClientUseCase;
pub use delete_playlist::DeletePlaylistUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use get_playlist::GetPlaylistUseCase;
pub use get_room_state::GetRoomStateUseCase;
pub use identify_client::IdentifyClientUseCase;
pub use send_message::SendMessageUseCase;
pub use store_playlist::StorePlaylistUseCase;
