//! Server state shared across handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DeletePlaylistUseCase, DisconnectClientUseCase, GetPlaylistUseCase,
    GetRoomStateUseCase, IdentifyClientUseCase, SendMessageUseCase, StorePlaylistUseCase,
};

/// Shared application state
pub struct AppState {
    /// UseCase for client connection
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// UseCase for client identification
    pub identify_client_usecase: Arc<IdentifyClientUseCase>,
    /// UseCase for message sending
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// UseCase for client disconnection
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// UseCase for room state inspection
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
    /// UseCase for playlist lookup
    pub get_playlist_usecase: Arc<GetPlaylistUseCase>,
    /// UseCase for playlist storage
    pub store_playlist_usecase: Arc<StorePlaylistUseCase>,
    /// UseCase for playlist deletion
    pub delete_playlist_usecase: Arc<DeletePlaylistUseCase>,
}
