//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::usecase::{
    ConnectClientUseCase, DeletePlaylistUseCase, DisconnectClientUseCase, GetPlaylistUseCase,
    GetRoomStateUseCase, IdentifyClientUseCase, SendMessageUseCase, StorePlaylistUseCase,
};

use super::{
    handler::{
        debug_room_state, delete_playlist, get_playlist, health_check, playlist_usage,
        put_playlist, websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Chat broadcast and playlist server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_client_usecase,
///     identify_client_usecase,
///     send_message_usecase,
///     disconnect_client_usecase,
///     get_room_state_usecase,
///     get_playlist_usecase,
///     store_playlist_usecase,
///     delete_playlist_usecase,
///     "client".to_string(),
/// );
/// server.run("0.0.0.0".to_string(), 3000).await?;
/// ```
pub struct Server {
    /// UseCase for client connection
    connect_client_usecase: Arc<ConnectClientUseCase>,
    /// UseCase for client identification
    identify_client_usecase: Arc<IdentifyClientUseCase>,
    /// UseCase for message sending
    send_message_usecase: Arc<SendMessageUseCase>,
    /// UseCase for client disconnection
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// UseCase for room state inspection
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
    /// UseCase for playlist lookup
    get_playlist_usecase: Arc<GetPlaylistUseCase>,
    /// UseCase for playlist storage
    store_playlist_usecase: Arc<StorePlaylistUseCase>,
    /// UseCase for playlist deletion
    delete_playlist_usecase: Arc<DeletePlaylistUseCase>,
    /// Directory served as static content for unmatched routes
    static_dir: String,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        identify_client_usecase: Arc<IdentifyClientUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        get_room_state_usecase: Arc<GetRoomStateUseCase>,
        get_playlist_usecase: Arc<GetPlaylistUseCase>,
        store_playlist_usecase: Arc<StorePlaylistUseCase>,
        delete_playlist_usecase: Arc<DeletePlaylistUseCase>,
        static_dir: String,
    ) -> Self {
        Self {
            connect_client_usecase,
            identify_client_usecase,
            send_message_usecase,
            disconnect_client_usecase,
            get_room_state_usecase,
            get_playlist_usecase,
            store_playlist_usecase,
            delete_playlist_usecase,
            static_dir,
        }
    }

    /// Run the server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            identify_client_usecase: self.identify_client_usecase,
            send_message_usecase: self.send_message_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
            get_room_state_usecase: self.get_room_state_usecase,
            get_playlist_usecase: self.get_playlist_usecase,
            store_playlist_usecase: self.store_playlist_usecase,
            delete_playlist_usecase: self.delete_playlist_usecase,
        });

        // Define handlers
        let app = Router::new()
            // WebSocket endpoint
            .route("/ws", get(websocket_handler))
            // HTTP endpoints
            .route("/debug/room", get(debug_room_state))
            .route("/api/health", get(health_check))
            .route("/playlists/", get(playlist_usage))
            .route(
                "/playlists/{esn}",
                get(get_playlist).put(put_playlist).delete(delete_playlist),
            )
            // Unmatched routes fall through to the static client assets
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
