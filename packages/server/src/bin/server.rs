//! Real-time chat broadcast server with a playlist store.
//!
//! Accepts WebSocket clients on `/ws`, replays the full message history to
//! each newcomer, and broadcasts chat messages and roster updates to every
//! connected client. Also serves the playlist CRUD endpoints and static
//! client assets.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server
//! cargo run --bin parlor-server -- --host 127.0.0.1 --port 3000
//! PORT=8080 cargo run --bin parlor-server
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use tokio::sync::Mutex;

use parlor_server::{
    domain::{PlaylistRepository, Room, Timestamp},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryPlaylistRepository, InMemoryRoomRepository},
    },
    ui::Server,
    usecase::{
        ConnectClientUseCase, DeletePlaylistUseCase, DisconnectClientUseCase, GetPlaylistUseCase,
        GetRoomStateUseCase, IdentifyClientUseCase, SendMessageUseCase, StorePlaylistUseCase,
    },
};
use parlor_shared::{logger::setup_logger, time::get_timestamp};

#[derive(Parser, Debug)]
#[command(name = "parlor-server")]
#[command(about = "Real-time chat broadcast server with a playlist store", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "IP", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Directory of static client assets served for unmatched routes
    #[arg(long, default_value = "client")]
    static_dir: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repositories (in-memory)
    let room = Arc::new(Mutex::new(Room::new(Timestamp::new(get_timestamp()))));
    let room_repository = Arc::new(InMemoryRoomRepository::new(room));
    let playlist_repository = Arc::new(InMemoryPlaylistRepository::new());

    // Best-effort: an index failure is logged, never fatal
    if let Err(e) = playlist_repository.ensure_esn_index().await {
        tracing::error!("Failed to ensure esn index: {}", e);
    }

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients.clone()));

    // 3. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        room_repository.clone(),
        message_pusher.clone(),
    ));
    let identify_client_usecase = Arc::new(IdentifyClientUseCase::new(
        room_repository.clone(),
        message_pusher.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        room_repository.clone(),
        message_pusher.clone(),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        room_repository.clone(),
        message_pusher.clone(),
    ));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(room_repository.clone()));
    let get_playlist_usecase = Arc::new(GetPlaylistUseCase::new(playlist_repository.clone()));
    let store_playlist_usecase = Arc::new(StorePlaylistUseCase::new(playlist_repository.clone()));
    let delete_playlist_usecase = Arc::new(DeletePlaylistUseCase::new(playlist_repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        identify_client_usecase,
        send_message_usecase,
        disconnect_client_usecase,
        get_room_state_usecase,
        get_playlist_usecase,
        store_playlist_usecase,
        delete_playlist_usecase,
        args.static_dir,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
