//! Request handlers for the WebSocket and HTTP endpoints.

mod http;
mod websocket;

pub use http::{
    debug_room_state, delete_playlist, get_playlist, health_check, playlist_usage, put_playlist,
};
pub use websocket::websocket_handler;
