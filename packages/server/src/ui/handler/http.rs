//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
};

use crate::{
    domain::{Esn, Room},
    ui::state::AppState,
};

/// Debug endpoint to get current room state (for testing purposes)
pub async fn debug_room_state(State(state): State<Arc<AppState>>) -> Json<Room> {
    let room = state
        .get_room_state_usecase
        .execute()
        .await
        .expect("Failed to get room state");
    Json(room)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Usage hint for requests that omit the esn path segment
pub async fn playlist_usage() -> &'static str {
    "You must supply an esn, e.g. /playlists/{esn}"
}

/// Get the stored feed for an esn
pub async fn get_playlist(
    State(state): State<Arc<AppState>>,
    Path(esn): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match state.get_playlist_usecase.execute(&Esn::new(esn.clone())).await {
        Ok(Some(playlist)) => Ok(Json(playlist.feed)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            format!("No playlist found for {}", esn),
        )),
        Err(e) => {
            tracing::error!("Playlist lookup failed for '{}': {}", esn, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Playlist store error".to_string(),
            ))
        }
    }
}

/// Store a feed under an esn, overwriting any existing record.
///
/// A non-JSON content-type is rejected outright with 400; nothing is stored
/// and no second response follows.
pub async fn put_playlist(
    State(state): State<Arc<AppState>>,
    Path(esn): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, (StatusCode, String)> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err((
            StatusCode::BAD_REQUEST,
            "Invalid feed type or missing content".to_string(),
        ));
    }

    let feed: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid feed body: {}", e),
        )
    })?;

    match state
        .store_playlist_usecase
        .execute(Esn::new(esn.clone()), feed)
        .await
    {
        Ok(()) => Ok("OK"),
        Err(e) => {
            tracing::error!("Playlist store failed for '{}': {}", esn, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Playlist store error".to_string(),
            ))
        }
    }
}

/// Delete the record for an esn. 204 whether or not a record existed.
pub async fn delete_playlist(
    State(state): State<Arc<AppState>>,
    Path(esn): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    match state
        .delete_playlist_usecase
        .execute(&Esn::new(esn.clone()))
        .await
    {
        Ok(existed) => {
            if existed {
                tracing::info!("Deleted record: {}", esn);
            }
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            tracing::error!("Playlist delete failed for '{}': {}", esn, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Playlist store error".to_string(),
            ))
        }
    }
}
