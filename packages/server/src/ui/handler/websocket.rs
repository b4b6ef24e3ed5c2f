//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{Connection, SessionId, Timestamp},
    infrastructure::dto::websocket::{InboundEvent, MessageEvent, RosterEvent},
    ui::state::AppState,
};
use parlor_shared::time::get_timestamp;

/// Accept any client that completes the handshake. The session id is
/// generated server-side; clients carry no identity until they send an
/// identify event.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: frames broadcast by other
/// sessions (via the rx channel) are sent to this client's connection.
///
/// # Arguments
///
/// * `rx` - Channel receiver for frames addressed to this session
/// * `sender` - WebSocket sink to send frames to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the frame to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = SessionId::generate();

    // Create a channel for this client to receive broadcast frames
    let (tx, rx) = mpsc::unbounded_channel();

    let connection = Connection::new(session_id.clone(), Timestamp::new(get_timestamp()));
    let replay = state
        .connect_client_usecase
        .execute(connection, tx)
        .await;
    tracing::info!("Session '{}' connected and registered", session_id);

    let (mut sender, mut receiver) = socket.split();

    // Replay the full message history to the newcomer, in log order. The
    // snapshot was taken atomically with registration, and live frames only
    // start flowing once pusher_loop drains rx below, so replay frames
    // always precede them.
    for message in replay {
        let frame = serde_json::to_string(&MessageEvent::from(message)).unwrap();
        if let Err(e) = sender.send(Message::Text(frame.into())).await {
            tracing::error!("Failed to replay history to '{}': {}", session_id, e);
            broadcast_departure(&state, &session_id).await;
            return;
        }
    }

    let session_id_for_recv = session_id.clone();
    let state_clone = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::info!("Received text: {}", text);

                    // Parse the incoming frame
                    let event = match serde_json::from_str::<InboundEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring unparseable frame from '{}': {}",
                                session_id_for_recv,
                                e
                            );
                            continue;
                        }
                    };

                    match event {
                        InboundEvent::Identify { name } => {
                            // Rename, then rebroadcast the roster to everyone
                            let roster = state_clone
                                .identify_client_usecase
                                .execute(&session_id_for_recv, name)
                                .await;

                            let frame =
                                serde_json::to_string(&RosterEvent::from(roster)).unwrap();
                            state_clone
                                .identify_client_usecase
                                .broadcast_roster(&frame)
                                .await;
                        }
                        InboundEvent::Message { text } => {
                            // Empty text is dropped inside the UseCase; only a
                            // surviving message is broadcast, sender included
                            if let Some(message) = state_clone
                                .send_message_usecase
                                .execute(&session_id_for_recv, text)
                                .await
                            {
                                let frame =
                                    serde_json::to_string(&MessageEvent::from(message)).unwrap();
                                state_clone
                                    .send_message_usecase
                                    .broadcast_message(&frame)
                                    .await;
                            }
                        }
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", session_id_for_recv);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to receive frames from other clients and send to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    broadcast_departure(&state, &session_id).await;
}

/// Remove the session and, if it was still registered, rebroadcast the
/// shrunken roster to the remaining connections. A session that already left
/// triggers nothing.
async fn broadcast_departure(state: &Arc<AppState>, session_id: &SessionId) {
    if let Some(roster) = state.disconnect_client_usecase.execute(session_id).await {
        let frame = serde_json::to_string(&RosterEvent::from(roster)).unwrap();
        state
            .disconnect_client_usecase
            .broadcast_roster(&frame)
            .await;
        tracing::info!("Broadcasted roster after '{}' left", session_id);
    }
}
