//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use parlor_server::infrastructure::dto::websocket::{InboundEvent, MessageEvent, RosterEvent};
use parlor_shared::time::get_timestamp;

use super::{error::ClientError, formatter::MessageFormatter, ui::redisplay_prompt};

/// Lines prefixed with this are sent as identify events instead of messages
const NAME_COMMAND: &str = "/name ";

/// Run the WebSocket client session
pub async fn run_client_session(
    url: &str,
    name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ws_stream, _response) = match connect_async(url).await {
        Ok(result) => result,
        Err(e) => {
            return Err(Box::new(ClientError::ConnectionError(e.to_string())));
        }
    };

    let display_name = name.unwrap_or("anonymous").to_string();

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send. '/name <name>' renames you. Press Ctrl+C to exit.\n",
        display_name
    );

    let (mut write, mut read) = ws_stream.split();

    // Announce the display name before anything else, so the server's
    // roster broadcast carries it from the start
    if let Some(name) = name {
        let identify = InboundEvent::Identify {
            name: Some(name.to_string()),
        };
        let json = serde_json::to_string(&identify)?;
        if let Err(e) = write.send(Message::Text(json.into())).await {
            return Err(Box::new(ClientError::ConnectionError(e.to_string())));
        }
    }

    // Clone the display name for the read task
    let name_for_read = display_name.clone();

    // Spawn a task to handle incoming frames. The first frames are the
    // server's replay of the full message history, in log order.
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    // Try to parse as a chat message (also used for replay)
                    if let Ok(msg) = serde_json::from_str::<MessageEvent>(&text) {
                        let formatted = MessageFormatter::format_message(
                            msg.name.as_deref(),
                            &msg.text,
                            get_timestamp(),
                        );
                        print!("{}", formatted);
                        redisplay_prompt(&name_for_read);
                    }
                    // Try to parse as a roster update
                    else if let Ok(roster) = serde_json::from_str::<RosterEvent>(&text) {
                        let formatted =
                            MessageFormatter::format_roster(&roster.names, &name_for_read);
                        print!("{}", formatted);
                        redisplay_prompt(&name_for_read);
                    }
                    // If parsing fails, display as raw text
                    else {
                        let formatted = MessageFormatter::format_raw_message(&text);
                        print!("{}", formatted);
                        redisplay_prompt(&name_for_read);
                    }
                }
                Ok(Message::Binary(data)) => {
                    let formatted = MessageFormatter::format_binary_message(data.len());
                    print!("{}", formatted);
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let name_for_prompt = display_name.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", name_for_prompt);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to handle stdin input and send to WebSocket
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let event = if let Some(new_name) = line.strip_prefix(NAME_COMMAND) {
                InboundEvent::Identify {
                    name: Some(new_name.trim().to_string()),
                }
            } else {
                InboundEvent::Message { text: Some(line) }
            };

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            let connection_error = read_result.unwrap_or(false);
            if connection_error {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            let write_error = write_result.unwrap_or(false);
            if write_error {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
    }

    Ok(())
}
