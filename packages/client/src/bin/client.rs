//! CLI chat client with optional display name and reconnection support.
//!
//! Connects to the chat server, optionally identifies with a display name,
//! and sends messages from stdin. Displays the replayed message history on
//! connect and live roster updates as peers join, rename, and leave.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second
//! interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-client
//! cargo run --bin parlor-client -- --name Alice
//! cargo run --bin parlor-client -- -n Bob -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use parlor_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "parlor-client")]
#[command(about = "CLI chat client for the parlor server", long_about = None)]
struct Args {
    /// Display name announced to the server (omit to stay anonymous)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3000/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = parlor_client::client::run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
