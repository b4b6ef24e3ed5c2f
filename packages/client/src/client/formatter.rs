//! Message formatting utilities for client display.

use parlor_shared::time::timestamp_to_rfc3339;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a chat message.
    ///
    /// The wire format carries no timestamp, so `received_at` is stamped
    /// locally when the frame arrives. A sender that never identified has no
    /// name and is shown as "anonymous".
    pub fn format_message(name: Option<&str>, text: &str, received_at: i64) -> String {
        let timestamp_str = timestamp_to_rfc3339(received_at);
        format!(
            "\n\n------------------------------------------------------------\n\
             @{}: {}\n\
             received at {}\n\
             ------------------------------------------------------------\n",
            name.unwrap_or("anonymous"),
            text,
            timestamp_str
        )
    }

    /// Format the roster of connected clients, marking the current client's
    /// own display name.
    pub fn format_roster(names: &[String], own_name: &str) -> String {
        let mut output = String::new();
        output.push_str("\n\n============================================================\n");
        output.push_str("Connected:\n");

        if names.is_empty() {
            output.push_str("(No one connected)\n");
        } else {
            let mut own_seen = false;
            for name in names {
                // The roster is names only, so the first occurrence of our
                // own name is assumed to be us
                let is_me = !own_seen && name == own_name;
                if is_me {
                    own_seen = true;
                }
                let me_suffix = if is_me { " (me)" } else { "" };
                output.push_str(&format!("{}{}\n", name, me_suffix));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a binary frame notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text frame (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}
