//! CLI chat client for the parlor server.

pub mod client;
