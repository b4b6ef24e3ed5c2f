//! Data Transfer Objects for the wire protocols.
//!
//! - `websocket`: framed chat events (inbound and outbound)
//! - `conversion`: domain model ↔ DTO conversions

pub mod conversion;
pub mod websocket;
