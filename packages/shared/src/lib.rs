//! Shared utilities for the parlor chat/playlist server and its CLI client.

pub mod logger;
pub mod time;
