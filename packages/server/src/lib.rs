//! Chat broadcast and playlist store server library.
//!
//! The server keeps an in-memory roster of connected chat clients, replays the
//! shared message history to newcomers, and fans out chat and roster events to
//! every live connection. A thin playlist CRUD surface keyed by device `esn`
//! rides on the same HTTP router.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
