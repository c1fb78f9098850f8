// Library crate for the diary server
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod db;
pub mod health;
pub mod message;
pub mod room;
pub mod router;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use message::{
    models::MessageModel,
    repository::{InMemoryMessageRepository, MessageRepository},
    types::MessageResponse,
};
pub use room::{
    models::RoomModel,
    repository::{InMemoryRoomRepository, RoomRepository},
    types::RoomResponse,
};
pub use router::build_router;
pub use shared::{AppError, AppState};
