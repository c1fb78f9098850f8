// Public API - what other modules can use
pub use handlers::{create_message, delete_message, list_messages};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;
pub mod types;
