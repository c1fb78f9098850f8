use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::message::repository::MessageRepository;
use crate::room::repository::RoomRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub room_repository: Arc<dyn RoomRepository + Send + Sync>,
    pub message_repository: Arc<dyn MessageRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        room_repository: Arc<dyn RoomRepository + Send + Sync>,
        message_repository: Arc<dyn MessageRepository + Send + Sync>,
    ) -> Self {
        Self {
            room_repository,
            message_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::message::models::{MessageModel, NewMessage};
    use crate::message::repository::DeleteMessageResult;
    use crate::room::models::{NewRoom, RoomModel};
    use async_trait::async_trait;

    /// Room repository whose every call fails - for exercising error paths
    pub struct FailingRoomRepository;

    #[async_trait]
    impl RoomRepository for FailingRoomRepository {
        async fn insert(&self, _room: NewRoom) -> Result<RoomModel, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn find_by_id(&self, _id: i64) -> Result<Option<RoomModel>, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn exists_by_id(&self, _id: i64) -> Result<bool, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn find_all(&self) -> Result<Vec<RoomModel>, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    /// Dummy message repository that stores nothing - for tests that don't care about messages
    pub struct DummyMessageRepository;

    #[async_trait]
    impl MessageRepository for DummyMessageRepository {
        async fn insert(&self, message: NewMessage) -> Result<MessageModel, AppError> {
            Ok(MessageModel {
                id: 1,
                room_id: message.room_id,
                sender: message.sender,
                content: message.content,
                created_at: message.created_at,
            })
        }
        async fn find_by_id(&self, _id: i64) -> Result<Option<MessageModel>, AppError> {
            Ok(None)
        }
        async fn exists_by_id(&self, _id: i64) -> Result<bool, AppError> {
            Ok(false)
        }
        async fn find_by_room_id(&self, _room_id: i64) -> Result<Vec<MessageModel>, AppError> {
            Ok(Vec::new())
        }
        async fn delete_by_id(&self, _id: i64) -> Result<DeleteMessageResult, AppError> {
            Ok(DeleteMessageResult::NotFound)
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        room_repository: Option<Arc<dyn RoomRepository + Send + Sync>>,
        message_repository: Option<Arc<dyn MessageRepository + Send + Sync>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                room_repository: None,
                message_repository: None,
            }
        }

        pub fn with_room_repository(mut self, repo: Arc<dyn RoomRepository + Send + Sync>) -> Self {
            self.room_repository = Some(repo);
            self
        }

        pub fn with_message_repository(
            mut self,
            repo: Arc<dyn MessageRepository + Send + Sync>,
        ) -> Self {
            self.message_repository = Some(repo);
            self
        }

        /// Rooms default to a fresh in-memory store, messages to a no-op one
        pub fn build(self) -> AppState {
            AppState {
                room_repository: self.room_repository.unwrap_or_else(|| {
                    Arc::new(crate::room::repository::InMemoryRoomRepository::new())
                }),
                message_repository: self
                    .message_repository
                    .unwrap_or_else(|| Arc::new(DummyMessageRepository)),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_error_body() {
        let response = AppError::NotFound("Room 9 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Room 9 not found");
    }

    #[tokio::test]
    async fn test_database_error_maps_to_500() {
        let response = AppError::DatabaseError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Database error: boom");
    }
}
