use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{
    models::NewMessage,
    repository::{DeleteMessageResult, MessageRepository},
    types::{MessageCreateRequest, MessageResponse},
};
use crate::{room::repository::RoomRepository, shared::AppError};

/// Service for diary entry operations
pub struct MessageService {
    room_repository: Arc<dyn RoomRepository + Send + Sync>,
    message_repository: Arc<dyn MessageRepository + Send + Sync>,
}

impl MessageService {
    pub fn new(
        room_repository: Arc<dyn RoomRepository + Send + Sync>,
        message_repository: Arc<dyn MessageRepository + Send + Sync>,
    ) -> Self {
        Self {
            room_repository,
            message_repository,
        }
    }

    /// Posts a message into an existing room
    ///
    /// The room check and the insert are separate calls; there is no foreign
    /// key keeping them consistent afterwards.
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        room_id: i64,
        request: MessageCreateRequest,
    ) -> Result<MessageResponse, AppError> {
        if !self.room_repository.exists_by_id(room_id).await? {
            warn!(room_id, "Cannot post message, room does not exist");
            return Err(AppError::NotFound(format!("Room {} not found", room_id)));
        }

        let message = NewMessage::new(room_id, request.sender, request.content);
        let stored = self.message_repository.insert(message).await?;
        debug!(message_id = stored.id, "Message stored");

        Ok(stored.into())
    }

    /// Lists a room's messages oldest first; an unknown room has none
    #[instrument(skip(self))]
    pub async fn list_messages(&self, room_id: i64) -> Result<Vec<MessageResponse>, AppError> {
        let messages = self.message_repository.find_by_room_id(room_id).await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete_message(&self, id: i64) -> Result<(), AppError> {
        match self.message_repository.delete_by_id(id).await? {
            DeleteMessageResult::Deleted => Ok(()),
            DeleteMessageResult::NotFound => {
                warn!(message_id = id, "Message not found for deletion");
                Err(AppError::NotFound(format!("Message {} not found", id)))
            }
        }
    }
}
