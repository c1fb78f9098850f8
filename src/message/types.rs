use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::MessageModel;

/// Request payload for posting a diary entry
///
/// Only `sender` and `content` are read; `id`, `roomId` and `createdAt`
/// are always decided by the server.
#[derive(Debug, Default, Deserialize)]
pub struct MessageCreateRequest {
    pub sender: Option<String>,
    pub content: Option<String>,
}

/// Response for a stored message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub room_id: i64,
    pub sender: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageModel> for MessageResponse {
    fn from(message: MessageModel) -> Self {
        Self {
            id: message.id,
            room_id: message.room_id,
            sender: message.sender,
            content: message.content,
            created_at: message.created_at,
        }
    }
}
