use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Sender recorded when a message is posted without one
pub const DEFAULT_SENDER: &str = "me";

/// Database model for messages table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MessageModel {
    pub id: i64,
    pub room_id: i64, // Room this entry belongs to, checked on insert only
    pub sender: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A message that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub room_id: i64,
    pub sender: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Builds a message stamped with the current time
    ///
    /// The stamp is cut to microseconds, the precision of a `TIMESTAMPTZ`
    /// column, so every backend hands back the same instant it stores.
    pub fn new(room_id: i64, sender: Option<String>, content: Option<String>) -> Self {
        Self {
            room_id,
            sender: sender.unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            content,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Attaches the id the store assigned on insert
    pub fn with_id(self, id: i64) -> MessageModel {
        MessageModel {
            id,
            room_id: self.room_id,
            sender: self.sender,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
