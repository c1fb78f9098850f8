use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

use super::models::{MessageModel, NewMessage};
use crate::shared::AppError;

/// Result of attempting to delete a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMessageResult {
    Deleted,
    NotFound,
}

/// Trait for message repository operations
#[async_trait]
pub trait MessageRepository {
    /// Persists a new message and returns it with its generated id
    async fn insert(&self, message: NewMessage) -> Result<MessageModel, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MessageModel>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    /// Messages of one room, oldest first (ties broken by id)
    async fn find_by_room_id(&self, room_id: i64) -> Result<Vec<MessageModel>, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<DeleteMessageResult, AppError>;
}

struct MessageStore {
    messages: BTreeMap<i64, MessageModel>,
    next_id: i64,
}

/// In-memory implementation of MessageRepository for development and testing
pub struct InMemoryMessageRepository {
    store: Mutex<MessageStore>,
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMessageRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            store: Mutex::new(MessageStore {
                messages: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the current number of messages across all rooms
    pub fn message_count(&self) -> usize {
        self.store.lock().map(|s| s.messages.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, MessageStore>, AppError> {
        self.store.lock().map_err(|_| {
            warn!("Message store mutex poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    #[instrument(skip(self, message), fields(room_id = message.room_id))]
    async fn insert(&self, message: NewMessage) -> Result<MessageModel, AppError> {
        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;

        let stored = message.with_id(id);
        store.messages.insert(id, stored.clone());

        debug!(message_id = id, "Message created successfully in memory");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<MessageModel>, AppError> {
        Ok(self.lock()?.messages.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock()?.messages.contains_key(&id))
    }

    #[instrument(skip(self))]
    async fn find_by_room_id(&self, room_id: i64) -> Result<Vec<MessageModel>, AppError> {
        debug!(room_id, "Listing room messages in memory");

        let mut messages: Vec<MessageModel> = self
            .lock()?
            .messages
            .values()
            .filter(|m| m.room_id == room_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| (m.created_at, m.id));

        debug!(room_id, message_count = messages.len(), "Room messages listed");
        Ok(messages)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<DeleteMessageResult, AppError> {
        if self.lock()?.messages.remove(&id).is_none() {
            debug!(message_id = id, "Message not found for deletion in memory");
            return Ok(DeleteMessageResult::NotFound);
        }

        debug!(message_id = id, "Message deleted successfully from memory");
        Ok(DeleteMessageResult::Deleted)
    }
}

/// PostgreSQL implementation of message repository
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    #[instrument(skip(self, message), fields(room_id = message.room_id))]
    async fn insert(&self, message: NewMessage) -> Result<MessageModel, AppError> {
        debug!("Creating message in database");

        let stored = sqlx::query_as::<_, MessageModel>(
            "INSERT INTO messages (room_id, sender, content, created_at) VALUES ($1, $2, $3, $4) \
             RETURNING id, room_id, sender, content, created_at",
        )
        .bind(message.room_id)
        .bind(&message.sender)
        .bind(&message.content)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create message in database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(message_id = stored.id, "Message created successfully in database");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<MessageModel>, AppError> {
        sqlx::query_as::<_, MessageModel>(
            "SELECT id, room_id, sender, content, created_at FROM messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, message_id = id, "Failed to fetch message from database");
            AppError::DatabaseError(e.to_string())
        })
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM messages WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, message_id = id, "Failed to check message existence");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self))]
    async fn find_by_room_id(&self, room_id: i64) -> Result<Vec<MessageModel>, AppError> {
        debug!(room_id, "Listing room messages in database");

        let messages = sqlx::query_as::<_, MessageModel>(
            "SELECT id, room_id, sender, content, created_at FROM messages \
             WHERE room_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, room_id, "Failed to list room messages from database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(room_id, message_count = messages.len(), "Room messages listed");
        Ok(messages)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<DeleteMessageResult, AppError> {
        debug!(message_id = id, "Deleting message from database");

        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, message_id = id, "Failed to delete message from database");
                AppError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            debug!(message_id = id, "Message not found for deletion");
            return Ok(DeleteMessageResult::NotFound);
        }

        debug!(message_id = id, "Message deleted successfully from database");
        Ok(DeleteMessageResult::Deleted)
    }
}
