use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

use super::models::{NewRoom, RoomModel};
use crate::shared::AppError;

/// Trait for room repository operations
#[async_trait]
pub trait RoomRepository {
    /// Persists a new room and returns it with its generated id
    async fn insert(&self, room: NewRoom) -> Result<RoomModel, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<RoomModel>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    /// Lists every room in insertion order
    async fn find_all(&self) -> Result<Vec<RoomModel>, AppError>;
}

struct RoomStore {
    rooms: BTreeMap<i64, RoomModel>,
    next_id: i64,
}

/// In-memory implementation of RoomRepository for development and testing
///
/// Ids start at 1 and increase by one per insert, so the `BTreeMap` keeps
/// rooms in insertion order. Data is lost when the process exits.
pub struct InMemoryRoomRepository {
    store: Mutex<RoomStore>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            store: Mutex::new(RoomStore {
                rooms: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the current number of rooms in the repository
    pub fn room_count(&self) -> usize {
        self.store.lock().map(|s| s.rooms.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, RoomStore>, AppError> {
        self.store.lock().map_err(|_| {
            warn!("Room store mutex poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self, room))]
    async fn insert(&self, room: NewRoom) -> Result<RoomModel, AppError> {
        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;

        let stored = room.with_id(id);
        store.rooms.insert(id, stored.clone());

        debug!(room_id = id, "Room created successfully in memory");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = id, "Fetching room from memory");

        let room = self.lock()?.rooms.get(&id).cloned();
        if room.is_none() {
            debug!(room_id = id, "Room not found in memory");
        }

        Ok(room)
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock()?.rooms.contains_key(&id))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<RoomModel>, AppError> {
        debug!("Listing all rooms in memory");

        let rooms: Vec<RoomModel> = self.lock()?.rooms.values().cloned().collect();

        debug!(room_count = rooms.len(), "Rooms listed successfully in memory");
        Ok(rooms)
    }
}

/// PostgreSQL implementation of room repository
pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    #[instrument(skip(self, room))]
    async fn insert(&self, room: NewRoom) -> Result<RoomModel, AppError> {
        debug!("Creating room in database");

        let stored = sqlx::query_as::<_, RoomModel>(
            "INSERT INTO rooms (name, theme) VALUES ($1, $2) RETURNING id, name, theme",
        )
        .bind(&room.name)
        .bind(&room.theme)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create room in database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(room_id = stored.id, "Room created successfully in database");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = id, "Fetching room from database");

        sqlx::query_as::<_, RoomModel>("SELECT id, name, theme FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, room_id = id, "Failed to fetch room from database");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self))]
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM rooms WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, room_id = id, "Failed to check room existence");
                AppError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<RoomModel>, AppError> {
        debug!("Listing all rooms in database");

        let rooms = sqlx::query_as::<_, RoomModel>("SELECT id, name, theme FROM rooms ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list rooms from database");
                AppError::DatabaseError(e.to_string())
            })?;

        debug!(room_count = rooms.len(), "Rooms listed successfully in database");
        Ok(rooms)
    }
}
