use std::sync::Arc;
use tracing::{debug, instrument};

use super::{
    models::NewRoom,
    repository::RoomRepository,
    types::{RoomCreateRequest, RoomResponse},
};
use crate::shared::AppError;

/// Service for room operations
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates a new room; name and theme are stored exactly as given
    #[instrument(skip(self))]
    pub async fn create_room(&self, request: RoomCreateRequest) -> Result<RoomResponse, AppError> {
        let room = self
            .repository
            .insert(NewRoom::new(request.name, request.theme))
            .await?;
        debug!(room_id = room.id, "Room stored");

        Ok(room.into())
    }

    /// Lists all rooms
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<RoomResponse>, AppError> {
        let rooms = self.repository.find_all().await?;
        Ok(rooms.into_iter().map(RoomResponse::from).collect())
    }
}
