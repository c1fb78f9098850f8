use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::RoomService,
    types::{RoomCreateRequest, RoomResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a new room
///
/// POST /api/rooms
/// Returns the stored room with its generated ID
#[instrument(name = "create_room", skip(state))]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<RoomCreateRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    info!("Creating new room");

    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.create_room(request).await?;

    info!(room_id = room.id, "Room created successfully");

    Ok(Json(room))
}

/// HTTP handler for listing all rooms
///
/// GET /api/rooms
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomResponse>>, AppError> {
    info!("Listing all rooms");

    let service = RoomService::new(Arc::clone(&state.room_repository));
    let rooms = service.list_rooms().await?;

    info!(room_count = rooms.len(), "Rooms listed successfully");

    Ok(Json(rooms))
}
