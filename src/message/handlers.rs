use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::MessageService,
    types::{MessageCreateRequest, MessageResponse},
};
use crate::shared::{AppError, AppState};

fn message_service(state: &AppState) -> MessageService {
    MessageService::new(
        Arc::clone(&state.room_repository),
        Arc::clone(&state.message_repository),
    )
}

/// HTTP handler for posting a diary entry into a room
///
/// POST /api/rooms/:room_id/messages
/// Returns 404 when the room does not exist
#[instrument(name = "create_message", skip(state, request))]
pub async fn create_message(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Json(request): Json<MessageCreateRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    info!(room_id, "Creating new message");

    let message = message_service(&state).create_message(room_id, request).await?;

    info!(room_id, message_id = message.id, "Message created successfully");

    Ok(Json(message))
}

/// HTTP handler for listing a room's entries, oldest first
///
/// GET /api/rooms/:room_id/messages
#[instrument(name = "list_messages", skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = message_service(&state).list_messages(room_id).await?;

    info!(room_id, message_count = messages.len(), "Messages listed successfully");

    Ok(Json(messages))
}

/// HTTP handler for deleting a single entry
///
/// DELETE /api/messages/:id
/// 204 on success, 404 when no such message exists
#[instrument(name = "delete_message", skip(state))]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    message_service(&state).delete_message(id).await?;

    info!(message_id = id, "Message deleted successfully");

    Ok(StatusCode::NO_CONTENT)
}
