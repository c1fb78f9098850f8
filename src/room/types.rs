use serde::{Deserialize, Serialize};

use super::models::RoomModel;

/// Request payload for creating a new room
///
/// Any `id` sent by the client is not part of this type and is dropped
/// during deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RoomCreateRequest {
    pub name: Option<String>,
    pub theme: Option<String>,
}

/// Response for room creation and room listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: i64,
    pub name: Option<String>,
    pub theme: Option<String>,
}

impl From<RoomModel> for RoomResponse {
    fn from(room: RoomModel) -> Self {
        Self {
            id: room.id,
            name: room.name,
            theme: room.theme,
        }
    }
}
