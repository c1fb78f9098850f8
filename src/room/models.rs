use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for rooms table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct RoomModel {
    pub id: i64,               // Storage-assigned identity
    pub name: Option<String>,  // e.g. "2025 Journal"
    pub theme: Option<String>, // e.g. "work", "mental-health"
}

/// A room that has not been persisted yet and therefore has no id
#[derive(Debug, Clone, Default)]
pub struct NewRoom {
    pub name: Option<String>,
    pub theme: Option<String>,
}

impl NewRoom {
    pub fn new(name: Option<String>, theme: Option<String>) -> Self {
        Self { name, theme }
    }

    /// Attaches the id the store assigned on insert
    pub fn with_id(self, id: i64) -> RoomModel {
        RoomModel {
            id,
            name: self.name,
            theme: self.theme,
        }
    }
}
