use std::path::PathBuf;
use std::sync::Arc;

use diary::{build_router, AppState, InMemoryMessageRepository, InMemoryRoomRepository};

use super::actions::ApiClient;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Full application over in-memory storage, with handles on both stores
pub struct TestApp {
    pub client: ApiClient,
    pub rooms: Arc<InMemoryRoomRepository>,
    pub messages: Arc<InMemoryMessageRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_static_dir(dir: PathBuf) -> Self {
        Self::build(Some(dir))
    }

    fn build(static_dir: Option<PathBuf>) -> Self {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let state = AppState::new(rooms.clone(), messages.clone());

        Self {
            client: ApiClient::new(build_router(state, static_dir)),
            rooms,
            messages,
        }
    }
}
