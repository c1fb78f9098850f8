use axum::{
    routing::{delete, get},
    Router,
};
use std::path::PathBuf;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{health, message, room, shared::AppState};

/// Routes of the JSON API, relative to `/api`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/rooms", get(room::list_rooms).post(room::create_room))
        .route(
            "/rooms/:room_id/messages",
            get(message::list_messages).post(message::create_message),
        )
        .route("/messages/:id", delete(message::delete_message))
}

/// Builds the full application router
///
/// API routes win over static files when both match.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let mut app = Router::new().nest("/api", api_routes());

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
