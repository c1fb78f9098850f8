use tracing::debug;

pub const PING_RESPONSE: &str = "Pong! Diary backend is alive.";

/// Liveness probe; never touches storage
///
/// GET /api/ping
pub async fn ping() -> &'static str {
    debug!("Ping received");
    PING_RESPONSE
}
