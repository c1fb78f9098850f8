use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use diary::{MessageResponse, RoomResponse};

/// Thin request helper around the application router
#[derive(Clone)]
pub struct ApiClient {
    router: Router,
}

impl ApiClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Sends a request and returns the status with the raw body bytes
    pub async fn send(&self, method: &str, uri: &str, json: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match json {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub async fn create_room(&self, body: Value) -> RoomResponse {
        let (status, body) = self.send("POST", "/api/rooms", Some(body)).await;
        assert_eq!(status, StatusCode::OK, "room creation should succeed");
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn list_rooms(&self) -> Vec<RoomResponse> {
        let (status, body) = self.send("GET", "/api/rooms", None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn post_message(&self, room_id: i64, body: Value) -> (StatusCode, Value) {
        let uri = format!("/api/rooms/{}/messages", room_id);
        let (status, body) = self.send("POST", &uri, Some(body)).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn list_messages(&self, room_id: i64) -> Vec<MessageResponse> {
        let uri = format!("/api/rooms/{}/messages", room_id);
        let (status, body) = self.send("GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn delete_message(&self, id: i64) -> StatusCode {
        let uri = format!("/api/messages/{}", id);
        self.send("DELETE", &uri, None).await.0
    }
}
