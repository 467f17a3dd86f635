//! The two fixed JSON responses the stub can produce.
//!
//! Bodies are byte-exact literals (note the space after the colon), which is
//! what existing clients of the stub compare against.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Body returned for every accepted upload.
pub const UPLOAD_ACK_BODY: &str = r#"{"status": "ok"}"#;

/// Body returned for every unknown method/path.
pub const NOT_FOUND_BODY: &str = r#"{"error": "not found"}"#;

fn json(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// 200 with `{"status": "ok"}`.
pub fn upload_ack() -> Response {
    json(StatusCode::OK, UPLOAD_ACK_BODY)
}

/// 404 with `{"error": "not found"}`.
pub fn not_found() -> Response {
    json(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn ack_is_exact() {
        let response = upload_ack();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_of(response).await, r#"{"status": "ok"}"#);
    }

    #[tokio::test]
    async fn not_found_is_exact() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_of(response).await, r#"{"error": "not found"}"#);
    }

    #[test]
    fn bodies_are_valid_json() {
        let ack: Value = serde_json::from_str(UPLOAD_ACK_BODY).unwrap();
        let miss: Value = serde_json::from_str(NOT_FOUND_BODY).unwrap();
        assert_eq!(ack, json!({"status": "ok"}));
        assert_eq!(miss, json!({"error": "not found"}));
    }
}
