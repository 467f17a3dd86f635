//! Request dispatch: the single upload route, and 404 for everything else.
//!
//! Matching is done by hand rather than with a method router so that a miss
//! carries no `Allow` header, and so that a query string counts as part of
//! the target (`/upload?x=1` is not `/upload`).

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use crate::http::request::{declared_length, read_declared_body};
use crate::http::response;
use crate::http::server::AppState;
use crate::payload;

/// Path of the only recognised route.
pub const UPLOAD_PATH: &str = "/upload";

/// True only for `POST` to exactly `/upload` with no query.
pub fn is_upload(method: &Method, uri: &Uri) -> bool {
    *method == Method::POST && uri.path() == UPLOAD_PATH && uri.query().is_none()
}

/// Entry point for every request.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    if is_upload(&method, &uri) {
        upload(&state, &headers, body).await
    } else {
        response::not_found()
    }
}

/// Read the declared body, decode it, log it, acknowledge.
async fn upload(state: &AppState, headers: &HeaderMap, body: Body) -> Response {
    let declared = declared_length(headers);
    let bytes = read_declared_body(body, declared, state.body_read_timeout).await;

    let payload = payload::decode(&bytes);
    tracing::info!(
        payload = %payload,
        json = payload.is_json(),
        bytes = bytes.len(),
        "Received upload"
    );

    response::upload_ack()
}
