//! Upload body extraction.
//!
//! The body length is whatever `Content-Length` declares, not what the
//! transport framed. A short body is truncated to the bytes that arrived.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap};
use futures_util::StreamExt;
use tokio::time::{timeout_at, Instant};

/// Upper bound on the buffer reserved up front for a declared length.
const MAX_PREALLOC: usize = 64 * 1024;

/// Declared body length: `Content-Length` as an integer, or 0 when the
/// header is missing or not a number.
///
/// Over the wire hyper answers a malformed `Content-Length` with a bare 400
/// before routing, so the "not a number" branch only applies to requests
/// built in-process (tests, or the router driven directly as a service).
pub fn declared_length(headers: &HeaderMap) -> usize {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

/// Read at most `declared` bytes from `body`.
///
/// Stops early at end of stream, on a transport error, or once `limit` has
/// elapsed. In every case the bytes received so far are returned.
pub async fn read_declared_body(body: Body, declared: usize, limit: Duration) -> Vec<u8> {
    let mut buf = Vec::with_capacity(declared.min(MAX_PREALLOC));
    if declared == 0 {
        return buf;
    }

    let deadline = Instant::now() + limit;
    let mut stream = std::pin::pin!(body.into_data_stream());

    while buf.len() < declared {
        match timeout_at(deadline, stream.next()).await {
            Ok(Some(Ok(chunk))) => {
                let take = (declared - buf.len()).min(chunk.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(Some(Err(e))) => {
                tracing::debug!(
                    error = %e,
                    received = buf.len(),
                    declared,
                    "Upload body ended early"
                );
                break;
            }
            Ok(None) => break,
            Err(_) => {
                tracing::debug!(
                    received = buf.len(),
                    declared,
                    timeout_ms = limit.as_millis() as u64,
                    "Upload body read timed out"
                );
                break;
            }
        }
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use futures_util::stream;

    fn headers_with_length(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn missing_length_is_zero() {
        assert_eq!(declared_length(&HeaderMap::new()), 0);
    }

    #[test]
    fn numeric_length_is_used() {
        assert_eq!(declared_length(&headers_with_length("17")), 17);
    }

    #[test]
    fn malformed_length_is_zero() {
        assert_eq!(declared_length(&headers_with_length("seven")), 0);
        assert_eq!(declared_length(&headers_with_length("-3")), 0);
    }

    #[tokio::test]
    async fn reads_exactly_declared_bytes() {
        let body = Body::from("hello world");
        let bytes = read_declared_body(body, 5, Duration::from_secs(1)).await;
        assert_eq!(bytes, b"hello");
    }

    #[tokio::test]
    async fn zero_length_skips_body() {
        let body = Body::from("ignored");
        let bytes = read_declared_body(body, 0, Duration::from_secs(1)).await;
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn short_body_is_truncated() {
        let body = Body::from("abc");
        let bytes = read_declared_body(body, 100, Duration::from_secs(1)).await;
        assert_eq!(bytes, b"abc");
    }

    #[tokio::test]
    async fn chunks_are_joined_up_to_declared() {
        let chunks = stream::iter(vec![
            Ok::<_, std::io::Error>("ab"),
            Ok("cd"),
            Ok("ef"),
        ]);
        let body = Body::from_stream(chunks);
        let bytes = read_declared_body(body, 5, Duration::from_secs(1)).await;
        assert_eq!(bytes, b"abcde");
    }

    #[tokio::test]
    async fn transport_error_keeps_received_bytes() {
        let chunks = stream::iter(vec![
            Ok("par"),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ]);
        let body = Body::from_stream(chunks);
        let bytes = read_declared_body(body, 10, Duration::from_secs(1)).await;
        assert_eq!(bytes, b"par");
    }

    #[tokio::test]
    async fn stalled_body_times_out_with_received_bytes() {
        let chunks = stream::iter(vec![Ok::<_, std::io::Error>("sl")])
            .chain(stream::pending());
        let body = Body::from_stream(chunks);
        let bytes = read_declared_body(body, 10, Duration::from_millis(50)).await;
        assert_eq!(bytes, b"sl");
    }
}
