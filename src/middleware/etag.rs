use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};
use tracing::error;

/// Strong-validator middleware for cacheable responses.
///
/// Successful responses are buffered, tagged with a SHA-256 ETag, and
/// compared against the request's If-None-Match. An exact match turns
/// into a 304 that keeps the cache headers and drops the body. Error
/// responses and responses that already carry an ETag pass through
/// untouched.
pub async fn etag_middleware(request: Request, next: Next) -> Response {
    let if_none_match = request
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let response = next.run(request).await;

    if response.status() != StatusCode::OK || response.headers().contains_key(header::ETAG) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("Failed to buffer response body: {}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    // An empty body has nothing to validate
    if bytes.is_empty() {
        return Response::from_parts(parts, Body::from(bytes));
    }

    let etag = response_etag(&bytes);
    match HeaderValue::from_str(&etag) {
        Ok(value) => {
            parts.headers.insert(header::ETAG, value);
        }
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    }

    if if_none_match.as_deref() == Some(etag.as_str()) {
        parts.status = StatusCode::NOT_MODIFIED;
        parts.headers.remove(header::CONTENT_TYPE);
        parts.headers.remove(header::CONTENT_LENGTH);
        return Response::from_parts(parts, Body::empty());
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Quoted SHA-256 hex digest of the response body.
fn response_etag(body: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted_sha256_hex() {
        assert_eq!(
            response_etag(b"hello"),
            "\"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\""
        );
    }

    #[test]
    fn etag_is_content_sensitive() {
        assert_eq!(response_etag(b"{}"), response_etag(b"{}"));
        assert_ne!(response_etag(b"{}"), response_etag(b"[]"));
    }
}
