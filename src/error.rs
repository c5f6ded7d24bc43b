// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse};

use crate::store::StoreError;

/// HTTP API error with a fixed, detail-free body per status.
///
/// The public contract is deliberately coarse: a request that cannot be tied
/// to a record is 403 (missing header, malformed token, and no-match all
/// collapse here), and any store failure is a generic 500. Error detail stays
/// server-side.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // 403 Forbidden, body "UNAUTHORIZED"
    #[error("unauthorized")]
    Unauthorized,

    // 500 Internal Server Error, body "Internal Server Error"
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing body. Plain text, never internal detail.
    pub fn body(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Internal => "Internal Server Error",
        }
    }
}

// Convert store errors to ApiError
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the real error but return a generic message
        tracing::error!("profile store error: {}", err);
        ApiError::Internal
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), self.body()).into_response()
    }
}
