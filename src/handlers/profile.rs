use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::auth;
use crate::error::ApiError;
use crate::geo::GeoContext;
use crate::store::UserRecord;
use crate::AppState;

/// Body of a successful lookup: the stored record with the CDN viewer
/// context merged in at the top level.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserRecord,
    #[serde(flatten)]
    pub geo: GeoContext,
}

/// GET /my-info - look up the caller's own profile
///
/// The caller is identified by the `user:<key>` credential in the
/// Authorization header. A missing credential and an unknown user both
/// collapse to the same 403, so the response never reveals which keys
/// exist.
pub async fn my_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let key = auth::lookup_key(&headers).ok_or(ApiError::Unauthorized)?;

    let user = state.store.find_user(key).await?.ok_or_else(|| {
        debug!("No profile for lookup key: {}", key);
        ApiError::Unauthorized
    })?;

    let body = ProfileResponse {
        user,
        geo: GeoContext::from_headers(&headers),
    };

    Ok((state.cache.headers(), Json(body)).into_response())
}
