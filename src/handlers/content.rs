use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

/// GET / - service banner
///
/// Static JSON under the same cache policy as the profile route. The
/// timestamp makes cached copies easy to spot by eye.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    (
        state.cache.headers(),
        Json(json!({
            "message": "Profile lookup service",
            "timestamp": chrono::Utc::now(),
        })),
    )
}
