pub mod auth;
pub mod config;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod middleware;
pub mod store;

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::CachePolicy;
use crate::store::ProfileStore;

/// Shared application state, built once at startup and injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub cache: CachePolicy,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Static content
        .route("/", get(handlers::content::root))
        // Profile lookup
        .route("/my-info", get(handlers::profile::my_info))
        // Global middleware
        .layer(from_fn(middleware::etag::etag_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
