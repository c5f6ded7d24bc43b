use std::sync::Arc;

use anyhow::{Context, Result};

use profile_api::{
    app,
    config::CachePolicy,
    store::{memory::MemoryStore, ProfileStore},
    AppState,
};

pub struct TestApp {
    pub base_url: String,
}

/// Spawn the service in-process on an ephemeral port, backed by the
/// demo store and the default cache policy.
pub async fn spawn_app() -> Result<TestApp> {
    spawn_app_with(CachePolicy::default()).await
}

/// Spawn with a specific cache policy.
pub async fn spawn_app_with(cache: CachePolicy) -> Result<TestApp> {
    spawn_app_with_store(Arc::new(MemoryStore::demo()), cache).await
}

/// Spawn with a specific store backend.
pub async fn spawn_app_with_store(
    store: Arc<dyn ProfileStore>,
    cache: CachePolicy,
) -> Result<TestApp> {
    let state = AppState { store, cache };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr().context("listener has no local addr")?;

    // The task dies with the test runtime; no cleanup needed
    tokio::spawn(async move {
        let _ = axum::serve(listener, app(state)).await;
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
    })
}
