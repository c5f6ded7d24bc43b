use anyhow::Context;
use tracing::info;

use profile_api::{app, config::AppConfig, store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so local runs pick up PORT, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!("Using cache policy: {}", config.cache.cache_control());

    let store = store::connect(&config.store)
        .await
        .context("failed to initialize profile store")?;

    let state = AppState {
        store,
        cache: config.cache.clone(),
    };

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Profile service listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
