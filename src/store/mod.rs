use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use crate::config::StoreConfig;

pub mod memory;
pub mod postgres;

/// Errors from profile store backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// A stored user profile. The lookup key is never echoed back, so the
/// record carries only the fields the response body exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

/// Profile lookup backend.
///
/// Implementations must treat an unknown key as `Ok(None)`; errors are
/// reserved for backend failures (lost connections, bad queries).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_user(&self, key: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Build the configured store backend.
///
/// The postgres backend connects eagerly so a bad URL or unreachable
/// server fails the process at startup instead of on the first request.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn ProfileStore>, StoreError> {
    match config {
        StoreConfig::Memory => Ok(Arc::new(memory::MemoryStore::demo())),
        StoreConfig::Postgres { url, id_format } => {
            let store = postgres::PgStore::connect(url, *id_format).await?;
            Ok(Arc::new(store))
        }
    }
}
