//! Document Store
//!
//! Connection management and backends for the remote document store.
//!
//! This module provides:
//! - The backend-agnostic [`DocumentStore`] trait
//! - A redis implementation for production
//! - An in-memory implementation for tests and local runs
//! - The `paths` module mapping bot concepts to document paths

mod document_store;
mod memory;
mod redis_store;

pub use document_store::DocumentStore;
pub use memory::MemoryDocumentStore;
pub use redis_store::RedisDocumentStore;

#[cfg(test)]
pub use document_store::MockDocumentStore;

pub use crate::shared::error::StoreError;

use ::redis::aio::ConnectionManager;
use ::redis::Client;
use tracing::info;

use crate::config::StoreSettings;

/// Creates a redis connection manager with automatic reconnection.
pub async fn create_connection(
    settings: &StoreSettings,
) -> Result<ConnectionManager, ::redis::RedisError> {
    info!(url = %settings.url, "connecting to document store");
    let client = Client::open(settings.url.as_str())?;
    let manager = ConnectionManager::new(client).await?;
    info!("document store connection established");
    Ok(manager)
}

/// Creates a [`RedisDocumentStore`] from settings, honoring the
/// configured namespace.
pub async fn create_store(
    settings: &StoreSettings,
) -> Result<RedisDocumentStore, ::redis::RedisError> {
    let conn = create_connection(settings).await?;
    Ok(match &settings.namespace {
        Some(ns) => RedisDocumentStore::with_namespace(conn, ns.as_str()),
        None => RedisDocumentStore::new(conn),
    })
}

/// Document paths for per-guild bot data.
///
/// Use these helpers to ensure consistent path naming across the
/// application.
pub mod paths {
    use crate::domain::GuildId;

    /// Root segment of every bot document path
    pub const ROOT: &str = "root";

    /// Per-guild configuration document (`{ prefix: string, ... }`)
    #[inline]
    pub fn guild_config(guild: GuildId) -> String {
        format!("{}/{}/config", ROOT, guild)
    }

    /// Per-guild calendar event collection
    #[inline]
    pub fn guild_events(guild: GuildId) -> String {
        format!("{}/{}/events", ROOT, guild)
    }

}
