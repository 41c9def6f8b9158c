//! Application Startup
//!
//! Core service construction and shared state.

use std::sync::Arc;

use crate::application::services::EventIdAllocator;
use crate::config::{BotConfig, Settings};
use crate::infrastructure::cache::PrefixCache;
use crate::infrastructure::repositories::DocumentEventRepository;
use crate::infrastructure::store::{self, RedisDocumentStore, StoreError};
use crate::shared::error::AppError;

/// Shared application state for the host layers.
///
/// Everything here is constructed exactly once and handed out by
/// reference; nothing reaches for process-global accessors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RedisDocumentStore>,
    pub prefixes: Arc<PrefixCache<RedisDocumentStore>>,
    pub events: Arc<DocumentEventRepository<RedisDocumentStore>>,
    pub event_ids: Arc<EventIdAllocator<DocumentEventRepository<RedisDocumentStore>>>,
    pub config: Arc<BotConfig>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build the core services from settings and the resolved bot
    /// configuration.
    pub async fn build(settings: Settings, config: BotConfig) -> Result<Self, AppError> {
        let store = Arc::new(
            store::create_store(&settings.store)
                .await
                .map_err(StoreError::from)?,
        );
        tracing::info!("document store ready");

        let prefixes = Arc::new(PrefixCache::new(store.clone()));
        let events = Arc::new(DocumentEventRepository::new(store.clone()));
        let event_ids = Arc::new(EventIdAllocator::new(
            events.clone(),
            settings.calendar.id_max_attempts,
        ));

        Ok(Self {
            store,
            prefixes,
            events,
            event_ids,
            config: Arc::new(config),
            settings: Arc::new(settings),
        })
    }
}
