//! Event Repository Implementation
//!
//! Document-store implementation of calendar event access. Events live
//! in the per-guild `events` collection, one document per event, keyed
//! by the event's four-digit id.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::domain::{CalendarEvent, EventId, EventRepository, GuildId};
use crate::infrastructure::store::{paths, DocumentStore};
use crate::shared::error::StoreError;

/// Document-store event repository.
pub struct DocumentEventRepository<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> DocumentEventRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn decode(collection: &str, document: serde_json::Value) -> Result<CalendarEvent, StoreError> {
        serde_json::from_value(document).map_err(|source| StoreError::MalformedDocument {
            path: collection.to_string(),
            source,
        })
    }
}

#[async_trait]
impl<S: DocumentStore> EventRepository for DocumentEventRepository<S> {
    async fn insert(&self, guild: GuildId, event: &CalendarEvent) -> Result<(), StoreError> {
        let collection = paths::guild_events(guild);
        let document = serde_json::to_value(event).map_err(|source| StoreError::Encode {
            path: collection.clone(),
            source,
        })?;

        self.store
            .collection_add(&collection, &event.id.to_string(), &document)
            .await
    }

    async fn upcoming(&self, guild: GuildId) -> Result<Vec<CalendarEvent>, StoreError> {
        let collection = paths::guild_events(guild);
        let documents = self.store.collection_all(&collection).await?;

        let mut events = documents
            .into_iter()
            .map(|doc| Self::decode(&collection, doc))
            .collect::<Result<Vec<_>, _>>()?;
        events.sort_by_key(|e| e.time);
        Ok(events)
    }

    async fn id_exists(&self, guild: GuildId, id: EventId) -> Result<bool, StoreError> {
        let collection = paths::guild_events(guild);
        let hits = self
            .store
            .query_eq(&collection, "id", &json!(id.as_u16()))
            .await?;
        Ok(!hits.is_empty())
    }
}
