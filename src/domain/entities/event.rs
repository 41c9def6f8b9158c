//! Calendar event entity and repository trait.
//!
//! Events live in the per-guild `events` collection of the document
//! store. Each document carries at least an `id` (four-digit, unique
//! within the guild) and a `time`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EventId, GuildId};
use crate::shared::error::StoreError;

/// A scheduled event on a guild's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Four-digit id, unique within the guild's event collection
    pub id: EventId,

    /// When the event takes place
    pub time: DateTime<Utc>,

    /// Short human-readable title
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Repository trait for calendar event access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event into the guild's collection.
    async fn insert(&self, guild: GuildId, event: &CalendarEvent) -> Result<(), StoreError>;

    /// All events for a guild, ordered by time ascending.
    async fn upcoming(&self, guild: GuildId) -> Result<Vec<CalendarEvent>, StoreError>;

    /// Whether any event in the guild's collection carries the given id.
    async fn id_exists(&self, guild: GuildId, id: EventId) -> Result<bool, StoreError>;
}
