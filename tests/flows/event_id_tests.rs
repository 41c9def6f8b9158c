//! Event id allocation flow tests over the in-memory store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use guildbot::application::services::{EventIdAllocator, EventIdError};
use guildbot::domain::{CalendarEvent, EventId, EventRepository, GuildId};
use guildbot::infrastructure::repositories::DocumentEventRepository;
use guildbot::infrastructure::store::{MemoryDocumentStore, StoreError};

fn event(id: EventId, minutes_from_now: i64) -> CalendarEvent {
    CalendarEvent {
        id,
        time: Utc::now() + Duration::minutes(minutes_from_now),
        title: format!("event {}", id),
        description: None,
    }
}

#[tokio::test]
async fn test_allocate_and_insert_stays_collision_free() {
    let store = Arc::new(MemoryDocumentStore::new());
    let events = Arc::new(DocumentEventRepository::new(store));
    let allocator = EventIdAllocator::new(events.clone(), 64);
    let guild = GuildId::new(1);

    // The calendar-creation loop: allocate, then persist the event
    // under the allocated id.
    let mut seen = Vec::new();
    for i in 0..20 {
        let id = allocator.allocate(guild).await.unwrap();
        events.insert(guild, &event(id, i)).await.unwrap();

        assert!((EventId::MIN..=EventId::MAX).contains(&id.as_u16()));
        assert!(!seen.contains(&id), "allocator returned a duplicate id");
        seen.push(id);
    }

    assert_eq!(events.upcoming(guild).await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_existing_ids_are_never_returned() {
    let store = Arc::new(MemoryDocumentStore::new());
    let events = Arc::new(DocumentEventRepository::new(store));
    let guild = GuildId::new(2);

    for (id, offset) in [(3000u16, 1i64), (4000, 2)] {
        events
            .insert(guild, &event(EventId::new(id).unwrap(), offset))
            .await
            .unwrap();
    }

    let allocator = EventIdAllocator::new(events, 64);
    for _ in 0..100 {
        let id = allocator.allocate(guild).await.unwrap();
        assert_ne!(id.as_u16(), 3000);
        assert_ne!(id.as_u16(), 4000);
    }
}

#[tokio::test]
async fn test_saturated_id_space_fails_with_a_bounded_error() {
    // A bounded stand-in for a collection covering the entire id
    // range: every probe answers "taken". Allocation must terminate
    // with the exhaustion error rather than spin forever.
    let allocator = EventIdAllocator::new(Arc::new(SaturatedRepository), 8);

    let err = allocator.allocate(GuildId::new(3)).await.unwrap_err();
    assert!(matches!(err, EventIdError::SpaceExhausted { attempts: 8 }));
}

/// Repository standing in for a guild whose collection covers the
/// entire id range.
struct SaturatedRepository;

#[async_trait::async_trait]
impl EventRepository for SaturatedRepository {
    async fn insert(&self, _guild: GuildId, _event: &CalendarEvent) -> Result<(), StoreError> {
        Ok(())
    }

    async fn upcoming(&self, _guild: GuildId) -> Result<Vec<CalendarEvent>, StoreError> {
        Ok(Vec::new())
    }

    async fn id_exists(&self, _guild: GuildId, _id: EventId) -> Result<bool, StoreError> {
        Ok(true)
    }
}
