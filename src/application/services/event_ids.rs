//! Calendar event id allocation.
//!
//! New calendar events get a four-digit id that must not collide with
//! any event already stored for the guild. The store cannot enforce
//! uniqueness itself, so allocation is draw-probe-retry: draw a uniform
//! random id, probe the guild's collection for it, redraw on collision.
//!
//! The probe and the eventual event insert are separate store
//! operations. Two concurrent allocations for the same guild can both
//! pass the probe with the same draw and produce a duplicate; the
//! single-threaded command host serializes allocations in practice, so
//! this window is documented rather than locked away.

use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{EventId, EventRepository, GuildId};
use crate::shared::error::StoreError;

/// Errors from event id allocation.
#[derive(Debug, thiserror::Error)]
pub enum EventIdError {
    /// Every attempt drew an id that already exists. Either the guild's
    /// calendar is saturating the four-digit space or the store is
    /// returning stale data.
    #[error("no free event id found after {attempts} attempts")]
    SpaceExhausted { attempts: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Allocator for guild-unique four-digit event ids.
///
/// One remote probe per attempt, no candidate batching. The attempt cap
/// turns a pathological store (or a truly full calendar) into a
/// distinct error instead of an unbounded retry loop.
pub struct EventIdAllocator<R> {
    events: Arc<R>,
    max_attempts: u32,
}

impl<R: EventRepository> EventIdAllocator<R> {
    /// Create an allocator probing through the given repository.
    pub fn new(events: Arc<R>, max_attempts: u32) -> Self {
        Self {
            events,
            max_attempts,
        }
    }

    /// Allocate an event id that is free in the guild's collection at
    /// the moment of the probe.
    ///
    /// # Errors
    ///
    /// [`EventIdError::SpaceExhausted`] after `max_attempts` colliding
    /// draws; store failures propagate immediately.
    pub async fn allocate(&self, guild: GuildId) -> Result<EventId, EventIdError> {
        for attempt in 1..=self.max_attempts {
            let candidate = Self::draw();

            if self.events.id_exists(guild, candidate).await? {
                debug!(%guild, %candidate, attempt, "event id collision, redrawing");
                continue;
            }

            return Ok(candidate);
        }

        warn!(%guild, attempts = self.max_attempts, "event id space exhausted");
        Err(EventIdError::SpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Uniform draw over the whole four-digit range.
    fn draw() -> EventId {
        let raw = rand::rng().random_range(EventId::MIN..=EventId::MAX);
        EventId::new(raw).expect("draw is within the event id range")
    }
}
