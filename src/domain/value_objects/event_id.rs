//! Calendar event identifier value object.
//!
//! Event IDs are short four-digit integers in the closed range
//! 1000-9999, unique only within a single guild's event collection.
//! They exist so members can reference an event by a number short
//! enough to type into a chat message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A four-digit calendar event identifier, scoped to one guild.
///
/// Serializes as a bare integer; deserialization enforces the range,
/// so an out-of-range id in a stored document surfaces as a decode
/// error instead of leaking into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct EventId(u16);

/// Error returned when a raw value falls outside the four-digit range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("event id {value} is outside the range {min}-{max}", value = .0, min = EventId::MIN, max = EventId::MAX)]
pub struct EventIdOutOfRange(pub u16);

impl EventId {
    /// Smallest valid event id.
    pub const MIN: u16 = 1000;

    /// Largest valid event id.
    pub const MAX: u16 = 9999;

    /// Number of distinct event ids.
    pub const SPACE: u32 = (Self::MAX - Self::MIN + 1) as u32;

    /// Create an EventId, validating the four-digit range.
    pub fn new(value: u16) -> Result<Self, EventIdOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EventIdOutOfRange(value))
        }
    }

    /// Get the raw u16 value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for EventId {
    type Error = EventIdOutOfRange;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventId> for u16 {
    fn from(id: EventId) -> Self {
        id.0
    }
}
