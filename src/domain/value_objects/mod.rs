//! Value Objects
//!
//! Immutable domain value types.

mod event_id;
mod guild;

pub use event_id::{EventId, EventIdOutOfRange};
pub use guild::GuildId;
