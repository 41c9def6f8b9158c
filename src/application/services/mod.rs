//! Application Services

pub mod event_ids;

pub use event_ids::{EventIdAllocator, EventIdError};
