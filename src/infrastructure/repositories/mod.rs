//! Repository Implementations
//!
//! Document-store implementations of the domain repository traits.

mod event_repository;

pub use event_repository::DocumentEventRepository;
