//! # Domain Layer
//!
//! Core domain types for the bot, independent of any infrastructure
//! concerns.
//!
//! - **entities**: calendar events and their repository contract
//! - **value_objects**: guild and event identifiers

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
