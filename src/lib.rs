//! # Guildbot Core Library
//!
//! Core services for a Discord-style guild bot:
//! - Two-tier bot configuration (shipped defaults merged with operator
//!   overrides, validated field by field)
//! - A per-guild command prefix cache fronting a remote document store
//! - Collision-checked four-digit calendar event id allocation
//!
//! ## Module Structure
//!
//! ```text
//! guildbot/
//! +-- config/         Settings, configuration schema and resolution
//! +-- domain/         Entities and value objects
//! +-- application/    Services over the domain seams
//! +-- infrastructure/ Document store backends, caches, repositories
//! +-- shared/         Common utilities (errors)
//! +-- startup         Core service construction
//! +-- telemetry       Logging setup
//! ```

// Configuration module
pub mod config;

// Domain layer - core types
pub mod domain;

// Application layer - services
pub mod application;

// Infrastructure layer - external implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
