//! Guild identifier value object.
//!
//! Guild IDs are platform-assigned 64-bit snowflakes. The bot treats
//! them as opaque: they are only ever compared, hashed, and embedded in
//! document-store paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, platform-assigned guild identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(pub u64);

impl GuildId {
    /// Create a new GuildId from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GuildId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<GuildId> for u64 {
    fn from(id: GuildId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_raw_value() {
        let id = GuildId::new(175928847299117063);
        assert_eq!(id.to_string(), "175928847299117063");
    }

    #[test]
    fn test_roundtrip_through_u64() {
        let id: GuildId = 42u64.into();
        let raw: u64 = id.into();
        assert_eq!(raw, 42);
    }
}
