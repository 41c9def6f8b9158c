//! Guild Prefix Cache
//!
//! Process-wide mapping from guild id to command prefix, fronting the
//! remote document store. Reads are cache-aside: a memory hit returns
//! without I/O, a miss fetches the guild's configuration document and
//! populates the map. Writes go through to the store.
//!
//! The empty string is a meaningful prefix value: "no custom prefix
//! configured, use the platform default". Entries are never evicted;
//! the map grows with the number of guilds the bot has seen, which is
//! bounded in practice by guild membership.

use dashmap::DashMap;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::GuildId;
use crate::infrastructure::store::{paths, DocumentStore};
use crate::shared::error::StoreError;

/// Name of the prefix field inside a guild configuration document.
const PREFIX_FIELD: &str = "prefix";

/// Cache of per-guild command prefixes.
///
/// Construct once at startup and share via `Arc`; the cache is the sole
/// owner of the in-memory copies. Operations for the same guild are
/// serialized by a per-guild mutex, so a multi-threaded host keeps the
/// read-populate and update-write sequences free of lost updates.
/// Operations for different guilds never contend.
pub struct PrefixCache<S> {
    store: Arc<S>,
    entries: DashMap<GuildId, String>,
    guards: DashMap<GuildId, Arc<Mutex<()>>>,
}

impl<S: DocumentStore> PrefixCache<S> {
    /// Create a new cache over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            entries: DashMap::new(),
            guards: DashMap::new(),
        }
    }

    /// Per-guild serialization guard.
    fn guard(&self, guild: GuildId) -> Arc<Mutex<()>> {
        self.guards
            .entry(guild)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// The command prefix for a guild.
    ///
    /// Serves from memory when present. On a miss the guild's
    /// configuration document is fetched; a document that does not
    /// exist yet means "no prefix configured" — an empty-prefix
    /// document is created so later lookups hit real data, and the
    /// empty string is cached and returned. Reads never rewrite an
    /// existing document.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged; they are not retried here.
    pub async fn get(&self, guild: GuildId) -> Result<String, StoreError> {
        if let Some(prefix) = self.entries.get(&guild) {
            debug!(%guild, "using cached prefix");
            return Ok(prefix.clone());
        }

        let guard = self.guard(guild);
        let _held = guard.lock().await;

        // A concurrent miss may have populated the entry while we
        // waited on the guard.
        if let Some(prefix) = self.entries.get(&guild) {
            return Ok(prefix.clone());
        }

        debug!(%guild, "retrieving prefix from store");
        let path = paths::guild_config(guild);

        let prefix = match self.store.get(&path).await? {
            Some(document) => document
                .get(PREFIX_FIELD)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            None => {
                debug!(%guild, "no configuration document, creating one");
                // Populate memory first, then materialize the document.
                // A failed write leaves the entry in place; the next
                // read is then a hit against memory while the store
                // catches up on a later write.
                self.entries.insert(guild, String::new());
                self.store.set(&path, &json!({ PREFIX_FIELD: "" })).await?;
                return Ok(String::new());
            }
        };

        self.entries.insert(guild, prefix.clone());
        Ok(prefix)
    }

    /// Set the command prefix for a guild.
    ///
    /// The in-memory entry is updated unconditionally (last writer
    /// wins), then the new value is merged into the guild's
    /// configuration document, preserving any sibling fields. There is
    /// no rollback: a failed store write leaves memory ahead of the
    /// store until a later write lands.
    pub async fn set(&self, guild: GuildId, prefix: &str) -> Result<(), StoreError> {
        let guard = self.guard(guild);
        let _held = guard.lock().await;

        self.entries.insert(guild, prefix.to_string());

        let path = paths::guild_config(guild);
        self.store
            .merge(&path, &json!({ PREFIX_FIELD: prefix }))
            .await?;

        debug!(%guild, %prefix, "prefix updated");
        Ok(())
    }

    /// Number of guilds currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
