//! Prefix cache flow tests over the in-memory store.

use std::sync::Arc;

use guildbot::domain::GuildId;
use guildbot::infrastructure::cache::PrefixCache;
use guildbot::infrastructure::store::MemoryDocumentStore;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_unconfigured_guild_gets_a_materialized_empty_document() {
    let store = Arc::new(MemoryDocumentStore::new());
    let cache = PrefixCache::new(store.clone());
    let guild = GuildId::new(42);

    assert_eq!(cache.get(guild).await.unwrap(), "");
    assert_eq!(
        store.document("root/42/config").await,
        Some(json!({"prefix": ""}))
    );

    // Later lookups are pure memory hits.
    let reads = store.read_count().await;
    assert_eq!(cache.get(guild).await.unwrap(), "");
    assert_eq!(store.read_count().await, reads);
}

#[tokio::test]
async fn test_write_through_is_visible_to_a_fresh_cache() {
    let store = Arc::new(MemoryDocumentStore::new());
    let guild = GuildId::new(7);

    let first = PrefixCache::new(store.clone());
    first.set(guild, "$").await.unwrap();

    // A second cache instance over the same store (fresh process)
    // observes the written value.
    let second = PrefixCache::new(store.clone());
    assert_eq!(second.get(guild).await.unwrap(), "$");
}

#[tokio::test]
async fn test_repeated_sets_are_last_writer_wins() {
    let store = Arc::new(MemoryDocumentStore::new());
    let cache = PrefixCache::new(store.clone());
    let guild = GuildId::new(9);

    cache.set(guild, "!").await.unwrap();
    cache.set(guild, "?").await.unwrap();
    cache.set(guild, "?").await.unwrap();

    assert_eq!(cache.get(guild).await.unwrap(), "?");
    assert_eq!(
        store.document("root/9/config").await,
        Some(json!({"prefix": "?"}))
    );
}

#[tokio::test]
async fn test_concurrent_misses_converge_on_one_entry() {
    let store = Arc::new(MemoryDocumentStore::new());
    let cache = Arc::new(PrefixCache::new(store.clone()));
    let guild = GuildId::new(11);

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.get(guild).await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), "");
    }

    // The per-guild guard collapses the stampede to one fetch and one
    // synthesizing write.
    assert_eq!(store.write_count().await, 1);
    assert_eq!(cache.len(), 1);
}
