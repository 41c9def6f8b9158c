//! Document store trait.
//!
//! The bot's persistence is an external document service addressed by
//! hierarchical paths. This trait is the seam between the bot's
//! services and whichever backend is wired in (redis in production, an
//! in-memory map in tests).
//!
//! Absence of a document is not an error: `get` returns `Ok(None)` and
//! each caller decides what a missing document means. Retry and backoff
//! are the backend client's concern, never implemented here. Every
//! operation suspends at the network round trip, so a host can layer a
//! timeout by cancelling at that await without touching cache logic.

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::error::StoreError;

/// Backend-agnostic document store operations.
///
/// Documents are JSON objects stored at path keys; collections are
/// unordered sets of documents addressed by a collection path plus a
/// per-document key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the document at `path`.
    ///
    /// Returns `Ok(None)` if no document exists there.
    async fn get(&self, path: &str) -> Result<Option<Value>, StoreError>;

    /// Write the document at `path`, creating or fully replacing it.
    async fn set(&self, path: &str, document: &Value) -> Result<(), StoreError>;

    /// Merge `patch` into the document at `path`.
    ///
    /// Fields present in `patch` overwrite; sibling fields of an
    /// existing document are preserved. A missing document is created
    /// from the patch alone.
    async fn merge(&self, path: &str, patch: &Value) -> Result<(), StoreError>;

    /// Add a document to a collection under the given per-document key,
    /// replacing any document already stored under that key.
    async fn collection_add(
        &self,
        collection: &str,
        doc_key: &str,
        document: &Value,
    ) -> Result<(), StoreError>;

    /// All documents in a collection, in unspecified order.
    ///
    /// A collection that was never written to is empty, not an error.
    async fn collection_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Documents in a collection whose top-level `field` equals `value`.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError>;
}
