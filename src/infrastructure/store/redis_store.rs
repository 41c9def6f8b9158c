//! Redis-backed document store.
//!
//! Documents are stored as JSON strings under their path key;
//! collections are redis hashes keyed by the collection path, with one
//! hash field per document. Equality queries fetch the hash values and
//! filter client side — collections here are small (one guild's
//! calendar), so no server-side indexing is attempted.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::document_store::DocumentStore;
use crate::shared::error::StoreError;

/// Redis implementation of [`DocumentStore`].
///
/// Uses a Redis ConnectionManager for connection pooling and automatic
/// reconnection handling.
#[derive(Clone)]
pub struct RedisDocumentStore {
    /// Redis connection manager with automatic reconnection
    conn: ConnectionManager,
    /// Optional key namespace for logical separation
    namespace: Option<Arc<str>>,
}

impl RedisDocumentStore {
    /// Creates a new store over an established connection.
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            conn,
            namespace: None,
        }
    }

    /// Creates a new store whose keys all carry a namespace prefix.
    ///
    /// Useful when several deployments share one redis instance.
    pub fn with_namespace(conn: ConnectionManager, namespace: impl Into<Arc<str>>) -> Self {
        Self {
            conn,
            namespace: Some(namespace.into()),
        }
    }

    /// Formats a document path with the optional namespace.
    fn format_key(&self, path: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{}/{}", ns, path),
            None => path.to_string(),
        }
    }

    /// Serializes a document to its stored JSON form.
    fn encode(path: &str, document: &Value) -> Result<String, StoreError> {
        serde_json::to_string(document).map_err(|source| StoreError::Encode {
            path: path.to_string(),
            source,
        })
    }

    /// Parses a stored JSON string back into a document.
    fn decode(path: &str, data: &str) -> Result<Value, StoreError> {
        serde_json::from_str(data).map_err(|source| StoreError::MalformedDocument {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn get(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let key = self.format_key(path);
        let mut conn = self.conn.clone();

        let data: Option<String> = conn.get(&key).await?;
        match data {
            Some(data) => {
                debug!(path = %key, "document fetched");
                Ok(Some(Self::decode(path, &data)?))
            }
            None => {
                debug!(path = %key, "document absent");
                Ok(None)
            }
        }
    }

    async fn set(&self, path: &str, document: &Value) -> Result<(), StoreError> {
        let key = self.format_key(path);
        let data = Self::encode(path, document)?;
        let mut conn = self.conn.clone();

        let _: () = conn.set(&key, data).await?;
        debug!(path = %key, "document written");
        Ok(())
    }

    async fn merge(&self, path: &str, patch: &Value) -> Result<(), StoreError> {
        // Read-modify-write; the single-active-process deployment model
        // makes this safe without a store-side transaction.
        let merged = match self.get(path).await? {
            Some(mut existing) => {
                match (existing.as_object_mut(), patch.as_object()) {
                    (Some(doc), Some(patch)) => {
                        for (field, value) in patch {
                            doc.insert(field.clone(), value.clone());
                        }
                        existing
                    }
                    // A non-object on either side degenerates to replace.
                    _ => patch.clone(),
                }
            }
            None => patch.clone(),
        };

        self.set(path, &merged).await
    }

    async fn collection_add(
        &self,
        collection: &str,
        doc_key: &str,
        document: &Value,
    ) -> Result<(), StoreError> {
        let key = self.format_key(collection);
        let data = Self::encode(collection, document)?;
        let mut conn = self.conn.clone();

        let _: () = conn.hset(&key, doc_key, data).await?;
        debug!(collection = %key, doc = %doc_key, "collection document written");
        Ok(())
    }

    async fn collection_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let key = self.format_key(collection);
        let mut conn = self.conn.clone();

        let raw: Vec<String> = conn.hvals(&key).await?;
        debug!(collection = %key, count = raw.len(), "collection fetched");

        raw.iter()
            .map(|data| Self::decode(collection, data))
            .collect()
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError> {
        let documents = self.collection_all(collection).await?;
        Ok(documents
            .into_iter()
            .filter(|doc| doc.get(field) == Some(value))
            .collect())
    }
}

impl std::fmt::Debug for RedisDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisDocumentStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
