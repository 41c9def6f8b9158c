//! In-memory document store.
//!
//! Backend used by the test suites and available for local runs without
//! a redis instance. Mirrors the semantics of the redis backend and
//! additionally counts remote-equivalent operations so tests can assert
//! that a cached read performed no I/O.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use super::document_store::DocumentStore;
use crate::shared::error::StoreError;

#[derive(Default)]
struct State {
    documents: HashMap<String, Value>,
    collections: HashMap<String, BTreeMap<String, Value>>,
    reads: u64,
    writes: u64,
}

/// HashMap-backed implementation of [`DocumentStore`].
#[derive(Default)]
pub struct MemoryDocumentStore {
    state: Mutex<State>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of read operations (`get`, `collection_all`, `query_eq`)
    /// served so far.
    pub async fn read_count(&self) -> u64 {
        self.state.lock().await.reads
    }

    /// Number of write operations served so far.
    pub async fn write_count(&self) -> u64 {
        self.state.lock().await.writes
    }

    /// Direct look at a stored document, bypassing the counters.
    pub async fn document(&self, path: &str) -> Option<Value> {
        self.state.lock().await.documents.get(path).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let mut state = self.state.lock().await;
        state.reads += 1;
        Ok(state.documents.get(path).cloned())
    }

    async fn set(&self, path: &str, document: &Value) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.writes += 1;
        state.documents.insert(path.to_string(), document.clone());
        Ok(())
    }

    async fn merge(&self, path: &str, patch: &Value) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.writes += 1;

        let merged = match state.documents.get(path) {
            Some(existing) => match (existing.as_object(), patch.as_object()) {
                (Some(doc), Some(patch_map)) => {
                    let mut doc = doc.clone();
                    for (field, value) in patch_map {
                        doc.insert(field.clone(), value.clone());
                    }
                    Value::Object(doc)
                }
                _ => patch.clone(),
            },
            None => patch.clone(),
        };

        state.documents.insert(path.to_string(), merged);
        Ok(())
    }

    async fn collection_add(
        &self,
        collection: &str,
        doc_key: &str,
        document: &Value,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.writes += 1;
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(doc_key.to_string(), document.clone());
        Ok(())
    }

    async fn collection_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let mut state = self.state.lock().await;
        state.reads += 1;
        Ok(state
            .collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
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
