//! Document store contract and in-memory implementation.

use caddie_error::CaddieResult;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Contract for the external document store collaborator.
///
/// Documents are JSON-like values keyed by guild id. Write failures
/// propagate to the caller; the command layer converts them into
/// user-facing failure strings.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the document for a guild, None when the guild has no
    /// document yet.
    async fn get(&self, guild_id: i64) -> CaddieResult<Option<JsonValue>>;

    /// Write the document for a guild, replacing any previous version.
    async fn set(&self, guild_id: i64, document: JsonValue) -> CaddieResult<()>;
}

// Shared handles delegate, so one store can back several components.
#[async_trait::async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    async fn get(&self, guild_id: i64) -> CaddieResult<Option<JsonValue>> {
        (**self).get(guild_id).await
    }

    async fn set(&self, guild_id: i64, document: JsonValue) -> CaddieResult<()> {
        (**self).set(guild_id, document).await
    }
}

/// In-memory document store used by tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<i64, JsonValue>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, guild_id: i64) -> CaddieResult<Option<JsonValue>> {
        let documents = self.documents.read().unwrap_or_else(|e| e.into_inner());
        Ok(documents.get(&guild_id).cloned())
    }

    async fn set(&self, guild_id: i64, document: JsonValue) -> CaddieResult<()> {
        let mut documents = self.documents.write().unwrap_or_else(|e| e.into_inner());
        documents.insert(guild_id, document);
        Ok(())
    }
}
