//! In-memory document store backend

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{Error, Result};

use super::{generate_id, Document, DocumentStore};

/// In-memory store, one map per collection. Intended for tests and local
/// development; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, DashMap<String, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let docs = match self.collections.get(collection) {
            Some(docs) => docs.iter().map(|entry| entry.value().clone()).collect(),
            None => Vec::new(),
        };
        Ok(docs)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let doc = self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).map(|entry| entry.value().clone()));
        Ok(doc)
    }

    async fn create(&self, collection: &str, doc: Document) -> Result<String> {
        let id = generate_id();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), doc);
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, doc: Document) -> Result<()> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
        let docs = self
            .collections
            .get(collection)
            .ok_or_else(|| Error::DocumentNotFound(collection.to_string(), id.to_string()))?;

        let mut entry = docs
            .get_mut(id)
            .ok_or_else(|| Error::DocumentNotFound(collection.to_string(), id.to_string()))?;

        for (key, value) in fields {
            entry.insert(key, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        if let Some(docs) = self.collections.get(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}
