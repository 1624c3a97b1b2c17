//! Document store abstraction layer
//!
//! Provides a unified interface over collections of JSON documents keyed by
//! store-generated string ids. The HTTP layer only ever touches this trait.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::Result;

pub mod local;
pub mod memory;

/// A stored document: a JSON object.
pub type Document = Map<String, Value>;

/// Document store trait
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in a collection
    async fn list(&self, collection: &str) -> Result<Vec<Document>>;

    /// Fetch a single document by id, `None` if absent
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Insert a document under a freshly generated id and return that id
    async fn create(&self, collection: &str, doc: Document) -> Result<String>;

    /// Overwrite the document at `id` with `doc`
    async fn set(&self, collection: &str, id: &str, doc: Document) -> Result<()>;

    /// Merge `fields` into the existing document; errors if it does not exist
    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()>;

    /// Delete the document at `id`; succeeds if it was already gone
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Generate a document id. Backends share this so ids look the same
/// regardless of where the data lives.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Memory,
    Local { root_path: String },
}

/// Create a document store from config
pub fn create_store(config: StoreConfig) -> Result<Box<dyn DocumentStore>> {
    match config {
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
        StoreConfig::Local { root_path } => {
            let backend = local::LocalStore::new(root_path)?;
            Ok(Box::new(backend))
        }
    }
}
