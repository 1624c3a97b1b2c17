//! Local filesystem document store backend

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

use super::{generate_id, Document, DocumentStore};

/// Filesystem-backed store: one JSON file per document under
/// `<root>/<collection>/<id>.json`.
pub struct LocalStore {
    root_path: PathBuf,
}

impl LocalStore {
    pub fn new(root_path: impl Into<PathBuf>) -> Result<Self> {
        let root_path = root_path.into();
        std::fs::create_dir_all(&root_path)?;
        Ok(Self { root_path })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.root_path.join(collection)
    }

    fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_path(collection).join(format!("{id}.json"))
    }

    async fn write_document(&self, path: &Path, doc: &Document) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let data = serde_json::to_vec(doc)?;
        fs::write(path, data).await?;
        Ok(())
    }

    async fn read_document(&self, path: &Path) -> Result<Document> {
        let data = fs::read(path).await?;
        let doc = serde_json::from_slice(&data)?;
        Ok(doc)
    }
}

#[async_trait]
impl DocumentStore for LocalStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let dir = self.collection_path(collection);
        let mut results = Vec::new();

        if !dir.exists() {
            return Ok(results);
        }

        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                results.push(self.read_document(&path).await?);
            }
        }

        Ok(results)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let path = self.document_path(collection, id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_document(&path).await?))
    }

    async fn create(&self, collection: &str, doc: Document) -> Result<String> {
        let id = generate_id();
        let path = self.document_path(collection, &id);
        self.write_document(&path, &doc).await?;
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, doc: Document) -> Result<()> {
        let path = self.document_path(collection, id);
        self.write_document(&path, &doc).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
        let path = self.document_path(collection, id);
        if !path.exists() {
            return Err(Error::DocumentNotFound(
                collection.to_string(),
                id.to_string(),
            ));
        }

        let mut doc = self.read_document(&path).await?;
        for (key, value) in fields {
            doc.insert(key, value);
        }
        self.write_document(&path, &doc).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let path = self.document_path(collection, id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        let mut doc = Document::new();
        doc.insert("title".to_string(), json!("Buy milk"));
        doc.insert("text".to_string(), json!("2 liters"));

        let id = store.create("todo", doc.clone()).await.unwrap();
        let fetched = store.get("todo", &id).await.unwrap().unwrap();
        assert_eq!(fetched, doc);

        let all = store.list("todo").await.unwrap();
        assert_eq!(all.len(), 1);

        store.delete("todo", &id).await.unwrap();
        assert!(store.get("todo", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_retains_other_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();

        let mut doc = Document::new();
        doc.insert("title".to_string(), json!("old"));
        doc.insert("text".to_string(), json!("body"));
        let id = store.create("todo", doc).await.unwrap();

        let mut patch = Document::new();
        patch.insert("title".to_string(), json!("new"));
        store.update("todo", &id, patch).await.unwrap();

        let fetched = store.get("todo", &id).await.unwrap().unwrap();
        assert_eq!(fetched["title"], "new");
        assert_eq!(fetched["text"], "body");
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();
        assert!(store.list("todo").await.unwrap().is_empty());
    }
}
