//! Todo resource service
//!
//! Maps the public `Todo` shape onto the generic document-store primitives.
//! No business rules live here; the service is a thin translation layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{Document, DocumentStore};
use crate::{Error, Result};

/// Collection the todos live in.
pub const TODO_COLLECTION: &str = "todo";

/// A stored todo. `id` is assigned by the store on creation and written back
/// into the document, so every todo read after creation carries all three
/// fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Todo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub text: String,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub text: String,
}

/// Partial update: only the supplied fields are written, the rest of the
/// document is retained.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl TodoPatch {
    fn into_fields(self) -> Document {
        let mut fields = Document::new();
        if let Some(title) = self.title {
            fields.insert("title".to_string(), Value::String(title));
        }
        if let Some(text) = self.text {
            fields.insert("text".to_string(), Value::String(text));
        }
        fields
    }
}

/// Service over the `todo` collection, composed from a store handle.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl TodoService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: TODO_COLLECTION.to_string(),
        }
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let docs = self.store.list(&self.collection).await?;
        docs.into_iter().map(from_document).collect()
    }

    pub async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        match self.store.get(&self.collection, id).await? {
            Some(doc) => Ok(Some(from_document(doc)?)),
            None => Ok(None),
        }
    }

    /// Create a todo and return the store-assigned id.
    ///
    /// Two store calls: the first write stores the payload under a `data`
    /// wrapper and yields the generated id, the second overwrites the
    /// document with the fields plus that id.
    pub async fn create_todo(&self, new: NewTodo) -> Result<String> {
        let mut wrapper = Document::new();
        wrapper.insert("data".to_string(), serde_json::to_value(&new)?);
        let id = self.store.create(&self.collection, wrapper).await?;

        let mut doc = to_document(&new)?;
        doc.insert("id".to_string(), Value::String(id.clone()));
        self.store.set(&self.collection, &id, doc).await?;

        Ok(id)
    }

    pub async fn update_todo(&self, id: &str, patch: TodoPatch) -> Result<()> {
        self.store
            .update(&self.collection, id, patch.into_fields())
            .await
    }

    pub async fn delete_todo(&self, id: &str) -> Result<()> {
        self.store.delete(&self.collection, id).await
    }
}

fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::internal(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

fn from_document(doc: Document) -> Result<Todo> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}
