//! Todo API - a minimal HTTP CRUD service backed by a document store
//!
//! The service exposes five REST operations over a single `todo` collection:
//! - List all todos
//! - Get a todo by id
//! - Create a todo (the store assigns the id)
//! - Partially update a todo
//! - Delete a todo
//!
//! Persistence goes through the [`store::DocumentStore`] trait, so the HTTP
//! layer never depends on a concrete backend.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod todo;

pub use error::{Error, Result};
