//! API server state

use std::sync::Arc;

use crate::store::DocumentStore;
use crate::todo::TodoService;

/// API server state, built once at startup from an explicit store handle.
#[derive(Clone)]
pub struct AppState {
    /// Todo resource service
    pub todos: TodoService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            todos: TodoService::new(store),
        }
    }
}
