//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::todo::{NewTodo, Todo, TodoPatch};
use crate::Error;

/// JSON error body, `{"error": "..."}` on every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn internal_error(err: Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

fn todo_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Todo not found".to_string(),
        }),
    )
}

/// Liveness probe
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Is Alive!".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// List every todo in the collection
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.list_todos().await.map_err(internal_error)?;
    Ok(Json(todos))
}

/// Get a single todo, 404 if the id is unknown
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    match state.todos.get_todo(&id).await.map_err(internal_error)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(todo_not_found()),
    }
}

/// Create a todo and return the store-assigned id
pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> Result<Json<CreateTodoResponse>, ApiError> {
    let id = state
        .todos
        .create_todo(payload)
        .await
        .map_err(internal_error)?;
    Ok(Json(CreateTodoResponse { id }))
}

#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    pub id: String,
}

/// Partially update a todo; 200 with an empty body on success
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TodoPatch>,
) -> Result<StatusCode, ApiError> {
    state
        .todos
        .update_todo(&id, payload)
        .await
        .map_err(internal_error)?;
    Ok(StatusCode::OK)
}

/// Delete a todo; 200 with an empty body whether or not it existed
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .todos
        .delete_todo(&id)
        .await
        .map_err(internal_error)?;
    Ok(StatusCode::OK)
}
