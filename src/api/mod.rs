//! HTTP API server

use axum::{handler::Handler, routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// The content-type guard wraps only the write handlers; GET and DELETE stay
/// unguarded.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .nest(
            "/api",
            Router::new()
                .route(
                    "/todo",
                    get(handlers::list_todos).post(
                        handlers::create_todo
                            .layer(axum::middleware::from_fn(middleware::validate_content_type)),
                    ),
                )
                .route(
                    "/todo/:id",
                    get(handlers::get_todo)
                        .put(
                            handlers::update_todo.layer(axum::middleware::from_fn(
                                middleware::validate_content_type,
                            )),
                        )
                        .delete(handlers::delete_todo),
                ),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
