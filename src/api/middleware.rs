//! Request middleware

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Reject requests whose `Content-Type` is not exactly `application/json`.
///
/// Wired onto the write routes only; reads and deletes carry no body and are
/// left unguarded.
pub async fn validate_content_type(req: Request, next: Next) -> Response {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    if content_type != Some("application/json") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid content type, only JSON is supported" })),
        )
            .into_response();
    }

    next.run(req).await
}
