use crate::error::ErrorDetails;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

/// Outermost layer. Error responses are rebuilt here so the failure envelope
/// can carry the request path and a timestamp.
pub async fn stamp_failures<B>(req: Request<B>, next: Next<B>) -> Response {
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let Some(details) = response.extensions().get::<ErrorDetails>().cloned() else {
        return response;
    };

    let body = json!({
        "success": false,
        "message": details.message,
        "data": null,
        "path": path,
        "timestamp": Utc::now().to_rfc3339(),
    });

    (response.status(), Json(body)).into_response()
}
