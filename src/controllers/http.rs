pub mod auth;
pub mod comment_likes;
pub mod comments;
pub mod middleware;
pub mod posts;
pub mod resources;
pub mod users;
pub mod validation;

use crate::core::pagination::{Metadata, Paginated};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

pub const DEFAULT_MESSAGE: &str = "Operation successful";

/// Uniform outer envelope for every successful response. Failures use the
/// same shape with `success: false` plus the request path and a timestamp,
/// built from [crate::error::Error].
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_message(data: T, message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
            metadata: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Collection responses always carry their pagination metadata.
    pub fn paginated(page: Paginated<T>, message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(page.data),
            metadata: Some(page.metadata),
        }
    }
}

impl ApiResponse<()> {
    /// An envelope with no payload, `data` serializes as null.
    pub fn empty(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
            metadata: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::PageQuery;
    use serde_json::{json, Value};

    #[test]
    fn singular_envelope_shape() {
        let response = ApiResponse::with_message(json!({ "id": 1 }), "Post retrieved successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "Post retrieved successfully",
                "data": { "id": 1 },
            })
        );
    }

    #[test]
    fn default_message_is_applied() {
        let value =
            serde_json::to_value(ApiResponse::with_message(json!(null), DEFAULT_MESSAGE)).unwrap();
        assert_eq!(value["message"], json!("Operation successful"));
    }

    #[test]
    fn collection_envelope_carries_metadata() {
        let page = Paginated::new(vec![1, 2, 3], 25, &PageQuery::default());
        let response = ApiResponse::paginated(page, "Items retrieved successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["data"], json!([1, 2, 3]));
        assert_eq!(
            value["metadata"],
            json!({
                "totalCount": 25,
                "totalPages": 3,
                "currentPage": 1,
                "limit": 10,
            })
        );
    }

    #[test]
    fn empty_envelope_serializes_null_data() {
        let value = serde_json::to_value(ApiResponse::empty("Post deleted successfully")).unwrap();
        assert_eq!(value["data"], Value::Null);
        assert!(value.get("metadata").is_none());
    }
}
