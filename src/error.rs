use crate::core::auth::AuthenticationError;
use crate::core::uploads::UploadError;
use crate::db::adapters::AdapterError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;
use validify::ValidationErrors;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthenticationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub fn new<E: Into<Self>>(e: E) -> Self {
        e.into()
    }

    /// The client facing message placed in the failure envelope. Anything
    /// that maps to a 500 is masked behind a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Auth(e) => e.to_string(),
            Self::NotFound(message) | Self::Forbidden(message) | Self::Conflict(message) => {
                message.clone()
            }
            Self::Validation(errs) => format!("Validation failed: {errs}"),
            Self::Upload(e @ UploadError::UnsupportedType(_)) => e.to_string(),
            Self::Upload(UploadError::NotFound) => "File not found".to_string(),
            Self::Multipart(e) => e.to_string(),
            _ => "Internal server error".to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthenticationError::EmailTaken) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) | Self::Upload(UploadError::NotFound) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_)
            | Self::Validation(_)
            | Self::Multipart(_)
            | Self::Upload(UploadError::UnsupportedType(_))
            | Self::Adapter(AdapterError::UniqueViolation) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Attached to error responses so the outermost middleware can rebuild the
/// body with the request path and timestamp.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{self}");
        }

        let mut response = (
            status,
            Json(json!({
                "success": false,
                "message": message,
                "data": null,
            })),
        )
            .into_response();

        response.extensions_mut().insert(ErrorDetails { message });
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(
            Error::NotFound("nope".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Forbidden("no".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Error::Conflict("dup".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Auth(AuthenticationError::Unauthenticated).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::Auth(AuthenticationError::EmailTaken).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_errors_are_masked() {
        let error = Error::Adapter(AdapterError::SeaORM(sea_orm::DbErr::Custom(
            "connection reset".to_string(),
        )));
        assert_eq!(error.message(), "Internal server error");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_responses_carry_details_for_the_envelope() {
        let response = Error::NotFound("Post with slug x not found".to_string()).into_response();
        let details = response.extensions().get::<ErrorDetails>().unwrap();
        assert_eq!(details.message, "Post with slug x not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
