//! API error types with IntoResponse
//!
//! Errors become `text/plain` bodies of the form `Error: <detail>`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Submitted input rejected (400)
    Validation(ValidationError),

    /// Storage failure (500, logged)
    Database {
        source: DbError,
        /// Whether the response body carries the underlying error text
        expose_detail: bool,
    },
}

impl ApiError {
    pub fn database(source: DbError, expose_detail: bool) -> Self {
        Self::Database {
            source,
            expose_detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Validation(e) => e.to_string(),
            Self::Database {
                source,
                expose_detail,
            } => {
                tracing::error!("Database error: {}", source);
                if expose_detail {
                    source.to_string()
                } else {
                    "internal error".to_string()
                }
            }
        };

        (status, format!("Error: {}", detail)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
