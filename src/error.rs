//! HTTP error responses.
//!
//! Every error is rendered as `{"error": <message>}`, with an extra
//! `"detail"` field for internal failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation { message } | AppError::NotFound { message } => ErrorBody {
                error: message,
                detail: None,
            },
            AppError::Internal { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                ErrorBody {
                    error: message,
                    detail: Some(detail),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
