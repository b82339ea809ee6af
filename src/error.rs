use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    DataLoad(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(format!("Invalid JSON: {}", rejection.body_text()))
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DataLoad(ref e) => {
                tracing::error!("Dataset error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Destination data unavailable")
            }
            AppError::Csv(ref e) => {
                tracing::error!("CSV error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Destination data unavailable")
            }
            AppError::Io(ref e) => {
                tracing::error!("I/O error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Validation(ref e) => {
                tracing::debug!("Rejected request: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.as_str())
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
