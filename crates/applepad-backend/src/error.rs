use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The inference endpoint answered with a non-success status.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Placeholder image unavailable: {0}")]
    Placeholder(std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Validation(s) => (StatusCode::BAD_REQUEST, s),
            AppError::Serde(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Upstream(text) => {
                tracing::warn!("Upstream rejected the request: {}", text);
                (StatusCode::BAD_GATEWAY, text)
            }
            AppError::Transport(e) => {
                tracing::error!("Upstream unreachable: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Image service unreachable".to_string(),
                )
            }
            AppError::Placeholder(e) => {
                tracing::error!("Error reading local image: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load local image".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
