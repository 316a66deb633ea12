use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request body not JSON")]
    InvalidJson,

    #[error("Request body does not contain url key, i.e. {{'url': ...}}")]
    MissingUrlField,

    #[error("Request body does not contain a valid URL")]
    NoUrlFound,

    #[error("Failed to fetch or extract metadata: {0}")]
    FetchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidJson | AppError::MissingUrlField | AppError::NoUrlFound => {
                StatusCode::BAD_REQUEST
            }
            // Never reaches the client in the request path: fetch failures
            // are absorbed into fallback previews and config errors abort
            // startup before the server accepts connections.
            AppError::FetchError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
