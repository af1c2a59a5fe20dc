use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, AppError>;

/// Crate-wide error with stable codes. Codes prefixed ERR-DOC cover the
/// document reader, ERR-REQ the request surface; everything else wraps in.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ERR-DOC-001: unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("ERR-DOC-002: could not extract text: {0}")]
    Extraction(String),
    #[error("ERR-REQ-001: bad request: {0}")]
    BadRequest(String),
    #[error("ERR-IO-001: {0}")]
    Io(#[from] std::io::Error),
    #[error("ERR-SER-001: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("ERR-CONF-001: {0}")]
    Config(#[from] config::ConfigError),
    #[error("ERR-TPL-001: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!("request failed: {}", &self);
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
