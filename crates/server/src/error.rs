use analyzer::{AnalyzeError, FilterError, NaturalLanguageError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use store::StoreError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] AnalyzeError),

    #[error("Invalid filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Query error: {0}")]
    NaturalLanguage(#[from] NaturalLanguageError),

    #[error("String already exists in the system")]
    Conflict,

    #[error("String does not exist in the system")]
    NotFound,

    #[error("Storage error: {0}")]
    Store(StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::Filter(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::NaturalLanguage(NaturalLanguageError::Conflicting(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::NaturalLanguage(_) => StatusCode::BAD_REQUEST,
            ServerError::Conflict => StatusCode::CONFLICT,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Store(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ServerError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            ServerError::InvalidInput(_) => "INVALID_INPUT",
            ServerError::Filter(_) => "INVALID_FILTER",
            ServerError::NaturalLanguage(NaturalLanguageError::Conflicting(_)) => {
                "CONFLICTING_FILTERS"
            }
            ServerError::NaturalLanguage(_) => "UNPARSABLE_QUERY",
            ServerError::Conflict => "CONFLICT",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::Store(_) => "STORAGE_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => ServerError::Conflict,
            StoreError::NotFound => ServerError::NotFound,
            other => ServerError::Store(other),
        }
    }
}

/// Body rejections keep their HTTP meaning: an oversized body stays a 413 and
/// a missing JSON content type a 415. Everything else is a 400.
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ServerError::PayloadTooLarge(rejection.body_text()),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                ServerError::UnsupportedMediaType(rejection.body_text())
            }
            _ => ServerError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Config(err.to_string())
    }
}
