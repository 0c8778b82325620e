//! Error types for the web frontend

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the web frontend
pub type Result<T> = std::result::Result<T, WebError>;

/// Main error type for the web frontend
#[derive(Error, Debug)]
pub enum WebError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors (the backend API could not be reached)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The backend API answered with a non-success status
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl WebError {
    /// Short message suitable for an inline form banner.
    ///
    /// Backend rejections carry the message decoded from the API response
    /// body; transport failures collapse to a generic network notice so
    /// that connection details never leak into a page.
    pub fn user_message(&self) -> String {
        match self {
            WebError::Backend { message, .. } => message.clone(),
            WebError::HttpClient(_) => "Network error".to_string(),
            WebError::Validation(message) => message.clone(),
            WebError::Unauthorized(message) => message.clone(),
            WebError::NotFound(message) => message.clone(),
            _ => "Something went wrong".to_string(),
        }
    }

    /// True when the backend answered 404 for the requested resource
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WebError::NotFound(_) | WebError::Backend { status: 404, .. }
        )
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Validation(_) => StatusCode::BAD_REQUEST,
            WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Backend { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            WebError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(crate::views::pages::error_page(
                status.as_u16(),
                &self.user_message(),
            ))
    }
}
