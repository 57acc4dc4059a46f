//! Error types for the presentation layer
//!
//! Provides unified error handling using thiserror.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

// == Site Error Enum ==
/// Unified error type for fetching, decoding and rendering.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Transport-level failure talking to an upstream API
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("API error: {status} for {url}")]
    Status { url: String, status: u16 },

    /// Upstream body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A property record failed validation
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Requested page or property does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SiteError {
    /// HTTP status a page request should answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::Http(_) | SiteError::Status { .. } | SiteError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            SiteError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SiteError::Render(_) | SiteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    status: u16,
    message: &'a str,
}

// == IntoResponse Implementation ==
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            SiteError::NotFound(_) => "La página que buscas no existe.".to_string(),
            other => {
                tracing::error!("Request failed: {}", other);
                "Ocurrió un error al cargar la página. Por favor, intenta de nuevo.".to_string()
            }
        };

        let page = ErrorPage {
            status: status.as_u16(),
            message: &message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the presentation layer.
pub type Result<T> = std::result::Result<T, SiteError>;
