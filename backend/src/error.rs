//! Error handling for the weather map server
//!
//! Provides consistent error responses in English and Croatian

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    // External service errors
    #[error("Upstream weather service error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Build an upstream error from a reqwest failure without its URL,
    /// which carries the API key
    pub fn upstream(context: &str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timed out".to_string()
        } else if err.is_decode() {
            "malformed response".to_string()
        } else if let Some(status) = err.status() {
            format!("status {}", status)
        } else {
            "request failed".to_string()
        };
        AppError::Upstream(format!("{}: {}", context, kind))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::PlaceNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_)
            | AppError::Configuration(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Bodies that are not JSON, or whose fields have the wrong type, are
/// reported like any other invalid input
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("body", rejection.body_text())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::Validation { field, message } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_hr: format!("Neispravan unos: {}", field),
                field: Some(field.clone()),
            },
            AppError::PlaceNotFound(place) => ErrorDetail {
                code: "PLACE_NOT_FOUND".to_string(),
                message_en: format!("Place '{}' not found", place),
                message_hr: format!("Mjesto '{}' nije pronađeno", place),
                field: None,
            },
            AppError::Upstream(_) => ErrorDetail {
                code: "UPSTREAM_ERROR".to_string(),
                message_en: "Forecast is currently unavailable".to_string(),
                message_hr: "Prognoza trenutno nije dostupna".to_string(),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: format!("Configuration error: {}", msg),
                message_hr: "Greška u konfiguraciji poslužitelja".to_string(),
                field: None,
            },
            AppError::InternalError(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: "An internal server error occurred".to_string(),
                message_hr: "Došlo je do interne greške poslužitelja".to_string(),
                field: None,
            },
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (self.status_code(), Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
