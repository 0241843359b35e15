//! Error types for the server.
//!
//! `GenAiError` covers the generative API client, `ApiError` is what
//! handlers return. Every `ApiError` is rendered as the JSON envelope
//! `{"success": false, "error": "..."}` with a matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lawchat_congress::CongressError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Configuration is missing or invalid.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(pub String);

/// Errors from the generative language API.
#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("Gemini API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse Gemini response: {0}")]
    ResponseParse(String),

    #[error("Gemini returned empty response")]
    EmptyResponse,
}

/// Message returned when no generative client is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Gemini API not configured. Please set GEMINI_API_KEY environment variable.";

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field.
    #[error("{0}")]
    Validation(&'static str),

    /// No generative client available.
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    /// Generative API call failed. `context` names the operation.
    #[error("{context}: {source}")]
    Generative {
        context: &'static str,
        #[source]
        source: GenAiError,
    },

    /// Bill lookup response could not be parsed into bill references.
    #[error("Error processing message: {0}")]
    BillLookupParse(#[source] CongressError),

    /// Congress.gov lookup failed.
    #[error("{}", congress_message(.0))]
    Congress(#[from] CongressError),

    /// HTML view could not be rendered.
    #[error("Error rendering page: {0}")]
    Render(#[from] askama::Error),
}

fn congress_message(err: &CongressError) -> String {
    match err {
        CongressError::Http(_) => format!("Failed to fetch data from Congress API: {err}"),
        CongressError::MissingBill => err.to_string(),
        CongressError::InvalidBillId(_) => {
            "Invalid bill ID format. Expected format: type.number.congress".to_string()
        }
        _ => format!("Error processing Congress API data: {err}"),
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Congress(CongressError::MissingBill | CongressError::InvalidBillId(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotConfigured
            | ApiError::Generative { .. }
            | ApiError::BillLookupParse(_)
            | ApiError::Congress(_)
            | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
