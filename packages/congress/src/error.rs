//! Error types for the congress client.

use thiserror::Error;

/// Main error type for bill parsing and Congress.gov lookups.
#[derive(Debug, Error)]
pub enum CongressError {
    /// Bill identifier is not a `type.number.congress` triple.
    #[error("Invalid bill ID format: '{0}'. Expected format: type.number.congress (e.g., hr.3076.117)")]
    InvalidBillId(String),

    /// HTTP request failed (network error or non-success status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded as JSON.
    #[error("Failed to decode response from {context}: {message}")]
    Decode { context: String, message: String },

    /// Bill metadata response has no top-level `bill` object.
    #[error("No bill data found in API response")]
    MissingBill,

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for congress operations.
pub type Result<T> = std::result::Result<T, CongressError>;
