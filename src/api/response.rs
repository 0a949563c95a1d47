//! Response types for the quote engine API.
//!
//! This module defines the response bodies and the mapping from
//! [`EngineError`] to HTTP status codes and error payloads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{QuoteBreakdown, QuoteRecord, QuoteSummary, QuoteTable};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Form fields the error refers to, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an incomplete quote error listing the empty fields.
    pub fn incomplete_quote(missing_fields: Vec<String>) -> Self {
        Self {
            fields: missing_fields,
            ..Self::with_details(
                "INCOMPLETE_QUOTE",
                "Quote is missing required fields",
                "Fill in every required field before saving",
            )
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::IncompleteQuote { missing_fields } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::incomplete_quote(missing_fields),
            },
            EngineError::QuoteNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("QUOTE_NOT_FOUND", format!("Quote not found: {}", id)),
            },
            EngineError::InvalidQuoteId { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_QUOTE_ID",
                    format!("Invalid quote id: {}", id),
                    "Quote ids are UUIDs",
                ),
            },
            EngineError::StorageError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Quote storage failed", message),
            },
        }
    }
}

/// Body of `GET /quotes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteHistoryResponse {
    /// Saved quotes, newest first.
    pub quotes: Vec<QuoteSummary>,
}

/// Body of `GET /quotes/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDetailResponse {
    /// The stored inputs.
    pub quote: QuoteRecord,
    /// The breakdown recomputed from the stored inputs.
    pub breakdown: QuoteBreakdown,
    /// The same breakdown laid out as the results table.
    pub table: QuoteTable,
}
