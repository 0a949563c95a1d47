//! HTTP request handlers for the quote engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_document, compute_breakdown, missing_required_fields, render_table};
use crate::error::EngineError;
use crate::models::{MarginRate, QuoteCalculation, QuoteSummary, ShipmentForm};

use super::request::parse_quote_id;
use super::response::{
    ApiError, ApiErrorResponse, QuoteDetailResponse, QuoteHistoryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quotes/calculate", post(calculate_handler))
        .route("/quotes", post(save_handler).get(history_handler))
        .route("/quotes/:id", get(get_quote_handler))
        .route("/quotes/:id/document", get(document_handler))
        .with_state(state)
}

/// Handler for POST /quotes/calculate.
///
/// Prices a quote form at every margin rate. Never rejects a well-formed
/// body: unparseable charges price as zero.
async fn calculate_handler(payload: Result<Json<ShipmentForm>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let charges = form.charges();
    let breakdown = compute_breakdown(&charges);
    let missing_fields: Vec<String> = missing_required_fields(&form)
        .into_iter()
        .map(str::to_string)
        .collect();
    let duration_us = whole_micros(start_time.elapsed());

    info!(
        correlation_id = %correlation_id,
        total_at_lowest_margin = %breakdown.line(MarginRate::Ten).total,
        apply_vendor_gst = charges.apply_vendor_gst,
        duration_us,
        "Quote calculated"
    );

    let result = QuoteCalculation {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        submittable: missing_fields.is_empty(),
        missing_fields,
        charges,
        breakdown,
        duration_us,
    };

    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /quotes.
///
/// Saves the raw form inputs once every required field is filled in.
async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShipmentForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing save request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let missing = missing_required_fields(&form);
    if !missing.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            missing = ?missing,
            "Quote is incomplete"
        );
        return error_response(EngineError::IncompleteQuote {
            missing_fields: missing.into_iter().map(str::to_string).collect(),
        });
    }

    match state.store().save(&form) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                quote_id = %record.id,
                customer = %record.details.customer_name,
                "Quote saved"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Saving quote failed");
            error_response(err)
        }
    }
}

/// Handler for GET /quotes.
async fn history_handler(State(state): State<AppState>) -> Response {
    match state.store().list() {
        Ok(records) => {
            info!(count = records.len(), "Listing quote history");
            let quotes = records.iter().map(QuoteSummary::from).collect();
            (StatusCode::OK, Json(QuoteHistoryResponse { quotes })).into_response()
        }
        Err(err) => {
            warn!(error = %err, "Listing quotes failed");
            error_response(err)
        }
    }
}

/// Handler for GET /quotes/:id.
///
/// The breakdown is recomputed from the stored inputs.
async fn get_quote_handler(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let record = match parse_quote_id(&raw_id).and_then(|id| state.store().get(id)) {
        Ok(record) => record,
        Err(err) => {
            warn!(quote_id = %raw_id, error = %err, "Quote lookup failed");
            return error_response(err);
        }
    };

    let breakdown = compute_breakdown(&record.charges);
    let table = render_table(&breakdown);
    (
        StatusCode::OK,
        Json(QuoteDetailResponse {
            quote: record,
            breakdown,
            table,
        }),
    )
        .into_response()
}

/// Handler for GET /quotes/:id/document.
///
/// The document is dated with the day the quote was saved.
async fn document_handler(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let record = match parse_quote_id(&raw_id).and_then(|id| state.store().get(id)) {
        Ok(record) => record,
        Err(err) => {
            warn!(quote_id = %raw_id, error = %err, "Quote lookup failed");
            return error_response(err);
        }
    };

    let breakdown = compute_breakdown(&record.charges);
    let document = build_document(
        &record.details,
        &breakdown,
        record.created_at.date_naive(),
        state.config().company(),
    );

    info!(quote_id = %record.id, "Quote document built");
    (StatusCode::OK, Json(document)).into_response()
}

/// Microseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

/// Turns a JSON extraction failure into a 400 with an [`ApiError`] body.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
