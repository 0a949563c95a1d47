//! HTTP API module for the quote engine.
//!
//! This module provides the REST endpoints for pricing, saving and
//! retrieving international shipping quotes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::parse_quote_id;
pub use response::{ApiError, ApiErrorResponse, QuoteDetailResponse, QuoteHistoryResponse};
pub use state::AppState;
