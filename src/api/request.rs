//! Request parsing for the quote engine API.
//!
//! Request bodies are [`ShipmentForm`](crate::models::ShipmentForm) as
//! entered. This module handles the remaining request input, the quote id
//! in the path.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Parses a quote id taken from the request path.
pub fn parse_quote_id(raw: &str) -> EngineResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| EngineError::InvalidQuoteId {
        id: raw.to_string(),
    })
}
