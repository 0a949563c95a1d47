//! Stored quote models.
//!
//! Only the raw inputs are persisted. The breakdown is recomputed from
//! [`QuoteRecord::charges`] every time a record is read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ShipmentCharges, ShipmentDetails};

/// A saved quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Generated identifier.
    pub id: Uuid,
    /// When the quote was saved.
    pub created_at: DateTime<Utc>,
    /// Customer and route identifiers.
    #[serde(flatten)]
    pub details: ShipmentDetails,
    /// Parsed charge inputs.
    pub charges: ShipmentCharges,
}

/// A history list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// Identifier of the stored quote.
    pub id: Uuid,
    /// Customer name.
    pub customer_name: String,
    /// Origin city.
    pub origin_city: String,
    /// Destination city.
    pub destination_city: String,
    /// When the quote was saved.
    pub created_at: DateTime<Utc>,
}

impl From<&QuoteRecord> for QuoteSummary {
    fn from(record: &QuoteRecord) -> Self {
        QuoteSummary {
            id: record.id,
            customer_name: record.details.customer_name.clone(),
            origin_city: record.details.origin_city.clone(),
            destination_city: record.details.destination_city.clone(),
            created_at: record.created_at,
        }
    }
}
