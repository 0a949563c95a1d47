//! Calculation result model.
//!
//! [`QuoteCalculation`] wraps a freshly computed breakdown with the metadata
//! returned to the quote form on every change: an id, a timestamp, the engine
//! version and whether the form is ready to be saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{QuoteBreakdown, ShipmentCharges};

/// The result of pricing a quote form.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::compute_breakdown;
/// use quote_engine::models::{QuoteCalculation, ShipmentCharges};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let charges = ShipmentCharges::zero();
/// let result = QuoteCalculation {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     submittable: false,
///     missing_fields: vec!["customer_name".to_string()],
///     breakdown: compute_breakdown(&charges),
///     charges,
///     duration_us: 0,
/// };
/// assert!(!result.submittable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Whether every required form field is filled in.
    pub submittable: bool,
    /// Required fields that are still empty.
    pub missing_fields: Vec<String>,
    /// The charges the breakdown was computed from, after parsing.
    pub charges: ShipmentCharges,
    /// The per-margin breakdown.
    pub breakdown: QuoteBreakdown,
    /// Calculation time in microseconds.
    pub duration_us: u64,
}
