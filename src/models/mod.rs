//! Core data models for the quote engine.
//!
//! This module contains the domain models used throughout the engine.

mod calculation_result;
mod document;
mod margin_rate;
mod quote_line;
mod quote_record;
mod shipment;

pub use calculation_result::QuoteCalculation;
pub use document::{InfoLine, QuoteDocument, QuoteRow, QuoteTable, QuoteTableSection, TotalRow};
pub use margin_rate::MarginRate;
pub use quote_line::{DerivedQuoteLine, QuoteBreakdown, QuoteField, QuoteSection};
pub use quote_record::{QuoteRecord, QuoteSummary};
pub use shipment::{ShipmentCharges, ShipmentDetails, ShipmentForm};
