//! Calculation logic for the quote engine.
//!
//! This module contains the quote breakdown engine (vendor GST, margins,
//! service GST and input-credit reconciliation at each margin rate), the
//! permissive text-to-decimal conversion used at the form boundary, the
//! submission gate, and the table and document views of a breakdown.

mod breakdown;
mod completeness;
mod parse;
mod rendering;
mod rounding;

pub use breakdown::{
    DESTINATION_VENDOR_GST_RATE, FREIGHT_VENDOR_GST_RATE, ORIGIN_VENDOR_GST_RATE,
    SERVICE_FREIGHT_GST_RATE, SERVICE_GST_RATE, compute_breakdown, compute_line,
};
pub use completeness::{REQUIRED_FIELDS, is_submittable, missing_required_fields};
pub use parse::{MAX_CHARGE, parse_charge_or_zero};
pub use rendering::{GRAND_TOTAL_LABEL, build_document, render_table};
pub use rounding::round2;
