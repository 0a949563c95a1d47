//! The quote breakdown engine.
//!
//! Given a shipment's charges, computes the vendor GST, margin, service GST
//! and input-credit reconciliation at each of the four margin rates.
//!
//! # Rounding order
//!
//! The three margins (origin, freight, destination) are rounded to two
//! decimals *before* they are summed into the totals. Every other field is
//! computed at full precision and rounded once, at the point it is written to
//! the output line. Swapping that order changes the displayed totals by a
//! cent here and there, so it is kept exactly as is.

use rust_decimal::Decimal;

use crate::models::{DerivedQuoteLine, MarginRate, QuoteBreakdown, ShipmentCharges};

use super::round2;

/// Vendor GST charged on origin customs charges (18%).
pub const ORIGIN_VENDOR_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Vendor GST charged on ocean freight (5%).
pub const FREIGHT_VENDOR_GST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Vendor GST charged on destination charges (18%).
pub const DESTINATION_VENDOR_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Service GST on everything except freight (18%).
pub const SERVICE_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Service GST on freight and the margin earned on it (5%).
pub const SERVICE_FREIGHT_GST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Computes the breakdown at every margin rate.
///
/// The function is total for charges whose magnitude is at most
/// [`MAX_CHARGE`](crate::calculation::MAX_CHARGE), negative charges included.
/// Charges parsed from the form never exceed it.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::compute_breakdown;
/// use quote_engine::models::{MarginRate, ShipmentCharges};
/// use rust_decimal::Decimal;
///
/// let charges = ShipmentCharges {
///     packing: Decimal::from(1000),
///     handling: Decimal::from(500),
///     origin_custom: Decimal::from(2000),
///     ocean_freight: Decimal::from(5000),
///     dthc: Decimal::from(800),
///     destination_charges: Decimal::from(700),
///     apply_vendor_gst: true,
/// };
///
/// let breakdown = compute_breakdown(&charges);
/// let line = breakdown.line(MarginRate::Ten);
/// assert_eq!(line.gst_origin.to_string(), "360.00");
/// assert_eq!(line.margin_origin.to_string(), "236.00");
/// assert_eq!(line.net_total.to_string(), "11818.00");
/// ```
pub fn compute_breakdown(charges: &ShipmentCharges) -> QuoteBreakdown {
    QuoteBreakdown::from_fn(|rate| compute_line(charges, rate))
}

/// Computes the breakdown for a single margin rate.
pub fn compute_line(charges: &ShipmentCharges, rate: MarginRate) -> DerivedQuoteLine {
    let apply = charges.apply_vendor_gst;
    let packing = charges.packing;
    let handling = charges.handling;
    let origin = charges.origin_custom;
    let freight = charges.ocean_freight;
    let dthc = charges.dthc;
    let destination = charges.destination_charges;

    let gst_origin = vendor_gst(origin, ORIGIN_VENDOR_GST_RATE, apply);
    let margin_origin = margin_on(origin, gst_origin, rate);

    let gst_freight = vendor_gst(freight, FREIGHT_VENDOR_GST_RATE, apply);
    let margin_freight = margin_on(freight, gst_freight, rate);

    let total_dest = dthc + destination;
    let gst_dest = vendor_gst(total_dest, DESTINATION_VENDOR_GST_RATE, apply);
    let margin_dest = margin_on(total_dest, gst_dest, rate);

    let non_freight = packing
        + handling
        + origin
        + gst_origin
        + margin_origin
        + total_dest
        + gst_dest
        + margin_dest;
    let freight_related = freight + gst_freight + margin_freight;

    let net_total = non_freight + freight_related;
    let leo_gst_all = non_freight * SERVICE_GST_RATE;
    let leo_gst_freight = freight_related * SERVICE_FREIGHT_GST_RATE;
    let total_gst = leo_gst_all + leo_gst_freight;
    let total = net_total + total_gst;

    let input_credit = gst_origin + gst_freight + gst_dest;
    let combined_margin = margin_origin + margin_freight + margin_dest;
    let gst_to_pay = total_gst - input_credit;

    DerivedQuoteLine {
        margin_rate: rate,
        packing: round2(packing),
        handling: round2(handling),
        origin: round2(origin),
        gst_origin: round2(gst_origin),
        margin_origin: round2(margin_origin),
        freight: round2(freight),
        gst_freight: round2(gst_freight),
        margin_freight: round2(margin_freight),
        dthc: round2(dthc),
        destination: round2(destination),
        total_dest: round2(total_dest),
        gst_dest: round2(gst_dest),
        margin_dest: round2(margin_dest),
        net_total: round2(net_total),
        leo_gst_all: round2(leo_gst_all),
        leo_gst_freight: round2(leo_gst_freight),
        total_gst: round2(total_gst),
        total: round2(total),
        input_credit: round2(input_credit),
        combined_margin: round2(combined_margin),
        gst_to_pay: round2(gst_to_pay),
    }
}

fn vendor_gst(amount: Decimal, gst_rate: Decimal, apply: bool) -> Decimal {
    if apply {
        amount * gst_rate
    } else {
        Decimal::ZERO
    }
}

/// Margin on a charge and its vendor GST, rounded before it is summed.
fn margin_on(charge: Decimal, gst: Decimal, rate: MarginRate) -> Decimal {
    round2((charge + gst) * rate.fraction())
}
