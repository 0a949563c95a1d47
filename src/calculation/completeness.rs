//! Submission gate for the quote form.
//!
//! A quote can be priced at any time, but it can only be saved once every
//! required text field has something in it. Numeric validity is not checked
//! here; an unparseable charge still prices as zero.

use crate::models::ShipmentForm;

/// The fields that must be non-empty before a quote can be saved, in form order.
pub const REQUIRED_FIELDS: [&str; 13] = [
    "customer_name",
    "origin_city",
    "origin_port",
    "destination_city",
    "destination_country",
    "destination_port",
    "mode",
    "packing_charges",
    "handling_charges",
    "origin_charges_custom",
    "ocean_freight",
    "dthc",
    "destination",
];

/// Returns the required fields that are empty or whitespace-only.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::missing_required_fields;
/// use quote_engine::models::ShipmentForm;
///
/// let form = ShipmentForm {
///     customer_name: "  ".to_string(),
///     ..ShipmentForm::default()
/// };
/// let missing = missing_required_fields(&form);
/// assert_eq!(missing.len(), 13);
/// assert_eq!(missing[0], "customer_name");
/// ```
pub fn missing_required_fields(form: &ShipmentForm) -> Vec<&'static str> {
    let values: [&str; 13] = [
        &form.customer_name,
        &form.origin_city,
        &form.origin_port,
        &form.destination_city,
        &form.destination_country,
        &form.destination_port,
        &form.mode,
        &form.packing_charges,
        &form.handling_charges,
        &form.origin_charges_custom,
        &form.ocean_freight,
        &form.dthc,
        &form.destination,
    ];

    REQUIRED_FIELDS
        .into_iter()
        .zip(values)
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Returns true when every required field is filled in.
pub fn is_submittable(form: &ShipmentForm) -> bool {
    missing_required_fields(form).is_empty()
}
