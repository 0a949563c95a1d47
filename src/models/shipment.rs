//! Shipment input models.
//!
//! [`ShipmentForm`] is the free-text record exactly as entered on the quote
//! form. [`ShipmentCharges`] is the numeric input the breakdown engine runs
//! on, and [`ShipmentDetails`] carries the display-only identifiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_charge_or_zero;

/// The six charge amounts of a shipment plus the vendor GST toggle.
///
/// Charges are not validated here; negative amounts flow through the engine
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentCharges {
    /// Packing charges.
    pub packing: Decimal,
    /// Handling and transportation till port.
    pub handling: Decimal,
    /// Origin customs charges.
    pub origin_custom: Decimal,
    /// Ocean freight.
    pub ocean_freight: Decimal,
    /// Destination terminal handling charge.
    pub dthc: Decimal,
    /// Other destination charges.
    pub destination_charges: Decimal,
    /// Whether vendor GST is added on top of vendor charges.
    pub apply_vendor_gst: bool,
}

impl ShipmentCharges {
    /// All charges zero, vendor GST applied.
    pub fn zero() -> Self {
        Self {
            packing: Decimal::ZERO,
            handling: Decimal::ZERO,
            origin_custom: Decimal::ZERO,
            ocean_freight: Decimal::ZERO,
            dthc: Decimal::ZERO,
            destination_charges: Decimal::ZERO,
            apply_vendor_gst: true,
        }
    }
}

/// Identifiers describing who a shipment is for and where it goes.
///
/// None of these take part in the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    /// Customer name.
    pub customer_name: String,
    /// Origin city.
    pub origin_city: String,
    /// Origin port.
    pub origin_port: String,
    /// Destination city.
    pub destination_city: String,
    /// Destination country.
    pub destination_country: String,
    /// Destination port.
    pub destination_port: String,
    /// Shipping mode, usually "FCL" or "LCL".
    pub mode: String,
    /// Volume in cubic metres, kept as entered.
    pub volume_in_cbm: String,
}

fn default_apply_vendor_gst() -> bool {
    true
}

/// The quote form as entered, every field free text.
///
/// Missing fields deserialize as empty strings so a half-filled form can
/// still be priced.
///
/// # Example
///
/// ```
/// use quote_engine::models::ShipmentForm;
/// use rust_decimal::Decimal;
///
/// let form = ShipmentForm {
///     packing_charges: "1000".to_string(),
///     ocean_freight: "abc".to_string(),
///     ..ShipmentForm::default()
/// };
///
/// let charges = form.charges();
/// assert_eq!(charges.packing, Decimal::new(1000, 0));
/// assert_eq!(charges.ocean_freight, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentForm {
    /// Customer name.
    pub customer_name: String,
    /// Origin city.
    pub origin_city: String,
    /// Origin port.
    pub origin_port: String,
    /// Destination city.
    pub destination_city: String,
    /// Destination country.
    pub destination_country: String,
    /// Destination port.
    pub destination_port: String,
    /// Shipping mode (FCL/LCL).
    pub mode: String,
    /// Packing charges text.
    pub packing_charges: String,
    /// Handling charges text.
    pub handling_charges: String,
    /// Origin customs charges text.
    pub origin_charges_custom: String,
    /// Ocean freight text.
    pub ocean_freight: String,
    /// DTHC text.
    pub dthc: String,
    /// Destination charges text.
    pub destination: String,
    /// Volume in CBM text.
    pub volume_in_cbm: String,
    /// Whether vendor GST should be computed.
    #[serde(default = "default_apply_vendor_gst")]
    pub apply_vendor_gst: bool,
}

impl Default for ShipmentForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            origin_city: String::new(),
            origin_port: String::new(),
            destination_city: String::new(),
            destination_country: String::new(),
            destination_port: String::new(),
            mode: String::new(),
            packing_charges: String::new(),
            handling_charges: String::new(),
            origin_charges_custom: String::new(),
            ocean_freight: String::new(),
            dthc: String::new(),
            destination: String::new(),
            volume_in_cbm: String::new(),
            apply_vendor_gst: default_apply_vendor_gst(),
        }
    }
}

impl ShipmentForm {
    /// Parses the six charge fields, substituting zero for anything unparseable.
    pub fn charges(&self) -> ShipmentCharges {
        ShipmentCharges {
            packing: parse_charge_or_zero(&self.packing_charges),
            handling: parse_charge_or_zero(&self.handling_charges),
            origin_custom: parse_charge_or_zero(&self.origin_charges_custom),
            ocean_freight: parse_charge_or_zero(&self.ocean_freight),
            dthc: parse_charge_or_zero(&self.dthc),
            destination_charges: parse_charge_or_zero(&self.destination),
            apply_vendor_gst: self.apply_vendor_gst,
        }
    }

    /// The display-only identifiers of the form.
    pub fn details(&self) -> ShipmentDetails {
        ShipmentDetails {
            customer_name: self.customer_name.clone(),
            origin_city: self.origin_city.clone(),
            origin_port: self.origin_port.clone(),
            destination_city: self.destination_city.clone(),
            destination_country: self.destination_country.clone(),
            destination_port: self.destination_port.clone(),
            mode: self.mode.clone(),
            volume_in_cbm: self.volume_in_cbm.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_partial_form_defaults_to_empty() {
        let json = r#"{ "customer_name": "Amit Shah", "packing_charges": "234" }"#;

        let form: ShipmentForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.customer_name, "Amit Shah");
        assert_eq!(form.packing_charges, "234");
        assert!(form.origin_city.is_empty());
        assert!(form.apply_vendor_gst);
    }

    #[test]
    fn test_deserialize_gst_toggle_off() {
        let json = r#"{ "apply_vendor_gst": false }"#;

        let form: ShipmentForm = serde_json::from_str(json).unwrap();
        assert!(!form.apply_vendor_gst);
    }

    #[test]
    fn test_charges_parses_every_field() {
        let form = ShipmentForm {
            packing_charges: "1000".to_string(),
            handling_charges: "500.50".to_string(),
            origin_charges_custom: " 2000 ".to_string(),
            ocean_freight: "5000".to_string(),
            dthc: "".to_string(),
            destination: "n/a".to_string(),
            apply_vendor_gst: false,
            ..ShipmentForm::default()
        };

        let charges = form.charges();
        assert_eq!(charges.packing, dec("1000"));
        assert_eq!(charges.handling, dec("500.50"));
        assert_eq!(charges.origin_custom, dec("2000"));
        assert_eq!(charges.ocean_freight, dec("5000"));
        assert_eq!(charges.dthc, Decimal::ZERO);
        assert_eq!(charges.destination_charges, Decimal::ZERO);
        assert!(!charges.apply_vendor_gst);
    }

    #[test]
    fn test_details_copies_identifiers() {
        let form = ShipmentForm {
            customer_name: "Meera Nair".to_string(),
            origin_city: "Mumbai".to_string(),
            destination_city: "New York".to_string(),
            mode: "LCL".to_string(),
            volume_in_cbm: "12".to_string(),
            ..ShipmentForm::default()
        };

        let details = form.details();
        assert_eq!(details.customer_name, "Meera Nair");
        assert_eq!(details.origin_city, "Mumbai");
        assert_eq!(details.destination_city, "New York");
        assert_eq!(details.mode, "LCL");
        assert_eq!(details.volume_in_cbm, "12");
    }

    #[test]
    fn test_charges_deserialize_from_strings_and_numbers() {
        let json = r#"{
            "packing": "1000.00",
            "handling": 500,
            "origin_custom": "0",
            "ocean_freight": "5000",
            "dthc": "800",
            "destination_charges": "700",
            "apply_vendor_gst": true
        }"#;

        let charges: ShipmentCharges = serde_json::from_str(json).unwrap();
        assert_eq!(charges.packing, dec("1000"));
        assert_eq!(charges.handling, dec("500"));
        assert_eq!(charges.destination_charges, dec("700"));
    }
}
