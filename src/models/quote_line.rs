//! Breakdown output models.
//!
//! A [`QuoteBreakdown`] holds one [`DerivedQuoteLine`] per [`MarginRate`].
//! [`QuoteField`] names each output value and [`QuoteSection`] groups them
//! into the lettered parts used by the results table and the export document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MarginRate;

/// A named value in a [`DerivedQuoteLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteField {
    /// Packing charges.
    Packing,
    /// Handling charges.
    Handling,
    /// Origin customs charges.
    Origin,
    /// Vendor GST on origin charges.
    GstOrigin,
    /// Margin on origin charges.
    MarginOrigin,
    /// Ocean freight.
    Freight,
    /// Vendor GST on freight.
    GstFreight,
    /// Margin on freight.
    MarginFreight,
    /// Destination terminal handling charge.
    Dthc,
    /// Destination charges.
    Destination,
    /// DTHC plus destination charges.
    TotalDest,
    /// Vendor GST on destination charges.
    GstDest,
    /// Margin on destination charges.
    MarginDest,
    /// Total before service GST.
    NetTotal,
    /// Service GST on everything except freight.
    LeoGstAll,
    /// Service GST on freight.
    LeoGstFreight,
    /// Sum of both service GST amounts.
    TotalGst,
    /// Amount payable by the customer.
    Total,
    /// Vendor GST that can be reclaimed.
    InputCredit,
    /// Sum of the three margins.
    CombinedMargin,
    /// Service GST less input credit.
    GstToPay,
}

impl QuoteField {
    /// Every field, in table order.
    pub const ALL: [QuoteField; 21] = [
        QuoteField::Packing,
        QuoteField::Handling,
        QuoteField::Origin,
        QuoteField::GstOrigin,
        QuoteField::MarginOrigin,
        QuoteField::Freight,
        QuoteField::GstFreight,
        QuoteField::MarginFreight,
        QuoteField::Dthc,
        QuoteField::Destination,
        QuoteField::TotalDest,
        QuoteField::GstDest,
        QuoteField::MarginDest,
        QuoteField::NetTotal,
        QuoteField::LeoGstAll,
        QuoteField::LeoGstFreight,
        QuoteField::TotalGst,
        QuoteField::Total,
        QuoteField::InputCredit,
        QuoteField::CombinedMargin,
        QuoteField::GstToPay,
    ];

    /// Row label on the on-screen results table.
    pub const fn screen_label(self) -> &'static str {
        match self {
            QuoteField::Packing => "Packing",
            QuoteField::Handling => "Handling & transportation till port",
            QuoteField::Origin => "Origin Charges Custom",
            QuoteField::GstOrigin => "Origin charges GST (vendor)",
            QuoteField::MarginOrigin => "Origin charges Margin",
            QuoteField::Freight => "Ocean freight",
            QuoteField::GstFreight => "Ocean freight GST (Vendor)",
            QuoteField::MarginFreight => "Ocean freight Margin",
            QuoteField::Dthc => "DTHC",
            QuoteField::Destination => "Destination charges",
            QuoteField::TotalDest => "Total Destination charges",
            QuoteField::GstDest => "Total Destination charges GST (vendor) - If applicable",
            QuoteField::MarginDest => "Total Destination charges margin",
            QuoteField::NetTotal => "Net Total",
            QuoteField::LeoGstAll => "Leo GST (All services except freight) - 18%",
            QuoteField::LeoGstFreight => "LEO GST for Freight - 5%",
            QuoteField::TotalGst => "Total GST",
            QuoteField::Total => "Total (Net Total + Total GST)",
            QuoteField::InputCredit => "Input credit (For reference)",
            QuoteField::CombinedMargin => "Margin (For reference)",
            QuoteField::GstToPay => "GST to Pay",
        }
    }

    /// Row label in the exported quote document.
    pub const fn document_label(self) -> &'static str {
        match self {
            QuoteField::Packing => "Packing Charges",
            QuoteField::Handling => "Handling Charges",
            QuoteField::Origin => "Origin Charges",
            QuoteField::GstOrigin => "GST on Origin Charges",
            QuoteField::MarginOrigin => "Margin on Origin Charges",
            QuoteField::Freight => "Ocean Freight",
            QuoteField::GstFreight => "GST on Freight",
            QuoteField::MarginFreight => "Margin on Freight",
            QuoteField::Dthc => "DTHC",
            QuoteField::Destination => "Destination Charges",
            QuoteField::TotalDest => "Total Dest Charges",
            QuoteField::GstDest => "GST on Dest Charges",
            QuoteField::MarginDest => "Margin on Dest Charges",
            QuoteField::NetTotal => "Net Total",
            QuoteField::LeoGstAll => "GST on All (18%)",
            QuoteField::LeoGstFreight => "GST on Freight (5%)",
            QuoteField::TotalGst => "Total GST",
            QuoteField::Total => "Total Amount",
            QuoteField::InputCredit => "Input Credit",
            QuoteField::CombinedMargin => "Combined Margin",
            QuoteField::GstToPay => "GST to be Paid",
        }
    }
}

/// A lettered part of the breakdown, grouping related fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteSection {
    /// Packing and handling.
    A,
    /// Origin charges.
    B,
    /// Freight.
    C,
    /// Destination charges.
    D,
    /// Totals.
    E,
    /// Input credit, margin and GST to pay, for reference.
    F,
}

impl QuoteSection {
    /// Every section in order.
    pub const ALL: [QuoteSection; 6] = [
        QuoteSection::A,
        QuoteSection::B,
        QuoteSection::C,
        QuoteSection::D,
        QuoteSection::E,
        QuoteSection::F,
    ];

    /// Section heading, e.g. `"Part A"`.
    pub const fn title(self) -> &'static str {
        match self {
            QuoteSection::A => "Part A",
            QuoteSection::B => "Part B",
            QuoteSection::C => "Part C",
            QuoteSection::D => "Part D",
            QuoteSection::E => "Part E",
            QuoteSection::F => "Part F",
        }
    }

    /// The fields shown in this section, in row order.
    pub const fn fields(self) -> &'static [QuoteField] {
        match self {
            QuoteSection::A => &[QuoteField::Packing, QuoteField::Handling],
            QuoteSection::B => &[
                QuoteField::Origin,
                QuoteField::GstOrigin,
                QuoteField::MarginOrigin,
            ],
            QuoteSection::C => &[
                QuoteField::Freight,
                QuoteField::GstFreight,
                QuoteField::MarginFreight,
            ],
            QuoteSection::D => &[
                QuoteField::Dthc,
                QuoteField::Destination,
                QuoteField::TotalDest,
                QuoteField::GstDest,
                QuoteField::MarginDest,
            ],
            QuoteSection::E => &[
                QuoteField::NetTotal,
                QuoteField::LeoGstAll,
                QuoteField::LeoGstFreight,
                QuoteField::TotalGst,
                QuoteField::Total,
            ],
            QuoteSection::F => &[
                QuoteField::InputCredit,
                QuoteField::CombinedMargin,
                QuoteField::GstToPay,
            ],
        }
    }
}

/// The derived breakdown for a single margin rate.
///
/// Every amount has been rounded to two decimal places, independently per
/// field. Because of that, `total` may differ by one cent from
/// `net_total + total_gst` computed from the rounded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedQuoteLine {
    /// The margin rate this line was computed at.
    pub margin_rate: MarginRate,
    /// Packing charges.
    pub packing: Decimal,
    /// Handling charges.
    pub handling: Decimal,
    /// Origin customs charges.
    pub origin: Decimal,
    /// Vendor GST on origin charges.
    pub gst_origin: Decimal,
    /// Margin on origin charges.
    pub margin_origin: Decimal,
    /// Ocean freight.
    pub freight: Decimal,
    /// Vendor GST on freight.
    pub gst_freight: Decimal,
    /// Margin on freight.
    pub margin_freight: Decimal,
    /// Destination terminal handling charge.
    pub dthc: Decimal,
    /// Destination charges.
    pub destination: Decimal,
    /// DTHC plus destination charges.
    pub total_dest: Decimal,
    /// Vendor GST on destination charges.
    pub gst_dest: Decimal,
    /// Margin on destination charges.
    pub margin_dest: Decimal,
    /// Total before service GST.
    pub net_total: Decimal,
    /// Service GST on everything except freight.
    pub leo_gst_all: Decimal,
    /// Service GST on freight.
    pub leo_gst_freight: Decimal,
    /// Sum of both service GST amounts.
    pub total_gst: Decimal,
    /// Amount payable by the customer.
    pub total: Decimal,
    /// Vendor GST that can be reclaimed.
    pub input_credit: Decimal,
    /// Sum of the three margins.
    pub combined_margin: Decimal,
    /// Service GST less input credit.
    pub gst_to_pay: Decimal,
}

impl DerivedQuoteLine {
    /// Returns the value of a named field.
    pub fn value(&self, field: QuoteField) -> Decimal {
        match field {
            QuoteField::Packing => self.packing,
            QuoteField::Handling => self.handling,
            QuoteField::Origin => self.origin,
            QuoteField::GstOrigin => self.gst_origin,
            QuoteField::MarginOrigin => self.margin_origin,
            QuoteField::Freight => self.freight,
            QuoteField::GstFreight => self.gst_freight,
            QuoteField::MarginFreight => self.margin_freight,
            QuoteField::Dthc => self.dthc,
            QuoteField::Destination => self.destination,
            QuoteField::TotalDest => self.total_dest,
            QuoteField::GstDest => self.gst_dest,
            QuoteField::MarginDest => self.margin_dest,
            QuoteField::NetTotal => self.net_total,
            QuoteField::LeoGstAll => self.leo_gst_all,
            QuoteField::LeoGstFreight => self.leo_gst_freight,
            QuoteField::TotalGst => self.total_gst,
            QuoteField::Total => self.total,
            QuoteField::InputCredit => self.input_credit,
            QuoteField::CombinedMargin => self.combined_margin,
            QuoteField::GstToPay => self.gst_to_pay,
        }
    }

    /// Returns a field formatted for display with two decimal places.
    pub fn display(&self, field: QuoteField) -> String {
        format!("{:.2}", self.value(field))
    }
}

/// The full breakdown: one line per margin rate, always all four.
///
/// Deserializing rejects lines that are not in ascending margin order, since
/// lookups by rate are positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBreakdown")]
pub struct QuoteBreakdown {
    lines: [DerivedQuoteLine; 4],
}

#[derive(Deserialize)]
struct UncheckedBreakdown {
    lines: [DerivedQuoteLine; 4],
}

impl TryFrom<UncheckedBreakdown> for QuoteBreakdown {
    type Error = String;

    fn try_from(unchecked: UncheckedBreakdown) -> Result<Self, Self::Error> {
        for (line, expected) in unchecked.lines.iter().zip(MarginRate::ALL) {
            if line.margin_rate != expected {
                return Err(format!(
                    "expected the {} line, found {}",
                    expected, line.margin_rate
                ));
            }
        }
        Ok(Self {
            lines: unchecked.lines,
        })
    }
}

impl QuoteBreakdown {
    /// Builds a breakdown by computing a line for each margin rate in order.
    pub fn from_fn<F>(compute: F) -> Self
    where
        F: FnMut(MarginRate) -> DerivedQuoteLine,
    {
        Self {
            lines: MarginRate::ALL.map(compute),
        }
    }

    /// Returns the line for a margin rate.
    pub fn line(&self, rate: MarginRate) -> &DerivedQuoteLine {
        &self.lines[rate.index()]
    }

    /// Iterates the lines in ascending margin order.
    pub fn lines(&self) -> impl Iterator<Item = &DerivedQuoteLine> {
        self.lines.iter()
    }

    /// The formatted value of one field across all four margin rates.
    pub fn row(&self, field: QuoteField) -> [String; 4] {
        MarginRate::ALL.map(|rate| self.line(rate).display(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn line_with_total(rate: MarginRate, total: Decimal) -> DerivedQuoteLine {
        DerivedQuoteLine {
            margin_rate: rate,
            packing: Decimal::ZERO,
            handling: Decimal::ZERO,
            origin: Decimal::ZERO,
            gst_origin: Decimal::ZERO,
            margin_origin: Decimal::ZERO,
            freight: Decimal::ZERO,
            gst_freight: Decimal::ZERO,
            margin_freight: Decimal::ZERO,
            dthc: Decimal::ZERO,
            destination: Decimal::ZERO,
            total_dest: Decimal::ZERO,
            gst_dest: Decimal::ZERO,
            margin_dest: Decimal::ZERO,
            net_total: Decimal::ZERO,
            leo_gst_all: Decimal::ZERO,
            leo_gst_freight: Decimal::ZERO,
            total_gst: Decimal::ZERO,
            total,
            input_credit: Decimal::ZERO,
            combined_margin: Decimal::ZERO,
            gst_to_pay: Decimal::ZERO,
        }
    }

    #[test]
    fn test_sections_cover_every_field_once() {
        let mut seen = HashSet::new();
        for section in QuoteSection::ALL {
            for field in section.fields() {
                assert!(seen.insert(*field), "{:?} appears twice", field);
            }
        }
        assert_eq!(seen.len(), QuoteField::ALL.len());
    }

    #[test]
    fn test_section_order_matches_field_order() {
        let flattened: Vec<QuoteField> = QuoteSection::ALL
            .iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        assert_eq!(flattened, QuoteField::ALL.to_vec());
    }

    #[test]
    fn test_field_serializes_snake_case() {
        let json = serde_json::to_string(&QuoteField::LeoGstAll).unwrap();
        assert_eq!(json, "\"leo_gst_all\"");
    }

    #[test]
    fn test_breakdown_lines_indexed_by_rate() {
        let breakdown = QuoteBreakdown::from_fn(|rate| {
            line_with_total(rate, Decimal::from(rate.percent()))
        });

        assert_eq!(breakdown.line(MarginRate::Ten).total, Decimal::from(10));
        assert_eq!(breakdown.line(MarginRate::Thirty).total, Decimal::from(30));
        assert_eq!(breakdown.lines().count(), 4);
    }

    #[test]
    fn test_breakdown_deserializes_in_margin_order() {
        let breakdown = QuoteBreakdown::from_fn(|rate| {
            line_with_total(rate, Decimal::from(rate.percent()))
        });

        let json = serde_json::to_string(&breakdown).unwrap();
        let parsed: QuoteBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.line(MarginRate::TwentyFive).total, Decimal::from(25));
    }

    #[test]
    fn test_breakdown_rejects_reordered_lines() {
        let breakdown = QuoteBreakdown::from_fn(|rate| {
            line_with_total(rate, Decimal::from(rate.percent()))
        });
        let mut json = serde_json::to_value(&breakdown).unwrap();
        json["lines"].as_array_mut().unwrap().swap(0, 3);

        let err = serde_json::from_value::<QuoteBreakdown>(json).unwrap_err();
        assert!(err.to_string().contains("expected the 10% line, found 30%"));
    }

    #[test]
    fn test_row_formats_two_decimals() {
        let breakdown = QuoteBreakdown::from_fn(|rate| {
            line_with_total(rate, Decimal::new(i64::from(rate.percent()) * 100 + 5, 1))
        });

        assert_eq!(
            breakdown.row(QuoteField::Total),
            [
                "100.50".to_string(),
                "200.50".to_string(),
                "250.50".to_string(),
                "300.50".to_string()
            ]
        );
    }
}
