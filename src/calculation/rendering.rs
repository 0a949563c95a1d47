//! Table and document views of a breakdown.
//!
//! Both views lay the 21 output fields out in Parts A to F with one column
//! per margin rate. The table uses the on-screen labels; the document uses
//! the export labels and adds a header block and a grand total row.

use chrono::NaiveDate;

use crate::config::CompanyProfile;
use crate::models::{
    InfoLine, MarginRate, QuoteBreakdown, QuoteDocument, QuoteField, QuoteRow, QuoteSection,
    QuoteTable, QuoteTableSection, ShipmentDetails, TotalRow,
};

/// Label of the grand total row in exported documents.
pub const GRAND_TOTAL_LABEL: &str = "Total (Net Total + Total GST)";

/// Builds the on-screen results table.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::{compute_breakdown, render_table};
/// use quote_engine::models::{QuoteField, ShipmentCharges};
///
/// let table = render_table(&compute_breakdown(&ShipmentCharges::zero()));
/// assert_eq!(table.columns, vec!["10%", "20%", "25%", "30%"]);
/// assert_eq!(table.sections.len(), 6);
/// assert_eq!(table.row(QuoteField::Total).unwrap().values[0], "0.00");
/// ```
pub fn render_table(breakdown: &QuoteBreakdown) -> QuoteTable {
    QuoteTable {
        columns: MarginRate::ALL
            .iter()
            .map(|rate| rate.label().to_string())
            .collect(),
        sections: sections(breakdown, QuoteField::screen_label),
    }
}

/// Builds the export document for a quote.
///
/// The issue date is formatted `dd/mm/yyyy`.
pub fn build_document(
    details: &ShipmentDetails,
    breakdown: &QuoteBreakdown,
    date: NaiveDate,
    company: &CompanyProfile,
) -> QuoteDocument {
    let info = [
        ("Customer Name", &details.customer_name),
        ("Origin City", &details.origin_city),
        ("Origin Port", &details.origin_port),
        ("Destination City", &details.destination_city),
        ("Destination Country", &details.destination_country),
        ("Destination Port", &details.destination_port),
        ("Mode", &details.mode),
        ("Volume in CBM", &details.volume_in_cbm),
    ]
    .into_iter()
    .map(|(label, value)| InfoLine {
        label: label.to_string(),
        value: value.clone(),
    })
    .collect();

    QuoteDocument {
        title: company.document_title.clone(),
        issuer: company.name.clone(),
        issuer_gstin: company.gstin.clone(),
        issuer_address: company.address.clone(),
        date: date.format("%d/%m/%Y").to_string(),
        info,
        columns: MarginRate::ALL
            .iter()
            .map(|rate| format!("{} Margin", rate.label()))
            .collect(),
        sections: sections(breakdown, QuoteField::document_label),
        grand_total: TotalRow {
            label: GRAND_TOTAL_LABEL.to_string(),
            values: breakdown.row(QuoteField::Total).to_vec(),
        },
    }
}

fn sections(
    breakdown: &QuoteBreakdown,
    label: fn(QuoteField) -> &'static str,
) -> Vec<QuoteTableSection> {
    QuoteSection::ALL
        .iter()
        .map(|section| QuoteTableSection {
            title: section.title().to_string(),
            rows: section
                .fields()
                .iter()
                .map(|&field| QuoteRow {
                    field,
                    label: label(field).to_string(),
                    values: breakdown.row(field).to_vec(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_breakdown;
    use crate::models::ShipmentCharges;
    use rust_decimal::Decimal;

    fn example_breakdown() -> QuoteBreakdown {
        compute_breakdown(&ShipmentCharges {
            packing: Decimal::from(1000),
            handling: Decimal::from(500),
            origin_custom: Decimal::from(2000),
            ocean_freight: Decimal::from(5000),
            dthc: Decimal::from(800),
            destination_charges: Decimal::from(700),
            apply_vendor_gst: true,
        })
    }

    fn company() -> CompanyProfile {
        CompanyProfile {
            name: "Leo Packers and Movers".to_string(),
            gstin: Some("33ABCDE1234F1Z5".to_string()),
            address: None,
            document_title: "International Shipping Rates".to_string(),
        }
    }

    fn details() -> ShipmentDetails {
        ShipmentDetails {
            customer_name: "Amit Shah".to_string(),
            origin_city: "Chennai".to_string(),
            origin_port: "Chennai".to_string(),
            destination_city: "New York".to_string(),
            destination_country: "USA".to_string(),
            destination_port: "New York".to_string(),
            mode: "FCL".to_string(),
            volume_in_cbm: "28".to_string(),
        }
    }

    #[test]
    fn test_table_sections_and_labels() {
        let table = render_table(&example_breakdown());

        let titles: Vec<&str> = table.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Part A", "Part B", "Part C", "Part D", "Part E", "Part F"]
        );

        let row = table.row(QuoteField::GstOrigin).unwrap();
        assert_eq!(row.label, "Origin charges GST (vendor)");
        assert_eq!(row.values, vec!["360.00", "360.00", "360.00", "360.00"]);
    }

    #[test]
    fn test_table_has_every_field() {
        let table = render_table(&example_breakdown());
        for field in QuoteField::ALL {
            let row = table.row(field).unwrap();
            assert_eq!(row.values.len(), 4);
        }
    }

    #[test]
    fn test_table_values_follow_margin_order() {
        let table = render_table(&example_breakdown());
        let row = table.row(QuoteField::MarginOrigin).unwrap();
        assert_eq!(row.values, vec!["236.00", "472.00", "590.00", "708.00"]);
    }

    #[test]
    fn test_document_header() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        let document = build_document(&details(), &example_breakdown(), date, &company());

        assert_eq!(document.title, "International Shipping Rates");
        assert_eq!(document.issuer, "Leo Packers and Movers");
        assert_eq!(document.issuer_gstin.as_deref(), Some("33ABCDE1234F1Z5"));
        assert!(document.issuer_address.is_none());
        assert_eq!(document.date, "28/06/2025");
        assert_eq!(document.info.len(), 8);
        assert_eq!(document.info[0].label, "Customer Name");
        assert_eq!(document.info[0].value, "Amit Shah");
        assert_eq!(document.info[7].label, "Volume in CBM");
        assert_eq!(document.info[7].value, "28");
    }

    #[test]
    fn test_document_carries_issuer_address() {
        let company = CompanyProfile {
            address: Some("12 Harbour Road, Chennai 600001".to_string()),
            ..company()
        };
        let date = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        let document = build_document(&details(), &example_breakdown(), date, &company);

        assert_eq!(
            document.issuer_address.as_deref(),
            Some("12 Harbour Road, Chennai 600001")
        );
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["issuer_address"], "12 Harbour Road, Chennai 600001");
    }

    #[test]
    fn test_document_columns_and_sections() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        let document = build_document(&details(), &example_breakdown(), date, &company());

        assert_eq!(
            document.columns,
            vec!["10% Margin", "20% Margin", "25% Margin", "30% Margin"]
        );
        assert_eq!(document.sections.len(), 6);

        let part_b = &document.sections[1];
        assert_eq!(part_b.title, "Part B");
        let labels: Vec<&str> = part_b.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Origin Charges",
                "GST on Origin Charges",
                "Margin on Origin Charges"
            ]
        );

        let part_f = &document.sections[5];
        assert_eq!(part_f.rows[2].label, "GST to be Paid");
    }

    #[test]
    fn test_document_grand_total_is_total_per_margin() {
        let breakdown = example_breakdown();
        let date = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        let document = build_document(&details(), &breakdown, date, &company());

        assert_eq!(document.grand_total.label, GRAND_TOTAL_LABEL);
        assert_eq!(document.grand_total.values[0], "13194.49");
        assert_eq!(document.grand_total.values[1], "14233.08");
        for (value, line) in document.grand_total.values.iter().zip(breakdown.lines()) {
            assert_eq!(*value, line.total.to_string());
        }
    }
}
