//! Rendered views of a breakdown.
//!
//! [`QuoteTable`] is what the on-screen results table shows and
//! [`QuoteDocument`] is the labelled, sectioned structure handed to the
//! document exporter. Both carry values already formatted to two decimals.

use serde::{Deserialize, Serialize};

use super::QuoteField;

/// One row: a label and a value per margin rate, in margin order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// The field this row shows.
    pub field: QuoteField,
    /// Row label.
    pub label: String,
    /// Formatted values, one per margin rate.
    pub values: Vec<String>,
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTableSection {
    /// Section heading, e.g. "Part B".
    pub title: String,
    /// Rows in display order.
    pub rows: Vec<QuoteRow>,
}

/// The on-screen results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTable {
    /// Column headings, one per margin rate.
    pub columns: Vec<String>,
    /// Sections A to F.
    pub sections: Vec<QuoteTableSection>,
}

impl QuoteTable {
    /// Finds the row for a field.
    pub fn row(&self, field: QuoteField) -> Option<&QuoteRow> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|r| r.field == field)
    }
}

/// A labelled line of shipment information in the document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoLine {
    /// Label, e.g. "Customer Name".
    pub label: String,
    /// Value as entered.
    pub value: String,
}

/// The grand total row at the foot of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalRow {
    /// Row label.
    pub label: String,
    /// Total payable per margin rate.
    pub values: Vec<String>,
}

/// The export document for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDocument {
    /// Document heading.
    pub title: String,
    /// Name of the issuing company.
    pub issuer: String,
    /// Issuer GST identification number, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_gstin: Option<String>,
    /// Issuer postal address, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_address: Option<String>,
    /// Issue date, formatted dd/mm/yyyy.
    pub date: String,
    /// Shipment information lines.
    pub info: Vec<InfoLine>,
    /// Column headings, e.g. "10% Margin".
    pub columns: Vec<String>,
    /// Parts A to F.
    pub sections: Vec<QuoteTableSection>,
    /// Total payable per margin rate.
    pub grand_total: TotalRow,
}
