//! Domain model for a synthesized fiscal invoice record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DOCUMENT_NUMBER_WIDTH, DOCUMENT_PREFIX};

/// A single synthesized invoice record.
///
/// All monetary and tax fields are derived once at creation time and never
/// re-computed afterwards: `gross_value` is exactly `quantity * unit_value`,
/// and the two tax values are the gross value times their rate over 100,
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub document_number: String,
    pub issue_date: NaiveDate,
    pub issuer_tax_id: String,
    pub issuer_legal_name: String,
    pub recipient_tax_id: String,
    pub recipient_legal_name: String,
    pub product_code: String,
    pub product_description: String,
    pub quantity: u32,
    pub unit_of_measure: String,
    pub unit_value: Decimal,
    pub gross_value: Decimal,
    pub tax_code: String,
    pub icms_rate: Decimal,
    pub icms_value: Decimal,
    pub ipi_rate: Decimal,
    pub ipi_value: Decimal,
}

impl Invoice {
    /// Render a 1-based sequence number as a document number.
    /// Example: sequence 7 becomes "NF-000007".
    pub fn format_document_number(sequence: usize) -> String {
        format!(
            "{}-{:0width$}",
            DOCUMENT_PREFIX,
            sequence,
            width = DOCUMENT_NUMBER_WIDTH
        )
    }
}
