//! # Invoice Synthesis
//!
//! The core of the generator. For each record it samples one product, one
//! issuer and one recipient from the pools (independently, with
//! replacement), derives the monetary and tax fields, and assigns a
//! sequential document number. The output sequence preserves generation
//! order, which is also document-number order.
//!
//! Reproducibility is the caller's choice: pass a seeded random source for
//! deterministic output, or an entropy-seeded one for fresh data per run.

use chrono::{Duration, NaiveDate};
use log::info;
use rand::Rng;
use rust_decimal::Decimal;

use crate::config::{GeneratorConfig, ISSUE_DATE_WINDOW_DAYS, QUANTITY_RANGE, TAX_CODE, UNIT_OF_MEASURE};
use crate::domain::errors::GeneratorError;
use crate::domain::models::invoice::Invoice;
use crate::domain::models::party::Party;
use crate::domain::models::product::Product;

/// Service that synthesizes invoice records from entity pools.
#[derive(Clone)]
pub struct InvoiceService {
    icms_rate: Decimal,
    ipi_rate: Decimal,
}

impl InvoiceService {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            icms_rate: config.icms_rate,
            ipi_rate: config.ipi_rate,
        }
    }

    /// Synthesize exactly `records` invoices by sampling the given pools.
    ///
    /// Fails with [`GeneratorError::EmptyPool`] when at least one record is
    /// requested and any pool is empty. `records == 0` yields an empty
    /// batch without touching the pools or the random source.
    pub fn synthesize(
        &self,
        records: usize,
        products: &[Product],
        issuers: &[Party],
        recipients: &[Party],
        start_date: NaiveDate,
        rng: &mut impl Rng,
    ) -> Result<Vec<Invoice>, GeneratorError> {
        if records == 0 {
            return Ok(Vec::new());
        }
        if products.is_empty() {
            return Err(GeneratorError::EmptyPool("product"));
        }
        if issuers.is_empty() {
            return Err(GeneratorError::EmptyPool("issuer"));
        }
        if recipients.is_empty() {
            return Err(GeneratorError::EmptyPool("recipient"));
        }

        let mut invoices = Vec::with_capacity(records);
        for i in 0..records {
            let product = &products[rng.gen_range(0..products.len())];
            let issuer = &issuers[rng.gen_range(0..issuers.len())];
            let recipient = &recipients[rng.gen_range(0..recipients.len())];

            let quantity = rng.gen_range(QUANTITY_RANGE.0..=QUANTITY_RANGE.1);
            // Derived exactly once; the exporter writes these as-is.
            let gross_value = Decimal::from(quantity) * product.unit_value;
            let icms_value = (gross_value * self.icms_rate / Decimal::ONE_HUNDRED).round_dp(2);
            let ipi_value = (gross_value * self.ipi_rate / Decimal::ONE_HUNDRED).round_dp(2);

            let offset = rng.gen_range(0..=ISSUE_DATE_WINDOW_DAYS);

            invoices.push(Invoice {
                document_number: Invoice::format_document_number(i + 1),
                issue_date: start_date + Duration::days(offset),
                issuer_tax_id: issuer.tax_id.clone(),
                issuer_legal_name: issuer.legal_name.clone(),
                recipient_tax_id: recipient.tax_id.clone(),
                recipient_legal_name: recipient.legal_name.clone(),
                product_code: product.code.clone(),
                product_description: product.description.clone(),
                quantity,
                unit_of_measure: UNIT_OF_MEASURE.to_string(),
                unit_value: product.unit_value,
                gross_value,
                tax_code: TAX_CODE.to_string(),
                icms_rate: self.icms_rate,
                icms_value,
                ipi_rate: self.ipi_rate,
                ipi_value,
            });
        }

        info!("Synthesized {} invoice records", invoices.len());
        Ok(invoices)
    }
}
