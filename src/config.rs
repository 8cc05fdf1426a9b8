//! Generator configuration.
//!
//! Every constant the generation logic depends on (sampling ranges, tax
//! rates, document formatting, default pool sizes) is promoted to a named
//! value here so the pipeline stays free of inline literals.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::errors::GeneratorError;

/// Inclusive quantity range sampled for each invoice line.
pub const QUANTITY_RANGE: (u32, u32) = (1, 50);

/// Issue dates fall within this many days after the start date, inclusive.
pub const ISSUE_DATE_WINDOW_DAYS: i64 = 365;

/// Inclusive unit-value range in cents (5.00 to 300.00).
pub const UNIT_VALUE_RANGE_CENTS: (i64, i64) = (500, 30_000);

/// Base offset for sequential product codes.
pub const PRODUCT_CODE_BASE: u32 = 1000;

/// Fixed unit of measure stamped on every invoice line.
pub const UNIT_OF_MEASURE: &str = "UN";

/// Fixed transaction-type classification code (CFOP).
pub const TAX_CODE: &str = "5405";

/// Prefix for sequential document numbers.
pub const DOCUMENT_PREFIX: &str = "NF";

/// Zero-padding width for the numeric part of document numbers.
pub const DOCUMENT_NUMBER_WIDTH: usize = 6;

/// Caller-supplied configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of invoice records to synthesize.
    pub records: usize,
    /// Size of the product pool.
    pub product_pool_size: usize,
    /// Size of the issuer pool.
    pub issuer_pool_size: usize,
    /// Size of the recipient pool.
    pub recipient_pool_size: usize,
    /// Earliest possible issue date.
    pub start_date: NaiveDate,
    /// Path of the CSV file to write.
    pub output_path: PathBuf,
    /// Field delimiter for the export file.
    pub delimiter: u8,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// ICMS rate applied to each record's gross value, in percent.
    pub icms_rate: Decimal,
    /// IPI rate applied to each record's gross value, in percent.
    pub ipi_rate: Decimal,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 100_000,
            product_pool_size: 15,
            issuer_pool_size: 5,
            recipient_pool_size: 5,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            output_path: PathBuf::from("notas_fiscais.csv"),
            delimiter: b';',
            seed: None,
            icms_rate: Decimal::new(18, 0),
            ipi_rate: Decimal::new(10, 0),
        }
    }
}

impl GeneratorConfig {
    /// Build a config from positional CLI arguments, all optional:
    /// `[records] [output-path] [start-date] [seed]`.
    ///
    /// A negative record count is rejected here, before any generation
    /// starts; the synthesizer itself only ever sees a non-negative count.
    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut config = Self::default();

        if let Some(raw) = args.next() {
            let records: i64 = raw
                .parse()
                .with_context(|| format!("invalid record count '{}'", raw))?;
            if records < 0 {
                return Err(GeneratorError::NegativeRecordCount(records).into());
            }
            config.records = records as usize;
        }
        if let Some(raw) = args.next() {
            config.output_path = PathBuf::from(raw);
        }
        if let Some(raw) = args.next() {
            config.start_date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| GeneratorError::InvalidStartDate(raw))?;
        }
        if let Some(raw) = args.next() {
            let seed: u64 = raw
                .parse()
                .with_context(|| format!("invalid seed '{}'", raw))?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}
