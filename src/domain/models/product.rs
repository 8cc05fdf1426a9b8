//! Domain model for a product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A reference product sampled during invoice synthesis.
///
/// Codes are sequential and unique within a pool; descriptions are drawn
/// with replacement from a catalog and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub description: String,
    pub unit_value: Decimal,
}
