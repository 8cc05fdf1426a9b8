//! Domain model for the parties on an invoice.
//!
//! Issuers and recipients share the same shape. They live in separate,
//! independently generated pools with no identity linkage between them; the
//! same legal name appearing in both pools means two unrelated entities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Formatted registration identifier. Structurally valid but not
    /// guaranteed unique within a pool.
    pub tax_id: String,
    pub legal_name: String,
}
