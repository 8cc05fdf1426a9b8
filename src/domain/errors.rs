//! Typed errors for the generation domain.
//!
//! These are all precondition violations: they surface before any record is
//! generated and there is no retry or partial-failure state.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Sampling from an empty pool is undefined.
    #[error("cannot sample from an empty {0} pool")]
    EmptyPool(&'static str),

    /// Record counts arrive as signed integers at the CLI boundary.
    #[error("record count must not be negative (got {0})")]
    NegativeRecordCount(i64),

    #[error("invalid start date '{0}', expected YYYY-MM-DD")]
    InvalidStartDate(String),
}
