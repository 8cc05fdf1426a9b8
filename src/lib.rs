//! # Synthetic Fiscal Invoice Data Generator
//!
//! Generates fictitious fiscal invoice records (notas fiscais) for testing,
//! demos and load generation, and exports them as `;`-delimited CSV.
//!
//! The pipeline is strictly linear: the entity pool service produces
//! read-only pools of products, issuers and recipients; the invoice service
//! samples those pools to synthesize records; the CSV exporter writes the
//! batch to a flat file. Nothing feeds back into an earlier stage.

pub mod config;
pub mod domain;
pub mod storage;
