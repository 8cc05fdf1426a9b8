//! CSV-based export sink for synthesized invoice batches.

pub mod invoice_exporter;

pub use invoice_exporter::{InvoiceExporter, EXPORT_HEADER};
