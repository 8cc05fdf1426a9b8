//! # CSV Invoice Export
//!
//! Serializes a synthesized invoice batch to a delimited text file: one
//! header row, then one row per invoice in input order. Values are written
//! exactly as stored; no re-rounding or field reordering happens here.
//!
//! ## File format
//!
//! ```csv
//! NumeroNF;DataEmissao;CNPJEmitente;...
//! NF-000001;2023-04-17;83914705/0042-13;...
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::info;

use crate::domain::models::invoice::Invoice;

/// Fixed column schema of the export file, in write order.
pub const EXPORT_HEADER: [&str; 17] = [
    "NumeroNF",
    "DataEmissao",
    "CNPJEmitente",
    "RazaoSocialEmitente",
    "CNPJDestinatario",
    "RazaoSocialDestinatario",
    "CodigoProduto",
    "DescricaoProduto",
    "Quantidade",
    "UnidadeMedida",
    "ValorUnitario",
    "ValorTotal",
    "CFOP",
    "AliquotaICMS",
    "ValorICMS",
    "AliquotaIPI",
    "ValorIPI",
];

/// Writes invoice batches as delimited text files.
#[derive(Clone)]
pub struct InvoiceExporter {
    delimiter: u8,
}

impl InvoiceExporter {
    /// Create an exporter writing fields separated by `delimiter`.
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Write `invoices` to `path`, creating or truncating the file.
    pub fn export(&self, invoices: &[Invoice], path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create export file {}", path.display()))?;
        let writer = BufWriter::new(file);
        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(&EXPORT_HEADER)?;
        for invoice in invoices {
            csv_writer.write_record(&Self::to_row(invoice))?;
        }
        csv_writer.flush()?;

        info!("Exported {} invoice rows to {}", invoices.len(), path.display());
        Ok(())
    }

    fn to_row(invoice: &Invoice) -> [String; 17] {
        [
            invoice.document_number.clone(),
            invoice.issue_date.format("%Y-%m-%d").to_string(),
            invoice.issuer_tax_id.clone(),
            invoice.issuer_legal_name.clone(),
            invoice.recipient_tax_id.clone(),
            invoice.recipient_legal_name.clone(),
            invoice.product_code.clone(),
            invoice.product_description.clone(),
            invoice.quantity.to_string(),
            invoice.unit_of_measure.clone(),
            invoice.unit_value.to_string(),
            invoice.gross_value.to_string(),
            invoice.tax_code.clone(),
            invoice.icms_rate.to_string(),
            invoice.icms_value.to_string(),
            invoice.ipi_rate.to_string(),
            invoice.ipi_value.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::domain::entity_pool_service::EntityPoolService;
    use crate::domain::invoice_service::InvoiceService;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn synthesize_batch(records: usize) -> Vec<Invoice> {
        let mut rng = StdRng::seed_from_u64(42);
        let pools = EntityPoolService::new();
        let products = pools.generate_products(15, &mut rng);
        let issuers = pools.generate_issuers(5, &mut rng);
        let recipients = pools.generate_recipients(5, &mut rng);
        let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        InvoiceService::new(&GeneratorConfig::default())
            .synthesize(records, &products, &issuers, &recipients, start_date, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_export_writes_header_plus_one_row_per_record() -> Result<()> {
        let invoices = synthesize_batch(2);
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("notas.csv");

        InvoiceExporter::new(b';').export(&invoices, &path)?;

        let content = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], EXPORT_HEADER.join(";"));
        for line in &lines[1..] {
            assert_eq!(line.split(';').count(), 17);
        }
        assert!(lines[1].starts_with("NF-000001;"));
        assert!(lines[2].starts_with("NF-000002;"));
        Ok(())
    }

    #[test]
    fn test_export_preserves_stored_values() -> Result<()> {
        let invoices = synthesize_batch(5);
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("notas.csv");

        InvoiceExporter::new(b';').export(&invoices, &path)?;

        let content = std::fs::read_to_string(&path)?;
        for (line, invoice) in content.lines().skip(1).zip(&invoices) {
            let fields: Vec<&str> = line.split(';').collect();
            assert_eq!(fields[0], invoice.document_number);
            assert_eq!(fields[1], invoice.issue_date.format("%Y-%m-%d").to_string());
            assert_eq!(fields[8], invoice.quantity.to_string());
            assert_eq!(fields[11], invoice.gross_value.to_string());
            assert_eq!(fields[14], invoice.icms_value.to_string());
        }
        Ok(())
    }

    #[test]
    fn test_export_empty_batch_writes_header_only() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.csv");

        InvoiceExporter::new(b';').export(&[], &path)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content.lines().count(), 1);
        Ok(())
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let invoices = synthesize_batch(1);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("notas.csv");

        let result = InvoiceExporter::new(b';').export(&invoices, &path);
        assert!(result.is_err());
    }
}
