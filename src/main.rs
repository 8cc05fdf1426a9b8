//! Entry point: generate entity pools, synthesize invoices, export to CSV.
//!
//! Usage: `nf-datagen [records] [output-path] [start-date] [seed]`
//! All arguments are optional; defaults mirror `GeneratorConfig::default()`.

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use nf_datagen::config::GeneratorConfig;
use nf_datagen::domain::{EntityPoolService, InvoiceService};
use nf_datagen::storage::csv::InvoiceExporter;

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::from_args(std::env::args().skip(1))?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pools = EntityPoolService::new();
    let products = pools.generate_products(config.product_pool_size, &mut rng);
    let issuers = pools.generate_issuers(config.issuer_pool_size, &mut rng);
    let recipients = pools.generate_recipients(config.recipient_pool_size, &mut rng);
    info!(
        "Generated pools: {} products, {} issuers, {} recipients",
        products.len(),
        issuers.len(),
        recipients.len()
    );

    let synthesizer = InvoiceService::new(&config);
    let invoices = synthesizer.synthesize(
        config.records,
        &products,
        &issuers,
        &recipients,
        config.start_date,
        &mut rng,
    )?;

    let exporter = InvoiceExporter::new(config.delimiter);
    exporter.export(&invoices, &config.output_path)?;

    info!(
        "Wrote {} records to {}",
        invoices.len(),
        config.output_path.display()
    );
    Ok(())
}
