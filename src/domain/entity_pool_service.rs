//! # Entity Pool Generation
//!
//! Produces the fixed-size pools of reference entities (products, issuers,
//! recipients) that invoice synthesis samples from. Attributes are drawn at
//! random from small curated catalogs; pools are generated once per run and
//! held read-only for the duration of synthesis.
//!
//! Generation never fails: a count of zero yields an empty pool, and the
//! only state consumed is the caller's random source.

use log::debug;
use rand::Rng;
use rust_decimal::Decimal;

use crate::config::{PRODUCT_CODE_BASE, UNIT_VALUE_RANGE_CENTS};
use crate::domain::models::party::Party;
use crate::domain::models::product::Product;

/// Beverage display names products are drawn from, with replacement.
pub const PRODUCT_CATALOG: [&str; 12] = [
    "Whiskey Jack Daniels",
    "Vodka Absolut",
    "Gin Tanqueray",
    "Rum Bacardi",
    "Tequila Jose Cuervo",
    "Cerveja Heineken",
    "Espumante Chandon",
    "Whiskey Jameson",
    "Whiskey Chivas Regal",
    "Cachaça 51",
    "Licores Amarula",
    "Whiskey Ballantine's",
];

/// Company names for the issuer (seller) pool.
pub const ISSUER_CATALOG: [&str; 5] = [
    "Distribuidora Nacional LTDA",
    "Whiskey Premium Brasil SA",
    "Bebidas do Sul LTDA",
    "Exportadora de Destilados SA",
    "Comercial de Bebidas Norte LTDA",
];

/// Company names for the recipient (buyer) pool. Disjoint from the issuer
/// catalog so sellers and buyers stay conceptually separate.
pub const RECIPIENT_CATALOG: [&str; 5] = [
    "Empório Bebidas LTDA",
    "Supermercado Econômico SA",
    "Adega do Norte LTDA",
    "Casa das Bebidas SA",
    "Mercado Bebidas Premium LTDA",
];

/// Service that generates randomized reference-entity pools.
#[derive(Clone, Default)]
pub struct EntityPoolService;

impl EntityPoolService {
    pub fn new() -> Self {
        Self
    }

    /// Generate `count` products with sequential codes, randomized catalog
    /// descriptions and two-decimal unit values in [5.00, 300.00].
    ///
    /// Codes are `PRODUCT_CODE_BASE + index`, unique within the pool even
    /// when descriptions collide.
    pub fn generate_products(&self, count: usize, rng: &mut impl Rng) -> Vec<Product> {
        let mut products = Vec::with_capacity(count);
        for i in 0..count {
            let description = PRODUCT_CATALOG[rng.gen_range(0..PRODUCT_CATALOG.len())];
            let cents = rng.gen_range(UNIT_VALUE_RANGE_CENTS.0..=UNIT_VALUE_RANGE_CENTS.1);
            products.push(Product {
                code: (PRODUCT_CODE_BASE + i as u32).to_string(),
                description: description.to_string(),
                unit_value: Decimal::new(cents, 2),
            });
        }
        debug!("Generated product pool of {}", products.len());
        products
    }

    /// Generate `count` issuers from the seller catalog.
    pub fn generate_issuers(&self, count: usize, rng: &mut impl Rng) -> Vec<Party> {
        let issuers = self.generate_parties(&ISSUER_CATALOG, count, rng);
        debug!("Generated issuer pool of {}", issuers.len());
        issuers
    }

    /// Generate `count` recipients from the buyer catalog.
    pub fn generate_recipients(&self, count: usize, rng: &mut impl Rng) -> Vec<Party> {
        let recipients = self.generate_parties(&RECIPIENT_CATALOG, count, rng);
        debug!("Generated recipient pool of {}", recipients.len());
        recipients
    }

    fn generate_parties(&self, catalog: &[&str], count: usize, rng: &mut impl Rng) -> Vec<Party> {
        let mut parties = Vec::with_capacity(count);
        for _ in 0..count {
            let legal_name = catalog[rng.gen_range(0..catalog.len())];
            parties.push(Party {
                tax_id: Self::random_tax_id(rng),
                legal_name: legal_name.to_string(),
            });
        }
        parties
    }

    /// Compose a tax id from three random numeric segments, formatted as
    /// 8-digit/4-digit-2-digit with zero padding. Uniqueness is not
    /// guaranteed; collisions within a pool are accepted.
    fn random_tax_id(rng: &mut impl Rng) -> String {
        let root: u32 = rng.gen_range(10_000_000..=99_999_999);
        let branch: u32 = rng.gen_range(1..=999);
        let check: u32 = rng.gen_range(1..=99);
        format!("{:08}/{:04}-{:02}", root, branch, check)
    }
}
