//! Domain layer: reference-entity models and the generation services.

pub mod entity_pool_service;
pub mod errors;
pub mod invoice_service;
pub mod models;

pub use entity_pool_service::EntityPoolService;
pub use errors::GeneratorError;
pub use invoice_service::InvoiceService;
