//! Storage layer: the CSV export sink and the persistence-connector
//! contract for future database backends.

pub mod csv;
pub mod traits;

pub use traits::{ConnectionParams, PersistenceConnector};
