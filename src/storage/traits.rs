//! # Storage Traits
//!
//! Contract for a future database-backed persistence layer. The generator
//! itself only writes flat files; this trait defines the surface a concrete
//! backend has to provide, without bundling an implementation into the core.

use anyhow::Result;

/// Connection parameters for a persistence backend.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
}

/// Trait defining the interface for a persistence connector.
///
/// Implementations own their failure modes (connection loss, query
/// timeouts, authentication); none are prescribed here.
pub trait PersistenceConnector: Send + Sync {
    /// Open the connection.
    fn connect(&mut self) -> Result<()>;

    /// Close the connection. Closing an unopened connection is a no-op.
    fn disconnect(&mut self) -> Result<()>;

    /// Whether the connection is currently open.
    fn is_connected(&self) -> bool;

    /// Execute a query, returning one row per record as raw string fields.
    fn execute_query(&mut self, query: &str) -> Result<Vec<Vec<String>>>;

    /// Dump the backend's invoice table as CSV-formatted text.
    fn import_to_csv(&mut self) -> Result<String>;
}
