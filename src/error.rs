//! Error types for the fact collector.

use thiserror::Error;

/// Result type alias for collector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes for a collection run.
///
/// Sampling failures (`Sensor`, `Remote`, `Parse`) are recoverable per fact;
/// `Config` and `Database` abort the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("sensor unavailable: {0}")]
    Sensor(String),

    #[error("remote command failed: {0}")]
    Remote(String),

    #[error("unexpected sensor output: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("errors occurred on facts [{}]", .0.join(", "))]
    FactsFailed(Vec<&'static str>),
}
