//! Environment-based configuration.
//!
//! The collector is configured entirely through environment variables: the
//! database connection string and, optionally, the connection command for
//! the remote temperature probe.

use std::env;

use crate::error::{Error, Result};
use crate::facts::remote::RemoteProbe;

/// Connection string for the facts database (libpq keyword/value or URI form).
pub const POSTGRES_DSN: &str = "POSTGRES_DSN";

/// Command prefix used to reach the remote device, e.g. `ssh pi@lounge-pi`.
/// When unset, the remote temperature fact is disabled.
pub const RPI_SSH_COMMAND: &str = "RPI_SSH_COMMAND";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub dsn: String,
    pub remote: Option<RemoteProbe>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(POSTGRES_DSN).ok(), env::var(RPI_SSH_COMMAND).ok())
    }

    fn from_vars(dsn: Option<String>, remote: Option<String>) -> Result<Self> {
        let dsn = dsn.ok_or_else(|| Error::Config(format!("{POSTGRES_DSN} is not set")))?;
        let remote = remote.as_deref().and_then(RemoteProbe::new);
        Ok(Self { dsn, remote })
    }
}
