//! PostgreSQL sink for fact readings.
//!
//! The target table (the timestamp is server-assigned):
//!
//! ```sql
//! create table computer_facts (
//!     ts_utc timestamp with time zone default CURRENT_TIMESTAMP not null,
//!     fact_name text not null,
//!     fact_value real not null
//! );
//! ```

use async_trait::async_trait;
use log::error;
use tokio_postgres::NoTls;

use crate::error::Result;
use crate::facts::Fact;

const INSERT_SQL: &str = "insert into computer_facts (fact_name, fact_value) values ($1, $2)";

/// Destination for fact readings. Tests substitute an in-memory sink.
#[async_trait]
pub trait FactSink: Send + Sync {
    async fn insert(&self, fact: Fact, value: f64) -> Result<()>;
}

/// Live database connection, held for the duration of one run.
pub struct FactStore {
    client: tokio_postgres::Client,
}

impl FactStore {
    /// Connects with the configured DSN. The connection task runs until the
    /// client is dropped at the end of the run.
    pub async fn connect(dsn: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(dsn, NoTls).await?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!("database connection error: {err}");
            }
        });
        Ok(Self { client })
    }
}

#[async_trait]
impl FactSink for FactStore {
    async fn insert(&self, fact: Fact, value: f64) -> Result<()> {
        // fact_value is a `real` column; narrow at the boundary.
        self.client
            .execute(INSERT_SQL, &[&fact.name(), &(value as f32)])
            .await?;
        Ok(())
    }
}
