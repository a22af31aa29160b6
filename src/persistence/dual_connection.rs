//! Read/write PostgreSQL connection pair for test fixtures that seed through
//! one connection and verify through another.

use crate::persistence::error::PersistenceError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::info;

/// Separate read and write connections, e.g. to a replica and a primary.
pub struct DualConnection {
    pub read: PgConnection,
    pub write: PgConnection,
}

impl DualConnection {
    /// Parse and open the read connection, then the write connection.
    ///
    /// The first failure is returned; a read connection that was already
    /// opened is dropped.
    pub async fn connect(read_url: &str, write_url: &str) -> Result<Self, PersistenceError> {
        let read_options = parse_url("read", read_url)?;
        let read = PgConnection::connect_with(&read_options).await?;
        info!("Opened read connection");

        let write_options = parse_url("write", write_url)?;
        let write = PgConnection::connect_with(&write_options).await?;
        info!("Opened write connection");

        Ok(Self { read, write })
    }

    pub async fn close(self) -> Result<(), PersistenceError> {
        self.read.close().await?;
        self.write.close().await?;
        Ok(())
    }
}

fn parse_url(role: &'static str, url: &str) -> Result<PgConnectOptions, PersistenceError> {
    if !(url.starts_with("postgres:") || url.starts_with("postgresql:")) {
        return Err(PersistenceError::InvalidUrl {
            role,
            reason: format!(
                "expected postgres:// or postgresql://, got: {}",
                url.split(':').next().unwrap_or("unknown")
            ),
        });
    }

    url.parse::<PgConnectOptions>()
        .map_err(|e| PersistenceError::InvalidUrl {
            role,
            reason: e.to_string(),
        })
}
