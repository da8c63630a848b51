use crate::error::ProbeError;
use medic_core::config::DatastoreConfig;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::time::Instant;
use tracing::debug;

/// Outcome of a successful connectivity check.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Time to complete the startup handshake.
    pub latency_ms: u64,
}

/// Open one connection to the datastore, then close it.
///
/// `close` consumes the connection and sends the protocol's termination
/// message; a successful probe leaves nothing open behind it.
pub async fn check(config: &DatastoreConfig) -> Result<ProbeReport, ProbeError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password);

    debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        user = %config.user,
        "attempting datastore connection"
    );

    let started = Instant::now();
    let conn = options.connect().await?;
    let latency_ms = started.elapsed().as_millis() as u64;
    conn.close().await?;

    debug!(latency_ms, "datastore handshake completed");
    Ok(ProbeReport { latency_ms })
}
