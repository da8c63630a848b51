use thiserror::Error;

/// Errors from a single datastore connection attempt.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Anything the driver reports — unreachable host, refused connection,
    /// authentication failure, missing database.
    #[error("connection failed: {0}")]
    Connect(#[from] sqlx::Error),
}
