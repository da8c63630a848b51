//! Connectivity probe for the gateway's backing datastore.
//!
//! One attempt: open a PostgreSQL connection with the configured
//! credentials, confirm the handshake, close it. No query is executed —
//! reachability and authentication are the only things being checked.

pub mod error;
pub mod probe;

pub use error::ProbeError;
pub use probe::{ProbeReport, check};
