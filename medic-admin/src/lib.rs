pub mod client;
pub mod error;

pub use client::AdminClient;
pub use error::AdminError;
