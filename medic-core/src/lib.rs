pub mod config;
pub mod service;

pub use config::MedicConfig;
pub use service::{Service, ServicePatch};
