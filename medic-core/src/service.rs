use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service registration — Kong admin API compatible.
/// Describes how the gateway routes traffic to one upstream.
///
/// The record is owned by the gateway; every field we model is optional and
/// anything we don't model (timestamps, tags, retry tuning, ...) is kept
/// verbatim in `extra` so a re-serialized record matches what the gateway
/// actually returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Upstream host the gateway forwards to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Upstream port the gateway forwards to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Gateway-assigned metadata, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Service {
    /// Whether this record reflects a submitted patch delta.
    pub fn reflects(&self, patch: &ServicePatch) -> bool {
        self.host.as_deref() == Some(patch.host.as_str()) && self.port == Some(patch.port)
    }
}

/// Partial update for a service registration.
/// Serializes to exactly `{"host": ..., "port": ...}` — the gateway leaves
/// every other field of the record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePatch {
    pub host: String,
    pub port: u16,
}
