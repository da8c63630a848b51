use crate::error::AdminError;
use medic_core::config::AdminApiConfig;
use medic_core::service::{Service, ServicePatch};
use std::time::Duration;
use tracing::debug;

/// Client for the gateway's administrative HTTP listener.
///
/// Every method performs exactly one request — no retries. Remote-reported
/// failures (non-success status) and transport failures come back as
/// distinct [`AdminError`] variants.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(config: &AdminApiConfig) -> Result<Self, AdminError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /services/{name} — read the current registration of a service.
    pub async fn get_service(&self, name: &str) -> Result<Service, AdminError> {
        let url = format!("{}/services/{}", self.base_url, name);
        debug!(%url, "reading service registration");
        let resp = self.http.get(&url).send().await?;
        Self::read_record(resp).await
    }

    /// PATCH /services/{name} — submit a host/port delta for a service.
    /// Only the fields in the delta change; the gateway returns the updated
    /// record.
    pub async fn patch_service(
        &self,
        name: &str,
        delta: &ServicePatch,
    ) -> Result<Service, AdminError> {
        let url = format!("{}/services/{}", self.base_url, name);
        debug!(%url, host = %delta.host, port = delta.port, "patching service registration");
        let resp = self.http.patch(&url).json(delta).send().await?;
        Self::read_record(resp).await
    }

    /// Split a response into the error taxonomy: non-success status becomes
    /// `Gateway` with the body kept verbatim, a success status is decoded
    /// into a record.
    async fn read_record(resp: reqwest::Response) -> Result<Service, AdminError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(AdminError::Gateway {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
