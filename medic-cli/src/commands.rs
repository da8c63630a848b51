//! One function per subcommand.
//!
//! The outcome of the remote call is rendered on stdout and the function
//! still returns `Ok`; only setup errors (building the HTTP client)
//! propagate to the caller.

use crate::report;
use medic_admin::AdminClient;
use medic_core::config::{AdminApiConfig, DatastoreConfig};
use medic_core::service::ServicePatch;
use tracing::warn;

/// Read and print the current registration of `service`.
pub async fn inspect(config: &AdminApiConfig, service: &str) -> anyhow::Result<()> {
    let client = AdminClient::new(config)?;
    match client.get_service(service).await {
        Ok(svc) => println!("{}", report::render_service(&svc)?),
        Err(e) => println!("{}", report::render_inspect_error(&e)),
    }
    Ok(())
}

/// Submit `delta` for `service` and print the updated registration.
pub async fn patch(
    config: &AdminApiConfig,
    service: &str,
    delta: ServicePatch,
) -> anyhow::Result<()> {
    let client = AdminClient::new(config)?;
    match client.patch_service(service, &delta).await {
        Ok(updated) => {
            if !updated.reflects(&delta) {
                warn!(
                    host = %delta.host,
                    port = delta.port,
                    "updated record does not reflect the submitted delta"
                );
            }
            println!("{}", report::render_patch_confirmation(service));
            println!("{}", report::render_service(&updated)?);
        }
        Err(e) => println!("{}", report::render_patch_error(&e)),
    }
    Ok(())
}

/// Attempt one datastore connection and print the outcome.
pub async fn check_db(config: &DatastoreConfig) -> anyhow::Result<()> {
    match medic_probe::check(config).await {
        Ok(probe) => println!("{}", report::render_probe_success(&probe)),
        Err(e) => println!("{}", report::render_probe_error(&e)),
    }
    Ok(())
}
