//! Rendering of operation outcomes.
//!
//! Everything the operator sees on stdout is produced here, so the wording
//! is testable without a live gateway or datastore.

use medic_admin::AdminError;
use medic_core::service::Service;
use medic_probe::{ProbeError, ProbeReport};

/// Pretty-print the full record exactly as the gateway returned it.
pub fn render_service(svc: &Service) -> serde_json::Result<String> {
    serde_json::to_string_pretty(svc)
}

pub fn render_inspect_error(err: &AdminError) -> String {
    match err {
        AdminError::Gateway { status, body } => format!("Error: {status} - {body}"),
        other => format!("Request failed: {other}"),
    }
}

pub fn render_patch_confirmation(service: &str) -> String {
    format!("Successfully updated {service} configuration.")
}

pub fn render_patch_error(err: &AdminError) -> String {
    match err {
        AdminError::Gateway { status, body } => {
            format!("Error updating service: {status} - {body}")
        }
        other => format!("Request failed: {other}"),
    }
}

pub fn render_probe_success(report: &ProbeReport) -> String {
    format!("Connection successful! ({} ms)", report.latency_ms)
}

pub fn render_probe_error(err: &ProbeError) -> String {
    match err {
        ProbeError::Connect(e) => format!("Connection failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rendered_record_is_the_formatted_equivalent() {
        let original = json!({"host": "staff-service", "port": 9002, "id": "abc"});
        let svc: Service = serde_json::from_value(original.clone()).unwrap();
        let text = render_service(&svc).unwrap();
        // Pretty-printed, and parses back to exactly the gateway's structure
        assert!(text.contains("\n"));
        assert!(text.contains("\"host\": \"staff-service\""));
        let back: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn inspect_error_carries_status_and_body() {
        let err = AdminError::Gateway {
            status: 404,
            body: "not found".into(),
        };
        let msg = render_inspect_error(&err);
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn patch_confirmation_names_the_service() {
        let msg = render_patch_confirmation("staff-service");
        assert!(msg.contains("Successfully updated"));
        assert!(msg.contains("staff-service"));
    }

    #[test]
    fn patch_error_carries_status_and_body() {
        let err = AdminError::Gateway {
            status: 500,
            body: "An invalid response was received from the upstream server".into(),
        };
        let msg = render_patch_error(&err);
        assert!(msg.contains("500"));
        assert!(msg.contains("invalid response"));
    }

    #[test]
    fn probe_success_confirms_and_shows_latency() {
        let msg = render_probe_success(&ProbeReport { latency_ms: 12 });
        assert!(msg.contains("successful"));
        assert!(msg.contains("12 ms"));
    }

    #[test]
    fn probe_error_says_failed() {
        let err = ProbeError::Connect(sqlx::Error::Configuration("empty host".into()));
        let msg = render_probe_error(&err);
        assert!(msg.contains("failed"));
        assert!(msg.contains("empty host"));
    }
}
