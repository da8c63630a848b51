use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level toolkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicConfig {
    #[serde(default)]
    pub admin: AdminApiConfig,
    #[serde(default)]
    pub datastore: DatastoreConfig,
}

/// Gateway admin API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminApiConfig {
    /// Base URL of the gateway's administrative listener.
    #[serde(default = "default_admin_base_url")]
    pub base_url: String,
    #[serde(default = "default_admin_timeout")]
    pub timeout_ms: u64,
}

/// Credentials for the datastore backing the gateway's own config storage.
/// Defaults mirror the deployment this toolkit was written against
/// (including the empty password); every field can be overridden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatastoreConfig {
    #[serde(default = "default_datastore_host")]
    pub host: String,
    #[serde(default = "default_datastore_port")]
    pub port: u16,
    #[serde(default = "default_datastore_name")]
    pub database: String,
    #[serde(default = "default_datastore_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_admin_base_url() -> String { "http://localhost:8201".into() }
fn default_admin_timeout() -> u64 { 5000 }
fn default_datastore_host() -> String { "localhost".into() }
fn default_datastore_port() -> u16 { 5433 }
fn default_datastore_name() -> String { "kong".into() }
fn default_datastore_user() -> String { "kong".into() }

// ── Impls ─────────────────────────────────────────────────────

impl Default for MedicConfig {
    fn default() -> Self {
        Self {
            admin: AdminApiConfig::default(),
            datastore: DatastoreConfig::default(),
        }
    }
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_admin_base_url(),
            timeout_ms: default_admin_timeout(),
        }
    }
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        Self {
            host: default_datastore_host(),
            port: default_datastore_port(),
            database: default_datastore_name(),
            user: default_datastore_user(),
            password: String::new(),
        }
    }
}

impl MedicConfig {
    /// Load configuration from YAML file + env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: MedicConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("MEDIC_").split("_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── Default values ────────────────────────────────────────────

    #[test]
    fn default_admin_config_points_at_local_listener() {
        let cfg = AdminApiConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:8201");
        assert_eq!(cfg.timeout_ms, 5000);
    }

    #[test]
    fn default_datastore_config_has_expected_values() {
        let cfg = DatastoreConfig::default();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5433);
        assert_eq!(cfg.database, "kong");
        assert_eq!(cfg.user, "kong");
        assert_eq!(cfg.password, "");
    }

    #[test]
    fn medic_config_default_builds_without_panic() {
        let cfg = MedicConfig::default();
        // Ensure nested defaults compose correctly
        assert_eq!(cfg.admin.base_url, "http://localhost:8201");
        assert_eq!(cfg.datastore.port, 5433);
    }

    // ── MedicConfig::load() ───────────────────────────────────────

    #[test]
    fn load_from_valid_yaml_overrides_defaults() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "admin:\n  base_url: \"http://gw-admin:8001\"\n").unwrap();
        let cfg = MedicConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.admin.base_url, "http://gw-admin:8001");
        // Defaults still apply for unspecified fields
        assert_eq!(cfg.admin.timeout_ms, 5000);
        assert_eq!(cfg.datastore.database, "kong");
    }

    #[test]
    fn load_yaml_with_datastore_credentials() {
        let yaml = r#"
datastore:
  host: "db.internal"
  port: 5432
  database: "kong_prod"
  user: "ops"
  password: "hunter2"
"#;
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "{yaml}").unwrap();
        let cfg = MedicConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.datastore.host, "db.internal");
        assert_eq!(cfg.datastore.port, 5432);
        assert_eq!(cfg.datastore.database, "kong_prod");
        assert_eq!(cfg.datastore.user, "ops");
        assert_eq!(cfg.datastore.password, "hunter2");
    }

    #[test]
    fn load_from_nonexistent_file_returns_defaults_or_error() {
        let result = MedicConfig::load(Path::new("/nonexistent/path/medic.yaml"));
        // Figment merges an empty provider for a missing file — either
        // defaults or an error is acceptable; ensure we don't panic
        let _ = result;
    }
}
