//! Medic — operator toolkit for a Kong-style gateway deployment.
//!
//! One subcommand per diagnostic:
//!   inspect    read a service registration from the gateway admin API
//!   patch      submit a host/port delta for that registration
//!   check-db   open and close one connection to the backing datastore
//!
//! Every diagnostic makes a single attempt and reports its outcome on
//! stdout; a failed remote call is a reported result, not a process
//! failure, so the exit code stays 0.

mod commands;
mod report;

use clap::{Parser, Subcommand};
use medic_core::MedicConfig;
use medic_core::service::ServicePatch;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "medic",
    version,
    about = "Gateway service inspection & repair toolkit"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "/etc/medic/medic.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read the current registration of a gateway service
    Inspect {
        /// Service name as registered on the gateway
        #[arg(default_value = "staff-service")]
        service: String,
    },
    /// Submit a partial update (host, port) for a gateway service
    Patch {
        /// Service name as registered on the gateway
        #[arg(default_value = "staff-service")]
        service: String,

        /// Upstream host the gateway should route to
        #[arg(long, default_value = "staff-service")]
        host: String,

        /// Upstream port the gateway should route to
        #[arg(long, default_value_t = 9002)]
        port: u16,
    },
    /// Verify connectivity to the gateway's backing datastore
    CheckDb,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    // Logs go to stderr; stdout carries only the rendered outcome.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        MedicConfig::load(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        MedicConfig::default()
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, config: MedicConfig) -> anyhow::Result<()> {
    match command {
        Command::Inspect { service } => commands::inspect(&config.admin, &service).await,
        Command::Patch {
            service,
            host,
            port,
        } => commands::patch(&config.admin, &service, ServicePatch { host, port }).await,
        Command::CheckDb => commands::check_db(&config.datastore).await,
    }
}
