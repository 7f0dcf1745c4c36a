//! Context registration host (v1)
//!
//! Serves a minimal application under its context path and registers that
//! path with the admin service once the listener is up.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.toml + env ──▶ Settings ──▶ RegistrationConfig ──▶ Registrar ◀── HttpTransport
//!                                                               ▲
//!   TcpListener bound ──▶ HostServer::run ──▶ ReadySignal ──────┘ (on_ready, once)
//!                                                               │
//!                                                               ▼
//!                                   POST {admin_url}/soul-client/springcloud-register
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use context_register::config::{load_config, load_from_env};
use context_register::lifecycle::startup::install_registrar;
use context_register::observability::{logging, metrics};
use context_register::register::RegisterError;
use context_register::{HostServer, ReadySignal, Shutdown};

#[derive(Parser)]
#[command(name = "context-register")]
#[command(about = "Serve an application and register its context path with the admin", long_about = None)]
struct Args {
    /// TOML settings file. Without it, settings come from the environment only.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), RegisterError> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };

    logging::init_logging(&settings.observability);
    tracing::info!("context-register v{} starting", env!("CARGO_PKG_VERSION"));

    if settings.observability.metrics_enabled {
        match settings.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %settings.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let ready = ReadySignal::new();
    let (registrar, _ready_listener) = install_registrar(&settings, &ready)?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let listener = TcpListener::bind(&settings.listener.bind_address).await?;

    let fired = registrar.clone();
    let server = HostServer::new(&settings, move || fired.is_fired());
    server.run(listener, ready, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
