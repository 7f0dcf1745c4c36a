use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use context_register::config::{apply_env_overrides, read_settings, ObservabilityConfig, Settings};
use context_register::observability::logging;
use context_register::register::{HttpTransport, Registrar, RegistrationConfig, RegistrationOutcome};

#[derive(Parser)]
#[command(name = "register-cli")]
#[command(about = "Send a single context registration to the admin service", long_about = None)]
struct Cli {
    /// Optional TOML settings file; flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Admin base URL, e.g. http://localhost:9095
    #[arg(long)]
    admin_url: Option<String>,

    /// Context path to announce, e.g. /order
    #[arg(long)]
    context_path: Option<String>,

    /// Application name to announce
    #[arg(long)]
    app_name: Option<String>,

    /// Consume the trigger without calling the admin
    #[arg(long)]
    disabled: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(&ObservabilityConfig {
        log_level: cli.log_level.clone(),
        ..Default::default()
    });

    let mut settings = match &cli.config {
        Some(path) => match read_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => Settings::default(),
    };
    apply_env_overrides(&mut settings);
    apply_flags(&mut settings, &cli);

    let config = match RegistrationConfig::from_settings(&settings) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let transport = match HttpTransport::new(&settings.transport) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let registrar = Registrar::new(config, transport);
    let outcome = registrar.on_ready().await;
    println!("{} -> {}", registrar.register_url(), outcome);

    match outcome {
        RegistrationOutcome::Registered | RegistrationOutcome::Disabled => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn apply_flags(settings: &mut Settings, cli: &Cli) {
    if let Some(url) = &cli.admin_url {
        settings.register.admin_url = url.clone();
    }
    if let Some(path) = &cli.context_path {
        settings.register.context_path = path.clone();
    }
    if let Some(name) = &cli.app_name {
        settings.application.name = name.clone();
    }
    if cli.disabled {
        settings.register.full = false;
    }
}
