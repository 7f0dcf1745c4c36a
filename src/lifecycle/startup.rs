//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn validated settings into a registrar with its production transport
//! - Wire the registrar to the ready signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The transport is built once and owned by the registrar

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::lifecycle::ready::{spawn_ready_listener, ReadySignal};
use crate::register::{HttpTransport, RegisterError, Registrar, RegistrationConfig};

/// Build the registrar for `settings`.
pub fn build_registrar(settings: &Settings) -> Result<Registrar<HttpTransport>, RegisterError> {
    let config = RegistrationConfig::from_settings(settings)?;
    let transport = HttpTransport::new(&settings.transport)?;

    tracing::info!(
        register_url = %config.register_url(),
        context_path = %config.context_path(),
        app_name = %config.app_name(),
        full = config.full(),
        "Registrar configured"
    );

    Ok(Registrar::new(config, transport))
}

/// Build the registrar and subscribe it to `ready`.
pub fn install_registrar(
    settings: &Settings,
    ready: &ReadySignal,
) -> Result<(Arc<Registrar<HttpTransport>>, JoinHandle<()>), RegisterError> {
    let registrar = Arc::new(build_registrar(settings)?);
    let listener = spawn_ready_listener(registrar.clone(), ready.subscribe());
    Ok((registrar, listener))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::ConfigurationError;

    #[test]
    fn test_missing_app_name_is_fatal() {
        let mut settings = Settings::default();
        settings.register.admin_url = "http://admin:9095".into();
        settings.register.context_path = "/order".into();

        match build_registrar(&settings) {
            Err(RegisterError::Configuration(ConfigurationError::Missing(fields))) => {
                assert_eq!(fields, vec!["appName"]);
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("registrar built without an app name"),
        }
    }

    #[test]
    fn test_builds_with_complete_settings() {
        let mut settings = Settings::default();
        settings.application.name = "order-service".into();
        settings.register.admin_url = "http://admin:9095".into();
        settings.register.context_path = "/order".into();

        let registrar = build_registrar(&settings).unwrap();
        assert_eq!(
            registrar.register_url(),
            "http://admin:9095/soul-client/springcloud-register"
        );
        assert!(!registrar.is_fired());
    }
}
