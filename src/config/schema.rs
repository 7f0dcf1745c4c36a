//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the registering
//! application. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Application identity.
    pub application: ApplicationConfig,

    /// Admin registration settings.
    pub register: RegisterConfig,

    /// HTTP client settings used for the registration call.
    pub transport: TransportConfig,

    /// Host application listener.
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Application identity.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Name announced to the admin service (`spring.application.name` equivalent).
    pub name: String,
}

/// Admin registration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Base URL of the admin service (e.g., "http://admin:9095").
    pub admin_url: String,

    /// Path prefix this application is reachable under (e.g., "/order").
    pub context_path: String,

    /// Register on startup. When false the ready trigger is consumed without I/O.
    pub full: bool,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            admin_url: String::new(),
            context_path: String::new(),
            full: true,
        }
    }
}

/// HTTP client settings for the registration transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
            use_system_proxy: true,
        }
    }
}

/// Listener configuration for the host application.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_file_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [register]
            admin_url = "http://admin:9095"
            "#,
        )
        .unwrap();

        assert_eq!(settings.register.admin_url, "http://admin:9095");
        assert!(settings.register.full);
        assert!(settings.register.context_path.is_empty());
        assert_eq!(settings.transport.request_timeout_secs, 10);
        assert_eq!(settings.listener.bind_address, "0.0.0.0:8080");
        assert!(!settings.observability.metrics_enabled);
    }

    #[test]
    fn test_full_flag_can_be_disabled() {
        let settings: Settings = toml::from_str(
            r#"
            [register]
            full = false
            "#,
        )
        .unwrap();
        assert!(!settings.register.full);
    }
}
