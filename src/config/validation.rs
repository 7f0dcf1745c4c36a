//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require the registration identity fields
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Settings → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::Settings;

/// A single semantic problem found in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string is missing or empty.
    #[error("missing required setting `{0}`")]
    Missing(&'static str),

    /// A timeout was configured as zero.
    #[error("`{0}` must be greater than zero")]
    ZeroTimeout(&'static str),

    /// The listener bind address is not a socket address.
    #[error("invalid bind address '{0}'")]
    BindAddress(String),
}

/// Check the settings, collecting every problem found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let required = [
        ("register.context_path", &settings.register.context_path),
        ("register.admin_url", &settings.register.admin_url),
        ("application.name", &settings.application.name),
    ];
    for (key, value) in required {
        if value.is_empty() {
            errors.push(ValidationError::Missing(key));
        }
    }

    if settings.transport.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("transport.connect_timeout_secs"));
    }
    if settings.transport.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("transport.request_timeout_secs"));
    }
    if settings.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("listener.request_timeout_secs"));
    }

    if settings.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            settings.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Settings {
        let mut settings = Settings::default();
        settings.application.name = "order-service".into();
        settings.register.admin_url = "http://admin:9095".into();
        settings.register.context_path = "/order".into();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid()).is_ok());
    }

    #[test]
    fn test_reports_every_missing_field() {
        let errors = validate_settings(&Settings::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Missing("register.context_path"),
                ValidationError::Missing("register.admin_url"),
                ValidationError::Missing("application.name"),
            ]
        );
    }

    #[test]
    fn test_rejects_zero_timeouts_and_bad_bind() {
        let mut settings = valid();
        settings.transport.request_timeout_secs = 0;
        settings.listener.bind_address = "not-an-address".into();

        let errors = validate_settings(&settings).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroTimeout("transport.request_timeout_secs")));
        assert!(errors.contains(&ValidationError::BindAddress("not-an-address".into())));
    }
}
