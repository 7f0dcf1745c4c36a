//! Registration error definitions.

use thiserror::Error;

use crate::config::ConfigError;

/// Required registration inputs were missing or empty. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Names of every required field that was absent or empty.
    #[error("registration must configure contextPath, adminUrl and appName; missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// The registration call could not be delivered.
#[derive(Debug, Error)]
pub enum TransportError {
    /// reqwest failed (connect, timeout, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other I/O-level failure reported by a transport.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors that stop the registering process from starting.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
