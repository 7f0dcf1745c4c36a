//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides: APP_NAME, REGISTER_*)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!     → RegistrationConfig / HostServer / HttpTransport
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    apply_env_overrides, load_config, load_config_with, load_from_env, read_settings, ConfigError,
};
pub use schema::{
    ApplicationConfig, ListenerConfig, ObservabilityConfig, RegisterConfig, Settings,
    TransportConfig,
};
