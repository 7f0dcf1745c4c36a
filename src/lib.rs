//! Context registration for applications fronted by a Soul gateway.
//!
//! Announces the application's context path to the admin service exactly once,
//! when the host application reports that it is ready.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod register;

pub use config::Settings;
pub use http::HostServer;
pub use lifecycle::{ReadySignal, Shutdown};
pub use register::{Registrar, RegistrationConfig, RegistrationOutcome};
