//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Settings → RegistrationConfig → HttpTransport → Registrar
//!
//! Ready (ready.rs):
//!     Host bound and serving → ReadySignal::fire → listener task → Registrar::on_ready
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger → host server drains → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: configuration errors abort startup
//! - The ready signal may fire more than once; the registrar absorbs duplicates
//! - Registration failures never affect serving

pub mod ready;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use ready::{spawn_ready_listener, ReadyEvent, ReadySignal};
pub use shutdown::Shutdown;
