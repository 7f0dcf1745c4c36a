//! Host application subsystem.
//!
//! # Data Flow
//! ```text
//! TcpListener bound
//!     → server.rs (Axum router, tracing + timeout layers)
//!     → ReadySignal::fire (registration starts in the background)
//!     → serve until shutdown broadcast
//! ```

pub mod server;

pub use server::{HealthStatus, HostServer};
