//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Registrar, host server, binaries produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (registration outcome counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Operators observe registration outcomes only through logs and metrics
//! - Metrics are cheap (atomic increments) and no-ops without an exporter

pub mod logging;
pub mod metrics;
