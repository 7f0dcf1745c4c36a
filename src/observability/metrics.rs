//! Metrics collection and exposition.
//!
//! # Metrics
//! - `context_register_attempts_total` (counter): ready events handled, by outcome
//!   (`registered`, `rejected`, `failed`, `disabled`, `already_fired`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const REGISTRATION_ATTEMPTS: &str = "context_register_attempts_total";

/// Record one handled ready event.
pub fn record_registration(outcome: &'static str) {
    ::metrics::counter!(REGISTRATION_ATTEMPTS, "outcome" => outcome).increment(1);
}

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus metrics exporter"),
    }
}
