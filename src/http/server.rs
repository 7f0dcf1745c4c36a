//! HTTP server for the registering application.
//!
//! # Responsibilities
//! - Create Axum Router with health handlers at `/health` and `{context_path}/health`
//! - Wire up middleware (tracing, request timeout)
//! - Fire the ready signal once the listener is serving
//! - Stop on the shutdown broadcast

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Settings;
use crate::lifecycle::ReadySignal;

type FiredFn = dyn Fn() -> bool + Send + Sync;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub context_path: String,
    pub registration_fired: Arc<FiredFn>,
}

/// Body of the health endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub app_name: String,
    pub context_path: String,
    pub registration_fired: bool,
}

/// Minimal host application serving under the announced context path.
pub struct HostServer {
    router: Router,
}

impl HostServer {
    /// `registration_fired` reports whether the registrar's latch has been consumed.
    pub fn new<F>(settings: &Settings, registration_fired: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let state = AppState {
            app_name: settings.application.name.clone(),
            context_path: settings.register.context_path.clone(),
            registration_fired: Arc::new(registration_fired),
        };
        let router = Self::build_router(settings, state);
        Self { router }
    }

    #[allow(deprecated)]
    fn build_router(settings: &Settings, state: AppState) -> Router {
        let mut router = Router::new().route("/health", get(health_handler));

        let context_path = settings.register.context_path.trim_end_matches('/');
        if is_mountable(context_path) {
            router = router.route(&format!("{}/health", context_path), get(health_handler));
        } else if !context_path.is_empty() {
            tracing::warn!(
                context_path = %settings.register.context_path,
                "Context path cannot be mounted, serving /health only"
            );
        }

        router.with_state(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    settings.listener.request_timeout_secs,
                ))),
        )
    }

    /// Serve on `listener`, firing `ready` once serving starts.
    pub async fn run(
        self,
        listener: TcpListener,
        ready: ReadySignal,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let serve = axum::serve(listener, self.router).with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received");
        });

        // The socket is already bound; connections queue until the serve loop polls.
        let notified = ready.fire("host-server");
        tracing::debug!(listeners = notified, "Ready signal fired");

        serve.await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn is_mountable(context_path: &str) -> bool {
    context_path.len() > 1
        && context_path.starts_with('/')
        && !context_path.contains(['{', '}', '*'])
        && !context_path.split('/').any(|segment| segment.starts_with(':'))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_name: state.app_name.clone(),
        context_path: state.context_path.clone(),
        registration_fired: (state.registration_fired)(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mountable_context_paths() {
        assert!(is_mountable("/order"));
        assert!(is_mountable("/api/v1"));
        assert!(!is_mountable("/"));
        assert!(!is_mountable("order"));
        assert!(!is_mountable("/{id}"));
        assert!(!is_mountable("/files/*rest"));
        assert!(!is_mountable("/:order"));
        assert!(!is_mountable("/api/:version"));
        assert!(is_mountable("/order:v1"));
    }

    #[test]
    fn test_unmountable_context_path_falls_back_to_health_only() {
        for context_path in ["/:order", "/{id}", "order", "/"] {
            let mut settings = Settings::default();
            settings.application.name = "order-service".into();
            settings.register.context_path = context_path.into();

            // Must not panic on route registration.
            let _server = HostServer::new(&settings, || false);
        }
    }
}
