//! Transport seam for the registration call.
//!
//! # Responsibilities
//! - POST a UTF-8 JSON body to an absolute URL
//! - Return the response body as text, whatever the status
//!
//! # Design Decisions
//! - Injected into the registrar, built once at process scope
//! - Timeouts and pooling belong to the transport, not the registrar
//! - HTTP status is not interpreted; the admin answers with a body literal

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::config::TransportConfig;
use crate::register::error::TransportError;

/// A client able to deliver one registration payload.
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url`, returning the response body.
    fn post(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn post(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        (**self).post(url, body)
    }
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the shared client with the configured timeouts.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(url = %url, status = %status, "Registration call answered");
        Ok(text)
    }
}
