//! One-shot registration with the admin service.
//!
//! # Responsibilities
//! - Hold the validated registration inputs and the precomputed target URL
//! - Guarantee at most one registration attempt per process
//! - Deliver the payload best-effort and log the outcome
//!
//! # Design Decisions
//! - Latch is an `AtomicBool` flipped with compare-exchange; losers return at once
//! - A disabled registrar still consumes the latch
//! - Only construction can fail; runtime failures are logged, never returned as `Err`
//! - No retries

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Settings;
use crate::observability::metrics;
use crate::register::dto::RegisterDto;
use crate::register::error::ConfigurationError;
use crate::register::transport::Transport;

/// Path appended to the admin base URL.
pub const REGISTER_PATH: &str = "/soul-client/springcloud-register";

/// Body the admin service answers with on acceptance.
pub const SUCCESS_BODY: &str = "success";

/// Validated registration inputs. Only constructible through [`RegistrationConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    context_path: String,
    admin_url: String,
    app_name: String,
    full: bool,
    register_url: String,
}

impl RegistrationConfig {
    /// Validate the inputs. Absent and empty values are both rejected.
    pub fn new(
        context_path: Option<&str>,
        admin_url: Option<&str>,
        app_name: Option<&str>,
        full: bool,
    ) -> Result<Self, ConfigurationError> {
        let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);

        let context_path = present(context_path);
        let admin_url = present(admin_url);
        let app_name = present(app_name);

        match (context_path, admin_url, app_name) {
            (Some(context_path), Some(admin_url), Some(app_name)) => {
                let register_url = format!("{}{}", admin_url, REGISTER_PATH);
                Ok(Self {
                    context_path,
                    admin_url,
                    app_name,
                    full,
                    register_url,
                })
            }
            (context_path, admin_url, app_name) => {
                let mut missing = Vec::new();
                if context_path.is_none() {
                    missing.push("contextPath");
                }
                if admin_url.is_none() {
                    missing.push("adminUrl");
                }
                if app_name.is_none() {
                    missing.push("appName");
                }
                Err(ConfigurationError::Missing(missing))
            }
        }
    }

    /// Take the inputs from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigurationError> {
        Self::new(
            Some(settings.register.context_path.as_str()),
            Some(settings.register.admin_url.as_str()),
            Some(settings.application.name.as_str()),
            settings.register.full,
        )
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn full(&self) -> bool {
        self.full
    }

    /// `admin_url` + [`REGISTER_PATH`].
    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

/// What a single `on_ready` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Another call already consumed the latch.
    AlreadyFired,
    /// Registration is switched off; the latch was consumed without I/O.
    Disabled,
    /// The admin answered `success`.
    Registered,
    /// The admin answered with anything else.
    Rejected { body: String },
    /// The call never got an answer.
    Failed { error: String },
}

impl RegistrationOutcome {
    /// Short label used for metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationOutcome::AlreadyFired => "already_fired",
            RegistrationOutcome::Disabled => "disabled",
            RegistrationOutcome::Registered => "registered",
            RegistrationOutcome::Rejected { .. } => "rejected",
            RegistrationOutcome::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::Rejected { body } => write!(f, "rejected: {:?}", body),
            RegistrationOutcome::Failed { error } => write!(f, "failed: {}", error),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Announces this application's context path to the admin service, once.
pub struct Registrar<T> {
    config: RegistrationConfig,
    transport: T,
    registered: AtomicBool,
}

impl<T: Transport> Registrar<T> {
    pub fn new(config: RegistrationConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            registered: AtomicBool::new(false),
        }
    }

    /// Handle an "application ready" event. Safe to call any number of times from any task.
    pub async fn on_ready(&self) -> RegistrationOutcome {
        if self
            .registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Ready event ignored, registration already fired");
            return RegistrationOutcome::AlreadyFired;
        }

        let outcome = if self.config.full {
            match self.build_json_params() {
                Ok(json) => self.post(json).await,
                Err(e) => {
                    tracing::error!(error = %e, "cannot serialize registration payload");
                    RegistrationOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            }
        } else {
            tracing::info!(
                context_path = %self.config.context_path,
                "Registration disabled, skipping admin call"
            );
            RegistrationOutcome::Disabled
        };

        metrics::record_registration(outcome.as_str());
        outcome
    }

    /// Whether the latch has been consumed.
    pub fn is_fired(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    pub fn register_url(&self) -> &str {
        self.config.register_url()
    }

    async fn post(&self, json: String) -> RegistrationOutcome {
        let url = self.config.register_url();
        match self.transport.post(url, json.clone()).await {
            Ok(body) if body == SUCCESS_BODY => {
                tracing::info!(payload = %json, "http context register success");
                RegistrationOutcome::Registered
            }
            Ok(body) => {
                tracing::error!(payload = %json, response = %body, "http context register error");
                RegistrationOutcome::Rejected { body }
            }
            Err(e) => {
                tracing::error!(
                    url = %url,
                    payload = %json,
                    error = %e,
                    "cannot register with admin"
                );
                RegistrationOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn build_json_params(&self) -> Result<String, serde_json::Error> {
        let dto = RegisterDto::spring_cloud(&self.config.context_path, &self.config.app_name);
        serde_json::to_string(&dto)
    }
}
