//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::Settings;
use crate::config::validation::{validate_settings, ValidationError};

/// Environment key for the application name.
pub const ENV_APP_NAME: &str = "APP_NAME";
/// Environment key for the admin base URL.
pub const ENV_ADMIN_URL: &str = "REGISTER_ADMIN_URL";
/// Environment key for the announced context path.
pub const ENV_CONTEXT_PATH: &str = "REGISTER_CONTEXT_PATH";
/// Environment key for the registration switch.
pub const ENV_FULL: &str = "REGISTER_FULL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load settings from a TOML file, apply environment overrides, and validate.
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Like [`load_config`], taking override values from `lookup` instead of the environment.
pub fn load_config_with<F>(path: &Path, lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    finish(read_settings(path)?, lookup)
}

/// Parse a TOML file without overrides or validation.
pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Build settings from defaults plus environment overrides only.
pub fn load_from_env() -> Result<Settings, ConfigError> {
    finish(Settings::default(), |key| std::env::var(key).ok())
}

fn finish<F>(mut settings: Settings, lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_overrides(&mut settings, lookup);
    validate_settings(&settings).map_err(ConfigError::Validation)?;
    Ok(settings)
}

/// Overlay the process environment on `settings`.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

/// Overlay values from `lookup` on top of file settings.
///
/// Empty values are ignored. `REGISTER_FULL` accepts `true`/`false` (case-insensitive);
/// anything else is ignored with a warning.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(name) = non_empty(ENV_APP_NAME) {
        settings.application.name = name;
    }
    if let Some(url) = non_empty(ENV_ADMIN_URL) {
        settings.register.admin_url = url;
    }
    if let Some(path) = non_empty(ENV_CONTEXT_PATH) {
        settings.register.context_path = path;
    }
    if let Some(full) = non_empty(ENV_FULL) {
        match full.to_ascii_lowercase().as_str() {
            "true" => settings.register.full = true,
            "false" => settings.register.full = false,
            _ => tracing::warn!(key = ENV_FULL, value = %full, "Ignoring non-boolean override"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut settings: Settings = toml::from_str(
            r#"
            [application]
            name = "from-file"

            [register]
            admin_url = "http://file:9095"
            context_path = "/file"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_APP_NAME, "from-env"),
            (ENV_CONTEXT_PATH, "/env"),
            (ENV_ADMIN_URL, ""),
            (ENV_FULL, "FALSE"),
        ]);
        apply_overrides(&mut settings, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.application.name, "from-env");
        assert_eq!(settings.register.context_path, "/env");
        // empty override is ignored
        assert_eq!(settings.register.admin_url, "http://file:9095");
        assert!(!settings.register.full);
    }

    #[test]
    fn test_invalid_full_override_is_ignored() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, |k| (k == ENV_FULL).then(|| "yes".to_string()));
        assert!(settings.register.full);
    }

    #[test]
    fn test_load_reports_every_missing_field() {
        let path = std::env::temp_dir().join("context_register_missing_fields.toml");
        std::fs::write(&path, "[register]\nfull = true\n").unwrap();

        let err = load_config_with(&path, |_| None).unwrap_err();
        std::fs::remove_file(&path).unwrap_or_default();

        match err {
            ConfigError::Validation(errors) => assert_eq!(
                errors,
                vec![
                    ValidationError::Missing("register.context_path"),
                    ValidationError::Missing("register.admin_url"),
                    ValidationError::Missing("application.name"),
                ]
            ),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_load_with_overrides_fills_missing_fields() {
        let path = std::env::temp_dir().join("context_register_overrides_fill.toml");
        std::fs::write(&path, "[register]\nadmin_url = \"http://admin:9095\"\n").unwrap();

        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_APP_NAME, "order-service"), (ENV_CONTEXT_PATH, "/order")]);
        let settings = load_config_with(&path, |k| env.get(k).map(|v| v.to_string()));
        std::fs::remove_file(&path).unwrap_or_default();

        let settings = settings.unwrap();
        assert_eq!(settings.application.name, "order-service");
        assert_eq!(settings.register.context_path, "/order");
        assert_eq!(settings.register.admin_url, "http://admin:9095");
    }

    #[test]
    fn test_load_reports_parse_error() {
        let path = std::env::temp_dir().join("context_register_parse_error.toml");
        std::fs::write(&path, "[register\n").unwrap();

        let err = load_config(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap_or_default();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
