//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// Environment variable overriding the configured server origin.
pub const ORIGIN_ENV: &str = "RECIPE_API_ORIGIN";
/// Environment variable overriding the router's history base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load configuration from a TOML file, apply environment overrides, and
/// validate.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ClientConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Build configuration from defaults and environment variables alone.
pub fn from_env() -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut ClientConfig) {
    if let Ok(origin) = env::var(ORIGIN_ENV) {
        config.origin = origin;
    }
    if let Ok(base) = env::var(BASE_URL_ENV) {
        config.router_base = base;
    }
}

fn validate_config(config: &ClientConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    match Url::parse(&config.origin) {
        Ok(url) if url.has_host() => {}
        Ok(_) => errors.push(format!("origin '{}' has no host", config.origin)),
        Err(e) => errors.push(format!("origin '{}' is not a valid URL: {e}", config.origin)),
    }
    if !config.api_base.starts_with('/') {
        errors.push(format!("api_base '{}' must start with '/'", config.api_base));
    }
    if !config.router_base.starts_with('/') {
        errors.push(format!(
            "router_base '{}' must start with '/'",
            config.router_base
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}
