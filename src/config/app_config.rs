use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, redirect::Policy};

use super::model::CheckerConfig;
use crate::error::ConfigError;

pub const CONFIG_FILE_VAR: &str = "DOWNDETECTOR_CONFIG";
pub const TIMEOUT_VAR: &str = "DOWNDETECTOR_TIMEOUT_MS";
pub const USER_AGENT_VAR: &str = "DOWNDETECTOR_USER_AGENT";
pub const DEFAULT_CONFIG_FILE: &str = "downdetector.yml";

pub struct AppConfig {
    pub checker: CheckerConfig,
    /// The YAML file the settings came from, if any.
    pub source: Option<PathBuf>,
}

/// Load the application configuration from a YAML file and environment variables.
/// A `.env` file in the working directory is loaded first. The YAML file is taken from
/// `DOWNDETECTOR_CONFIG`; without it `downdetector.yml` is used when present and the
/// built-in defaults otherwise. `DOWNDETECTOR_TIMEOUT_MS` and `DOWNDETECTOR_USER_AGENT`
/// override whatever the file says.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    load_config_from(|key| env::var(key).ok())
}

/// Same as [`load_config`], reading variables through `lookup` instead of the process environment.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (path, explicit) = match lookup(CONFIG_FILE_VAR) {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let (mut checker, source) = if explicit || path.exists() {
        let checker = read_config_file(&path)?;
        checker.validate()?;
        (checker, Some(path))
    } else {
        (CheckerConfig::default(), None)
    };

    apply_env_overrides(&mut checker, &lookup)?;

    if let Some(path) = &source {
        tracing::info!("Using config file: {}", path.display());
    }

    Ok(AppConfig { checker, source })
}

fn read_config_file(path: &Path) -> Result<CheckerConfig, ConfigError> {
    let display = path.display().to_string();
    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;

    serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Yaml {
        path: display,
        source,
    })
}

fn apply_env_overrides<F>(config: &mut CheckerConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(TIMEOUT_VAR) {
        config.timeout_ms = value
            .trim()
            .parse()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| ConfigError::InvalidEnv {
                key: TIMEOUT_VAR.to_string(),
                value: value.clone(),
            })?;
    }

    if let Some(value) = lookup(USER_AGENT_VAR) {
        let value = value.trim();
        if !value.is_empty() {
            config.user_agent = value.to_string();
        }
    }

    Ok(())
}

/// Setup the HTTP client used for checks.
/// The client carries the request timeout, user agent and redirect policy from `config`.
/// Proxy variables from the environment are ignored unless `use_system_proxy` is set.
pub fn setup_client(config: &CheckerConfig) -> Result<Client, ConfigError> {
    let redirect = match config.max_redirects {
        0 => Policy::none(),
        n => Policy::limited(n),
    };

    let mut builder = Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .redirect(redirect)
        .danger_accept_invalid_certs(config.accept_invalid_certs);

    if !config.use_system_proxy {
        builder = builder.no_proxy();
    }

    Ok(builder.build()?)
}
