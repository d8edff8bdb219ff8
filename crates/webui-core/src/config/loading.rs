//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.webui/config.toml`
//! 3. **Project config** - `./.webui/config.toml`
//! 4. **Environment** - `WEBUI_*` variables
//! 5. **CLI arguments** - Command-line flags (applied by the binary)

use crate::config::types::{
    AuthConfig, HttpConfig, InstancesConfig, SessionConfig, ViewConfig, WebUiConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const ENV_COOKIE_NAME: &str = "WEBUI_COOKIE_NAME";
pub const ENV_AUTH_ENDPOINT: &str = "WEBUI_AUTH_ENDPOINT";
pub const ENV_INSTANCES_ENDPOINT: &str = "WEBUI_INSTANCES_ENDPOINT";
pub const ENV_REFRESH_INTERVAL_SECS: &str = "WEBUI_REFRESH_INTERVAL_SECS";

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, if
/// an environment override is malformed, or if validation fails. Missing
/// config files are not errors.
pub fn load_hierarchy() -> Result<WebUiConfig, ConfigError> {
    let mut config = WebUiConfig::default();

    if let Some(home_dir) = dirs::home_dir()
        && let Some(user_config) = load_config_file(&home_dir.join(".webui").join("config.toml"))?
    {
        config = merge_configs(config, user_config);
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(project_config) = load_config_file(&cwd.join(".webui").join("config.toml"))?
    {
        config = merge_configs(config, project_config);
    }

    config = apply_env_overrides(config, |var| std::env::var(var).ok())?;

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<WebUiConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::ConfigReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    let config: WebUiConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(
        event = "core.config.file_loaded",
        path = %path.display()
    );

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence for
/// every field it sets.
pub fn merge_configs(base: WebUiConfig, override_config: WebUiConfig) -> WebUiConfig {
    WebUiConfig {
        session: SessionConfig {
            cookie_name: override_config
                .session
                .cookie_name
                .or(base.session.cookie_name),
        },
        auth: AuthConfig {
            endpoint: override_config.auth.endpoint.or(base.auth.endpoint),
        },
        instances: InstancesConfig {
            endpoint: override_config
                .instances
                .endpoint
                .or(base.instances.endpoint),
            refresh_interval_secs: override_config
                .instances
                .refresh_interval_secs
                .or(base.instances.refresh_interval_secs),
            ordering: override_config
                .instances
                .ordering
                .or(base.instances.ordering),
        },
        view: ViewConfig {
            container: override_config.view.container.or(base.view.container),
            avatar_scheme: override_config
                .view
                .avatar_scheme
                .or(base.view.avatar_scheme),
        },
        http: HttpConfig {
            max_response_mb: override_config
                .http
                .max_response_mb
                .or(base.http.max_response_mb),
            gzip: override_config.http.gzip.or(base.http.gzip),
        },
    }
}

/// Apply `WEBUI_*` environment overrides using the given lookup.
///
/// Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: WebUiConfig, lookup: F) -> Result<WebUiConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    if let Some(value) = get(ENV_COOKIE_NAME) {
        config.session.cookie_name = Some(value);
    }
    if let Some(value) = get(ENV_AUTH_ENDPOINT) {
        config.auth.endpoint = Some(value);
    }
    if let Some(value) = get(ENV_INSTANCES_ENDPOINT) {
        config.instances.endpoint = Some(value);
    }
    if let Some(value) = get(ENV_REFRESH_INTERVAL_SECS) {
        let secs = value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: ENV_REFRESH_INTERVAL_SECS.to_string(),
                value: value.clone(),
            })?;
        config.instances.refresh_interval_secs = Some(secs);
    }

    Ok(config)
}
