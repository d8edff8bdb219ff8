use crate::config::types::WebUiConfig;
use crate::errors::ConfigError;

fn validate_endpoint(field: &str, endpoint: &str) -> Result<(), ConfigError> {
    let valid = ["http://", "https://"]
        .iter()
        .any(|scheme| endpoint.len() > scheme.len() && endpoint.starts_with(scheme));

    if !valid {
        return Err(ConfigError::InvalidEndpoint {
            field: field.to_string(),
            endpoint: endpoint.to_string(),
        });
    }
    Ok(())
}

/// Validate a merged configuration.
pub fn validate_config(config: &WebUiConfig) -> Result<(), ConfigError> {
    validate_endpoint("auth.endpoint", config.auth_endpoint())?;
    validate_endpoint("instances.endpoint", config.instances_endpoint())?;

    if config.cookie_name().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "session.cookie_name cannot be empty".to_string(),
        });
    }

    if config.container().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "view.container cannot be empty".to_string(),
        });
    }

    if config.instances.refresh_interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "instances.refresh_interval_secs must be greater than 0".to_string(),
        });
    }

    if config.http.max_response_mb == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "http.max_response_mb must be greater than 0".to_string(),
        });
    }

    Ok(())
}
